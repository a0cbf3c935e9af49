//! Stateless segmentation API
//!
//! For hosts that keep annotations on the JavaScript side and only need the
//! engine.

use wasm_bindgen::prelude::*;

use crate::api::helpers::{deserialize, deserialize_or_default, serialize, validation_error};
use crate::segment::{segment_with_options, SegmentOptions};
use crate::text::Span;
use crate::{wasm_error, wasm_log};

/// Split text into segments and groups
///
/// # Parameters
/// - `text`: The base text
/// - `spans`: Array of `{ start, end }` objects (extra fields such as `value`
///   are ignored), offsets in UTF-16 code units
/// - `options`: Optional `{ long_span_threshold, split_after_newline }`
///
/// # Returns
/// ```json
/// {
///   "segments": [{ "segment_id": 0, "start": 0, "end": 5, "text": "Hello",
///                  "spans": [0], "group": 0, "starts_line": false }],
///   "groups": [{ "group_id": 0, "start": 0, "end": 5, "annotations": [0] }]
/// }
/// ```
#[wasm_bindgen(js_name = segmentText)]
pub fn segment_text(text: &str, spans_js: JsValue, options_js: JsValue) -> Result<JsValue, JsValue> {
    let spans: Vec<Span> = deserialize(spans_js, "Failed to deserialize spans")?;
    let options: SegmentOptions = deserialize_or_default(options_js, "Failed to deserialize options")?;

    wasm_log!("segmentText: {} spans over {} bytes", spans.len(), text.len());

    let segmentation = segment_with_options(text, &spans, &options).map_err(|e| {
        wasm_error!("segmentText failed: {}", e);
        validation_error(e.to_string())
    })?;

    serialize(&segmentation, "Failed to serialize segmentation")
}
