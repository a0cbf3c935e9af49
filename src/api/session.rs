//! WASM API for the annotator session
//!
//! The annotator (text, annotations, interaction state) lives on the WASM
//! side. JavaScript forwards user intents here and re-renders from
//! `renderSegments` after each one.
//!
//! ```text
//! mouseup      → requestNewAnnotationFromSelection(...) → renderSegments()
//! click group  → selectGroup(id)                        → renderSegments()
//! save popup   → saveAnnotation(value)                  → getAnnotations()
//! ```

use wasm_bindgen::prelude::*;

use crate::annotator::Annotator;
use crate::api::helpers::{
    annotator_error, deserialize, deserialize_or_default, lock_annotator, serialize, with_annotator,
};
use crate::segment::{GroupId, SegmentOptions};
use crate::selection::{RegionId, SelectionPoint};
use crate::text::{Annotation, AnnotationList, AnnotationRef, AnnotationStore, Span};
use crate::{wasm_info, wasm_log, wasm_warn};

/// Load text and annotations, replacing any previous session
///
/// # Parameters
/// - `text`: The base text (immutable for the session)
/// - `annotations_js`: Array of `{ start, end, value }`
/// - `options_js`: Optional segmentation options
#[wasm_bindgen(js_name = initAnnotator)]
pub fn init_annotator(text: &str, annotations_js: JsValue, options_js: JsValue) -> Result<(), JsValue> {
    let annotations: Vec<Annotation> = deserialize(annotations_js, "Failed to deserialize annotations")?;
    let options: SegmentOptions = deserialize_or_default(options_js, "Failed to deserialize options")?;

    wasm_info!("initAnnotator: {} annotations", annotations.len());

    let annotator = Annotator::new(text, AnnotationList::from(annotations)).with_options(options);
    // Reject annotations that do not fit the text up front
    annotator.segmentation().map_err(annotator_error)?;

    *lock_annotator()? = Some(annotator);
    Ok(())
}

/// Current annotations as `[{ start, end, value }]`
#[wasm_bindgen(js_name = getAnnotations)]
pub fn get_annotations() -> Result<JsValue, JsValue> {
    let annotations = with_annotator(|annotator| Ok(annotator.store().annotations().to_vec()))?;
    serialize(&annotations, "Failed to serialize annotations")
}

/// Raw segmentation for the current annotations (draft included)
#[wasm_bindgen(js_name = getSegmentation)]
pub fn get_segmentation() -> Result<JsValue, JsValue> {
    let segmentation = with_annotator(|annotator| annotator.segmentation())?;
    serialize(&segmentation, "Failed to serialize segmentation")
}

/// Render descriptors, one per segment
///
/// Also refreshes the region table: segment `n` is region `n` for
/// `requestNewAnnotationFromSelection`.
#[wasm_bindgen(js_name = renderSegments)]
pub fn render_segments() -> Result<js_sys::Array, JsValue> {
    let views = with_annotator(|annotator| annotator.render())?;
    wasm_log!("renderSegments: {} segments", views.len());

    let array = js_sys::Array::new();
    for view in &views {
        array.push(&serialize(view, "Failed to serialize segment view")?);
    }
    Ok(array)
}

/// Current interaction state
#[wasm_bindgen(js_name = getState)]
pub fn get_state() -> Result<JsValue, JsValue> {
    let state = with_annotator(|annotator| Ok(annotator.state().clone()))?;
    serialize(&state, "Failed to serialize state")
}

#[wasm_bindgen(js_name = highlightGroup)]
pub fn highlight_group(group_id: Option<usize>) -> Result<(), JsValue> {
    with_annotator(|annotator| {
        annotator.highlight_group(group_id.map(GroupId));
        Ok(())
    })
}

#[wasm_bindgen(js_name = highlightAnnotation)]
pub fn highlight_annotation(annotation: Option<usize>) -> Result<(), JsValue> {
    with_annotator(|annotator| {
        annotator.highlight_annotation(annotation.map(AnnotationRef));
        Ok(())
    })
}

#[wasm_bindgen(js_name = selectGroup)]
pub fn select_group(group_id: usize) -> Result<(), JsValue> {
    wasm_log!("selectGroup: {}", group_id);
    let found = with_annotator(|annotator| annotator.select_group(GroupId(group_id)))?;
    if !found {
        wasm_warn!("selectGroup: no group {} in the current segmentation", group_id);
    }
    Ok(())
}

#[wasm_bindgen(js_name = selectAnnotation)]
pub fn select_annotation(annotation: usize) -> Result<(), JsValue> {
    wasm_log!("selectAnnotation: {}", annotation);
    with_annotator(|annotator| {
        annotator.select_annotation(AnnotationRef(annotation));
        Ok(())
    })
}

/// Start drafting an annotation over `[start, end)`
#[wasm_bindgen(js_name = requestNewAnnotation)]
pub fn request_new_annotation(start: usize, end: usize) -> Result<(), JsValue> {
    wasm_log!("requestNewAnnotation: [{}, {})", start, end);
    with_annotator(|annotator| annotator.request_new_annotation(Some(Span::between(start, end))))
}

/// Start drafting from a DOM selection
///
/// Regions are the ids handed out by `renderSegments`. Returns false when the
/// selection is collapsed or falls outside the annotated text.
#[wasm_bindgen(js_name = requestNewAnnotationFromSelection)]
pub fn request_new_annotation_from_selection(
    anchor_region: usize,
    anchor_offset: usize,
    focus_region: usize,
    focus_offset: usize,
) -> Result<bool, JsValue> {
    with_annotator(|annotator| {
        annotator.request_new_annotation_from_selection(
            SelectionPoint::new(RegionId(anchor_region), anchor_offset),
            SelectionPoint::new(RegionId(focus_region), focus_offset),
        )
    })
}

/// Save the draft; returns the new annotation's index
#[wasm_bindgen(js_name = saveAnnotation)]
pub fn save_annotation(value: &str) -> Result<usize, JsValue> {
    let created = with_annotator(|annotator| annotator.save_annotation(value))?;
    wasm_info!("saveAnnotation: created #{}", created.index());
    Ok(created.index())
}

/// Remove an annotation; returns the removed `{ start, end, value }`
#[wasm_bindgen(js_name = deleteAnnotation)]
pub fn delete_annotation(annotation: usize) -> Result<JsValue, JsValue> {
    let removed = with_annotator(|annotator| annotator.delete_annotation(AnnotationRef(annotation)))?;
    wasm_info!("deleteAnnotation: removed #{}", annotation);
    serialize(&removed, "Failed to serialize annotation")
}

#[wasm_bindgen(js_name = resetState)]
pub fn reset_state() -> Result<(), JsValue> {
    with_annotator(|annotator| {
        annotator.reset();
        Ok(())
    })
}
