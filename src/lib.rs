//! Text Annotator WASM Module
//!
//! Renders immutable text with user-created, possibly overlapping
//! annotations. The core is the segmentation engine, which cuts the text
//! into non-overlapping segments and clusters overlapping annotations into
//! clickable groups; around it sit the interaction state machine, the
//! selection resolver and the JavaScript-facing API.

pub mod annotator;
pub mod api;
pub mod models;
pub mod segment;
pub mod selection;
pub mod text;
pub mod view;

// Re-export commonly used types
pub use annotator::{Annotator, AnnotatorError};
pub use models::{AnnotatorState, Mode};
pub use segment::{
    segment, segment_with_options, GroupId, Segment, SegmentError, SegmentGroup, SegmentOptions,
    Segmentation, DEFAULT_LONG_SPAN_THRESHOLD,
};
pub use selection::{RegionId, RegionMap, SelectionPoint};
pub use text::{Annotation, AnnotationList, AnnotationRef, AnnotationStore, HasSpan, Span};
pub use view::{render_segments, Popup, SegmentView};

use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    init_logging();

    log::info!("Text annotator WASM module initialized");
}

#[cfg(feature = "console_log")]
fn init_logging() {
    // Fails only if a logger is already installed
    let _ = console_log::init_with_level(log::Level::Debug);
}

#[cfg(not(feature = "console_log"))]
fn init_logging() {}
