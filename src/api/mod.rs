//! Annotator WASM API
//!
//! This module provides the JavaScript-facing API for the annotator.
//! It includes shared utilities for serialization, error handling and
//! logging, and the API functions organized by functional domain.
//!
//! # Module Structure
//!
//! - `helpers`: Shared utilities for serialization, error handling, logging and
//!   access to the WASM-owned annotator
//! - `segments`: Stateless segmentation (`segmentText`)
//! - `session`: Annotator session and user intents

pub mod helpers;
pub mod segments;
pub mod session;

pub use segments::segment_text;
pub use session::{
    delete_annotation, get_annotations, get_segmentation, get_state, highlight_annotation,
    highlight_group, init_annotator, render_segments, request_new_annotation,
    request_new_annotation_from_selection, reset_state, save_annotation, select_annotation,
    select_group,
};
