//! Data models for the annotator
//!
//! This module contains the interaction state shared between the WASM API
//! and the annotator.

pub mod annotator_state;

// Re-export commonly used types
pub use annotator_state::{AnnotatorState, Mode};
