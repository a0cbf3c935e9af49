//! Error types for annotator intents

use thiserror::Error;

use crate::segment::SegmentError;

/// Failure of an annotator intent
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnnotatorError {
    /// Annotations (or the draft) do not fit the base text
    #[error("Segmentation failed: {0}")]
    Segment(#[from] SegmentError),

    /// Save requested while no span is being drafted
    #[error("No annotation is being drafted")]
    NoDraft,

    /// Reference does not point at a stored annotation
    #[error("Unknown annotation #{0}")]
    UnknownAnnotation(usize),
}
