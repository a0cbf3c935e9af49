//! Error types for segmentation
//!
//! The engine is total over well-formed input; the only failure is a span
//! that does not fit the text it is laid over.

use thiserror::Error;

/// Segmentation failure
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SegmentError {
    /// Span is inverted or reaches past the end of the text
    #[error("Invalid span #{index}: [{start}, {end}) does not fit text of length {text_len}")]
    InvalidSpan {
        index: usize,
        start: usize,
        end: usize,
        text_len: usize,
    },
}
