//! Text layer
//!
//! The base text is immutable. Everything drawn on top of it (annotations,
//! draft selections) is addressed with UTF-16 code-unit spans.
//!
//! ## Modules
//!
//! - `span`: Span, Annotation and per-pass annotation identity
//! - `utf16`: Code-unit indexing of the base text
//! - `annotations`: The annotation store seam

pub mod span;
pub mod utf16;
pub mod annotations;

// Re-exports for convenience
pub use span::{Annotation, AnnotationRef, HasSpan, Span};
pub use utf16::{utf16_len, Utf16Text};
pub use annotations::{AnnotationList, AnnotationStore};
