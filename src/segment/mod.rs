//! Segmentation of annotated text
//!
//! This module turns (base text, overlapping spans) into the flat list of
//! segments the presentation layer renders, plus the groups that make
//! overlapping annotations clickable as one unit.
//!
//! The engine is a pure function: no state survives between calls, so it is
//! safe to call on every render and from any thread.
//!
//! ## Modules
//!
//! - `engine`: The split-point sweep and its options
//! - `types`: Segment, SegmentGroup and Segmentation
//! - `errors`: Input validation failures

pub mod engine;
pub mod errors;
pub mod types;

pub use engine::{segment, segment_with_options, SegmentOptions, DEFAULT_LONG_SPAN_THRESHOLD};
pub use errors::SegmentError;
pub use types::{GroupId, Segment, SegmentGroup, Segmentation};
