//! Segmentation engine
//!
//! Splits the base text into non-overlapping segments and clusters
//! overlapping spans into groups, in a single sweep over sorted split points.
//!
//! ## Algorithm
//!
//! 1. Collect split points: every span start and end, offsets 0 and
//!    `len(text)`, the offset after every newline, and every interior offset
//!    of a long span.
//! 2. Sweep the split points in ascending order. At each offset, ending spans
//!    leave the active set (closing the open group once it empties), then
//!    starting spans join the open group (opening one if needed), then the
//!    previous segment is closed and a new one is opened with a snapshot of
//!    the active set.
//!
//! Annotated segments render as inline blocks, so long annotations are cut
//! into small pieces and no segment straddles a line break.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::errors::SegmentError;
use super::types::{GroupId, Segment, SegmentGroup, Segmentation};
use crate::text::{AnnotationRef, HasSpan, Span, Utf16Text};

/// Spans longer than this are cut at every interior offset by default
pub const DEFAULT_LONG_SPAN_THRESHOLD: usize = 20;

/// Segmentation settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SegmentOptions {
    /// Spans longer than this many code units are split at every interior
    /// offset (None disables the fragmentation)
    pub long_span_threshold: Option<usize>,

    /// Whether to force a boundary right after each newline
    pub split_after_newline: bool,
}

impl Default for SegmentOptions {
    fn default() -> Self {
        Self {
            long_span_threshold: Some(DEFAULT_LONG_SPAN_THRESHOLD),
            split_after_newline: true,
        }
    }
}

/// What happens at one split point
#[derive(Debug, Default)]
struct SplitPoint {
    starting: Vec<usize>,
    ending: Vec<usize>,
    newline: bool,
}

/// Segment `text` under `spans` with the default options
pub fn segment<S: HasSpan>(text: &str, spans: &[S]) -> Result<Segmentation, SegmentError> {
    segment_with_options(text, spans, &SegmentOptions::default())
}

/// Segment `text` under `spans`
///
/// Spans are identified in the output by their position in `spans`
/// (`AnnotationRef`). Spans starting or ending at the same offset are
/// processed in input order.
///
/// # Errors
/// `SegmentError::InvalidSpan` if a span is inverted or ends past the text.
pub fn segment_with_options<S: HasSpan>(
    text: &str,
    spans: &[S],
    options: &SegmentOptions,
) -> Result<Segmentation, SegmentError> {
    let text = Utf16Text::new(text);
    let text_len = text.len();
    let spans: Vec<Span> = spans.iter().map(HasSpan::span).collect();
    validate_spans(&spans, text_len)?;

    let split_points = collect_split_points(&text, &spans, options);
    log::trace!(
        "segment: {} spans, {} split points over {} code units",
        spans.len(),
        split_points.len(),
        text_len
    );

    let mut active: Vec<AnnotationRef> = Vec::new();
    let mut open_group: Option<GroupId> = None;
    let mut groups: Vec<SegmentGroup> = Vec::new();
    let mut segments: Vec<Segment> = Vec::new();

    for (&offset, point) in &split_points {
        for &index in &point.ending {
            let before = active.len();
            active.retain(|annotation| annotation.index() != index);
            if active.len() == before {
                // Zero-length span, never entered the active set
                continue;
            }

            if let Some(group_id) = open_group {
                groups[group_id.0].end = offset;
                if active.is_empty() {
                    open_group = None;
                }
            }
        }

        for &index in &point.starting {
            let group_id = match open_group {
                Some(group_id) => group_id,
                None => {
                    let group_id = GroupId(groups.len());
                    groups.push(SegmentGroup::open(group_id, offset));
                    open_group = Some(group_id);
                    group_id
                }
            };
            groups[group_id.0].annotations.push(AnnotationRef(index));

            if !spans[index].is_empty() {
                active.push(AnnotationRef(index));
            }
        }

        // A group opened only by zero-length spans closes where it opened
        if active.is_empty() {
            open_group = None;
        }

        if let Some(previous) = segments.last_mut() {
            previous.end = offset;
            previous.text = text.slice(previous.start, offset);
        }

        segments.push(Segment {
            segment_id: segments.len(),
            start: offset,
            end: text_len,
            text: String::new(),
            spans: active.clone(),
            group: open_group,
            starts_line: point.newline,
        });
    }

    // The sweep always ends at len(text), leaving an empty trailing segment.
    // Empty text keeps its single [0, 0) segment.
    if segments.len() > 1 && segments.last().map(|s| s.start) == Some(text_len) {
        segments.pop();
    }

    log::debug!(
        "segment: produced {} segments in {} groups",
        segments.len(),
        groups.len()
    );

    Ok(Segmentation { segments, groups })
}

fn validate_spans(spans: &[Span], text_len: usize) -> Result<(), SegmentError> {
    for (index, span) in spans.iter().enumerate() {
        if span.start > span.end || span.end > text_len {
            log::warn!(
                "segment: rejecting span #{} [{}, {}) over text of length {}",
                index,
                span.start,
                span.end,
                text_len
            );
            return Err(SegmentError::InvalidSpan {
                index,
                start: span.start,
                end: span.end,
                text_len,
            });
        }
    }
    Ok(())
}

fn collect_split_points(
    text: &Utf16Text,
    spans: &[Span],
    options: &SegmentOptions,
) -> BTreeMap<usize, SplitPoint> {
    let mut split_points: BTreeMap<usize, SplitPoint> = BTreeMap::new();
    split_points.entry(0).or_default();
    split_points.entry(text.len()).or_default();

    for (index, span) in spans.iter().enumerate() {
        if let Some(threshold) = options.long_span_threshold {
            if span.len() > threshold {
                for offset in span.start + 1..span.end {
                    split_points.entry(offset).or_default();
                }
            }
        }
        split_points.entry(span.start).or_default().starting.push(index);
        split_points.entry(span.end).or_default().ending.push(index);
    }

    if options.split_after_newline {
        for offset in text.line_starts() {
            split_points.entry(offset).or_default().newline = true;
        }
    }

    split_points
}
