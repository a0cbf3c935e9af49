//! Segmentation output types
//!
//! A `Segmentation` is rebuilt from scratch on every pass and is read-only
//! to consumers. Groups and annotations are referenced by id, never by
//! pointer, so the whole result serializes straight to JavaScript.

use crate::text::{AnnotationRef, Span};
use serde::{Deserialize, Serialize};

/// Position of a group in `Segmentation::groups`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GroupId(pub usize);

/// A run of mutually overlapping annotations, rendered as one interactive unit
///
/// For example, ranges [0, 5) and [3, 8) form a single group [0, 8) that is
/// rendered as the segments [0, 3), [3, 5) and [5, 8).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SegmentGroup {
    pub group_id: GroupId,
    pub start: usize,
    pub end: usize,
    /// Member annotations in the order they started
    pub annotations: Vec<AnnotationRef>,
}

impl SegmentGroup {
    pub(crate) fn open(group_id: GroupId, offset: usize) -> Self {
        Self {
            group_id,
            start: offset,
            end: offset,
            annotations: Vec::new(),
        }
    }

    /// Covering extent of the group
    pub fn span(&self) -> Span {
        Span::new(self.start, self.end)
    }

    /// Number of member annotations
    pub fn len(&self) -> usize {
        self.annotations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.annotations.is_empty()
    }

    /// More than one annotation competes for clicks in this group
    pub fn is_ambiguous(&self) -> bool {
        self.annotations.len() > 1
    }

    pub fn contains(&self, annotation: AnnotationRef) -> bool {
        self.annotations.contains(&annotation)
    }
}

/// Smallest contiguous piece of text with uniform annotation coverage
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    /// Sequence index, stable within one pass
    pub segment_id: usize,
    pub start: usize,
    pub end: usize,
    /// The text this segment covers
    pub text: String,
    /// Annotations active over this segment, in start order
    pub spans: Vec<AnnotationRef>,
    /// Group owning this segment (None for plain text)
    pub group: Option<GroupId>,
    /// Segment begins right after a newline
    pub starts_line: bool,
}

impl Segment {
    pub fn span(&self) -> Span {
        Span::new(self.start, self.end)
    }

    pub fn is_annotated(&self) -> bool {
        self.group.is_some()
    }

    pub fn contains(&self, annotation: AnnotationRef) -> bool {
        self.spans.contains(&annotation)
    }

    pub fn ends_with_newline(&self) -> bool {
        self.text.ends_with('\n')
    }
}

/// Result of one segmentation pass
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segmentation {
    pub segments: Vec<Segment>,
    pub groups: Vec<SegmentGroup>,
}

impl Segmentation {
    /// Look up a group by id
    pub fn group(&self, group_id: GroupId) -> Option<&SegmentGroup> {
        self.groups.get(group_id.0)
    }

    /// Group owning a segment
    pub fn group_of(&self, segment: &Segment) -> Option<&SegmentGroup> {
        segment.group.and_then(|id| self.group(id))
    }

    /// Group an annotation was folded into
    pub fn group_containing(&self, annotation: AnnotationRef) -> Option<&SegmentGroup> {
        self.groups.iter().find(|group| group.contains(annotation))
    }

    /// Segment covering a code-unit offset
    pub fn segment_at(&self, offset: usize) -> Option<&Segment> {
        let index = self.segments.partition_point(|segment| segment.end <= offset);
        self.segments
            .get(index)
            .filter(|segment| segment.span().contains(offset))
    }

    /// Last segment of a group (where badges and popups are anchored)
    pub fn is_group_tail(&self, segment: &Segment) -> bool {
        self.group_of(segment)
            .map(|group| group.end == segment.end)
            .unwrap_or(false)
    }
}
