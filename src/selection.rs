//! Selection resolution
//!
//! The presentation layer renders every segment into a region (a DOM element
//! on the web) and reports text selections as (region, offset-in-region)
//! pairs. `RegionMap` maps those back to code-unit offsets in the base text.
//!
//! The map holds plain ids, never the regions themselves, and is cleared and
//! refilled on every render. Regions that are not registered directly (text
//! nodes, decorations) are linked to a registered ancestor with
//! `set_parent`; resolution walks up those links.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::segment::Segmentation;
use crate::text::Span;

/// Opaque handle of a rendered region
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RegionId(pub usize);

impl RegionId {
    /// Region id used for a segment when registering a whole segmentation
    pub fn for_segment(segment_id: usize) -> Self {
        Self(segment_id)
    }
}

/// One end of a user selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionPoint {
    pub region: RegionId,
    /// Offset inside the region, in code units
    pub offset: usize,
}

impl SelectionPoint {
    pub fn new(region: RegionId, offset: usize) -> Self {
        Self { region, offset }
    }
}

/// Region id -> span side-table with containment links
#[derive(Debug, Clone, Default)]
pub struct RegionMap {
    spans: HashMap<RegionId, Span>,
    parents: HashMap<RegionId, RegionId>,
}

impl RegionMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Associate a rendered region with the span it displays
    pub fn register(&mut self, region: RegionId, span: Span) {
        self.spans.insert(region, span);
    }

    /// Record that `child` is rendered inside `parent`
    pub fn set_parent(&mut self, child: RegionId, parent: RegionId) {
        self.parents.insert(child, parent);
    }

    /// Drop every association (called before each render)
    pub fn clear(&mut self) {
        self.spans.clear();
        self.parents.clear();
    }

    /// Replace the table with one region per segment
    pub fn register_segments(&mut self, segmentation: &Segmentation) {
        self.clear();
        for segment in &segmentation.segments {
            self.register(RegionId::for_segment(segment.segment_id), segment.span());
        }
    }

    pub fn len(&self) -> usize {
        self.spans.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    /// Span of the nearest registered region at or above `region`
    pub fn span_of(&self, region: RegionId) -> Option<Span> {
        let mut current = region;
        // Bounded walk so a cyclic parent chain cannot hang
        for _ in 0..=self.parents.len() {
            if let Some(span) = self.spans.get(&current) {
                return Some(*span);
            }
            current = *self.parents.get(&current)?;
        }
        None
    }

    /// Convert (region, offset in region) to an offset in the base text
    ///
    /// Returns None for unmapped regions and offsets that overflow.
    pub fn resolve_offset(&self, region: RegionId, offset_in_region: usize) -> Option<usize> {
        self.span_of(region)?.start.checked_add(offset_in_region)
    }

    /// Convert a user selection to a span of the base text
    ///
    /// Returns None when either end lies outside annotatable text or the
    /// selection is collapsed.
    pub fn resolve_selection(&self, anchor: SelectionPoint, focus: SelectionPoint) -> Option<Span> {
        let anchor_offset = self.resolve_offset(anchor.region, anchor.offset)?;
        let focus_offset = self.resolve_offset(focus.region, focus.offset)?;

        let span = Span::between(anchor_offset, focus_offset);
        if span.is_empty() {
            return None;
        }
        Some(span)
    }
}
