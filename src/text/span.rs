//! Spans and annotations over the base text
//!
//! Offsets are UTF-16 code units, matching how the browser indexes strings.

use serde::{Deserialize, Serialize};

/// A half-open range of text `[start, end)`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Build a span from two unordered points (e.g. selection anchor and focus)
    pub fn between(a: usize, b: usize) -> Self {
        Self {
            start: a.min(b),
            end: a.max(b),
        }
    }

    /// Check if this span is empty (start == end)
    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    /// Length in code units
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Check if an offset is contained within this span
    pub fn contains(&self, offset: usize) -> bool {
        offset >= self.start && offset < self.end
    }

    /// Check if two spans share at least one code unit
    pub fn overlaps(&self, other: &Span) -> bool {
        self.start < other.end && other.start < self.end
    }
}

/// Anything that covers a span of the base text
///
/// The segmentation engine accepts any slice of `HasSpan` values, so plain
/// spans and full annotations can be fed to it without conversion.
pub trait HasSpan {
    fn span(&self) -> Span;
}

impl HasSpan for Span {
    fn span(&self) -> Span {
        *self
    }
}

/// A user-created annotation: a span plus a free-form value
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Annotation {
    pub start: usize,
    pub end: usize,
    pub value: String,
}

impl Annotation {
    pub fn new(span: Span, value: impl Into<String>) -> Self {
        Self {
            start: span.start,
            end: span.end,
            value: value.into(),
        }
    }
}

impl HasSpan for Annotation {
    fn span(&self) -> Span {
        Span::new(self.start, self.end)
    }
}

/// Identity of an annotation within one segmentation pass
///
/// This is the annotation's position in the span list handed to the engine,
/// so two annotations with equal start/end/value are still distinct.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnnotationRef(pub usize);

impl AnnotationRef {
    pub fn index(self) -> usize {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_contains() {
        let span = Span::new(2, 5);

        assert!(span.contains(2));
        assert!(span.contains(4));
        assert!(!span.contains(5)); // Exclusive end
        assert!(!span.contains(1));
    }

    #[test]
    fn test_span_between_orders_points() {
        // Backward selection (focus before anchor)
        assert_eq!(Span::between(7, 3), Span::new(3, 7));
        assert_eq!(Span::between(3, 7), Span::new(3, 7));
    }

    #[test]
    fn test_span_overlaps() {
        let a = Span::new(0, 5);

        assert!(a.overlaps(&Span::new(4, 8)));
        assert!(!a.overlaps(&Span::new(5, 8))); // Touching is not overlapping
        assert!(Span::new(3, 4).overlaps(&a));
    }

    #[test]
    fn test_annotation_span() {
        let annotation = Annotation::new(Span::new(3, 13), "Name");

        assert_eq!(annotation.span(), Span::new(3, 13));
        assert_eq!(annotation.value, "Name");
    }
}
