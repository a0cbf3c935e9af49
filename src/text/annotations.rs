//! Annotation store
//!
//! Annotations are kept separately from the immutable base text and are
//! linked to it by code-unit offsets. The interaction layer only talks to
//! the store through the `AnnotationStore` trait, so hosts can plug in their
//! own backing list.

use super::span::{Annotation, AnnotationRef, HasSpan, Span};
use serde::{Deserialize, Serialize};

/// Minimal interface the annotator needs from an annotation list
pub trait AnnotationStore {
    /// Current annotations, in creation order
    fn annotations(&self) -> &[Annotation];

    /// Append a newly created annotation
    fn create(&mut self, annotation: Annotation);

    /// Remove the annotation at this position
    fn delete(&mut self, annotation: AnnotationRef) -> Option<Annotation>;

    /// Get an annotation by position
    fn get(&self, annotation: AnnotationRef) -> Option<&Annotation> {
        self.annotations().get(annotation.index())
    }

    /// Number of stored annotations
    fn len(&self) -> usize {
        self.annotations().len()
    }

    fn is_empty(&self) -> bool {
        self.annotations().is_empty()
    }
}

/// Vec-backed annotation store
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnnotationList {
    annotations: Vec<Annotation>,
}

impl AnnotationList {
    /// Create a new empty list
    pub fn new() -> Self {
        Self::default()
    }

    /// References to annotations overlapping a code-unit offset
    pub fn annotations_at(&self, offset: usize) -> Vec<AnnotationRef> {
        self.annotations
            .iter()
            .enumerate()
            .filter(|(_, annotation)| annotation.span().contains(offset))
            .map(|(index, _)| AnnotationRef(index))
            .collect()
    }

    /// References to annotations overlapping a span
    pub fn annotations_overlapping(&self, span: Span) -> Vec<AnnotationRef> {
        self.annotations
            .iter()
            .enumerate()
            .filter(|(_, annotation)| annotation.span().overlaps(&span))
            .map(|(index, _)| AnnotationRef(index))
            .collect()
    }
}

impl From<Vec<Annotation>> for AnnotationList {
    fn from(annotations: Vec<Annotation>) -> Self {
        Self { annotations }
    }
}

impl AnnotationStore for AnnotationList {
    fn annotations(&self) -> &[Annotation] {
        &self.annotations
    }

    fn create(&mut self, annotation: Annotation) {
        self.annotations.push(annotation);
    }

    fn delete(&mut self, annotation: AnnotationRef) -> Option<Annotation> {
        if annotation.index() < self.annotations.len() {
            Some(self.annotations.remove(annotation.index()))
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_list() -> AnnotationList {
        AnnotationList::from(vec![
            Annotation::new(Span::new(3, 13), "Name"),
            Annotation::new(Span::new(2, 14), "React Component"),
            Annotation::new(Span::new(15, 20), "Library"),
        ])
    }

    #[test]
    fn test_create_appends() {
        let mut list = AnnotationList::new();
        list.create(Annotation::new(Span::new(0, 5), "A"));
        list.create(Annotation::new(Span::new(2, 4), "B"));

        assert_eq!(list.len(), 2);
        assert_eq!(list.get(AnnotationRef(1)).map(|a| a.value.as_str()), Some("B"));
    }

    #[test]
    fn test_delete_by_position_keeps_equal_twin() {
        // Two structurally identical annotations are still distinct entries
        let mut list = AnnotationList::from(vec![
            Annotation::new(Span::new(0, 5), "A"),
            Annotation::new(Span::new(0, 5), "A"),
        ]);

        let removed = list.delete(AnnotationRef(0));

        assert!(removed.is_some());
        assert_eq!(list.len(), 1);
        assert!(list.delete(AnnotationRef(5)).is_none());
    }

    #[test]
    fn test_annotations_at() {
        let list = sample_list();

        assert_eq!(list.annotations_at(3), vec![AnnotationRef(0), AnnotationRef(1)]);
        assert_eq!(list.annotations_at(2), vec![AnnotationRef(1)]);
        assert_eq!(list.annotations_at(14), Vec::<AnnotationRef>::new());
    }

    #[test]
    fn test_annotations_overlapping() {
        let list = sample_list();

        assert_eq!(
            list.annotations_overlapping(Span::new(13, 16)),
            vec![AnnotationRef(1), AnnotationRef(2)]
        );
    }
}
