//! Render descriptors for segments
//!
//! This module turns a segmentation plus the interaction state into one
//! `SegmentView` per segment. JavaScript renders these without doing any
//! membership or selection bookkeeping of its own.

use serde::{Deserialize, Serialize};

use crate::models::{AnnotatorState, Mode};
use crate::segment::{GroupId, Segment, SegmentGroup, Segmentation};
use crate::text::{AnnotationRef, Span};

/// Popup anchored at the end of a segment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Popup {
    /// Value entry for the span being drafted
    CreateAnnotation { span: Span },

    /// Details (and removal) of the selected annotation
    Annotation { annotation: AnnotationRef },

    /// Picker listing every annotation of the selected group
    SelectAnnotation { annotations: Vec<AnnotationRef> },
}

/// Everything needed to draw one segment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SegmentView {
    pub segment_id: usize,
    pub start: usize,
    pub end: usize,

    /// Text to draw (annotated segments drop their trailing newline, which is
    /// emitted after the inline block instead)
    pub display_text: String,
    pub ends_with_newline: bool,

    pub group_id: Option<GroupId>,
    pub is_group_highlighted: bool,
    pub is_group_selected: bool,
    pub is_span_highlighted: bool,
    pub is_annotation_selected: bool,
    pub is_new_annotation_span: bool,

    /// Saved annotations in this segment's group
    pub annotation_count: usize,

    /// Show "N annotations" under the last segment of an ambiguous group
    pub show_count_badge: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub popup: Option<Popup>,
}

/// Build views for every segment
///
/// `spans` is the span list the segmentation was computed from and `draft`
/// the position of the in-progress span in it, if any.
pub fn render_segments(
    segmentation: &Segmentation,
    spans: &[Span],
    state: &AnnotatorState,
    draft: Option<AnnotationRef>,
) -> Vec<SegmentView> {
    segmentation
        .segments
        .iter()
        .map(|segment| match segmentation.group_of(segment) {
            Some(group) => annotated_view(segment, group, spans, state, draft),
            None => plain_view(segment),
        })
        .collect()
}

fn plain_view(segment: &Segment) -> SegmentView {
    SegmentView {
        segment_id: segment.segment_id,
        start: segment.start,
        end: segment.end,
        display_text: segment.text.clone(),
        ends_with_newline: segment.ends_with_newline(),
        group_id: None,
        is_group_highlighted: false,
        is_group_selected: false,
        is_span_highlighted: false,
        is_annotation_selected: false,
        is_new_annotation_span: false,
        annotation_count: 0,
        show_count_badge: false,
        popup: None,
    }
}

fn annotated_view(
    segment: &Segment,
    group: &SegmentGroup,
    spans: &[Span],
    state: &AnnotatorState,
    draft: Option<AnnotationRef>,
) -> SegmentView {
    let covers = |annotation: Option<AnnotationRef>| annotation.map_or(false, |a| segment.contains(a));
    let ends_here = |annotation: AnnotationRef| {
        spans
            .get(annotation.index())
            .map_or(false, |span| span.end == segment.end)
    };

    let is_group_highlighted = state.highlighted_group == Some(group.group_id);
    let is_group_selected = state.selected_group() == Some(group.group_id);
    let is_span_highlighted = covers(state.highlighted_annotation);
    let is_annotation_selected = covers(state.selected_annotation());
    let is_new_annotation_span = covers(draft);

    let annotation_count = group.len() - usize::from(is_new_annotation_span);
    let is_group_tail = group.end == segment.end;

    let popup = match state.mode {
        Mode::NewAnnotation { span } if is_new_annotation_span && span.end == segment.end => {
            Some(Popup::CreateAnnotation { span })
        }
        Mode::AnnotationSelected { annotation, .. } if is_annotation_selected && ends_here(annotation) => {
            Some(Popup::Annotation { annotation })
        }
        Mode::GroupSelected { .. } if is_group_selected && is_group_tail => Some(Popup::SelectAnnotation {
            annotations: group.annotations.clone(),
        }),
        _ => None,
    };

    let display_text = segment
        .text
        .strip_suffix('\n')
        .unwrap_or(segment.text.as_str())
        .to_string();

    SegmentView {
        segment_id: segment.segment_id,
        start: segment.start,
        end: segment.end,
        display_text,
        ends_with_newline: segment.ends_with_newline(),
        group_id: Some(group.group_id),
        is_group_highlighted,
        is_group_selected,
        is_span_highlighted,
        is_annotation_selected,
        is_new_annotation_span,
        annotation_count,
        show_count_badge: annotation_count > 1 && is_group_tail,
        popup,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::segment::segment;

    fn spans() -> Vec<Span> {
        vec![Span::new(0, 7), Span::new(4, 11)]
    }

    #[test]
    fn test_plain_segments_have_no_flags() {
        let segmentation = segment::<Span>("ab\ncd", &[]).unwrap();
        let views = render_segments(&segmentation, &[], &AnnotatorState::new(), None);

        assert_eq!(views.len(), 2);
        assert_eq!(views[0].display_text, "ab\n"); // Plain text keeps its newline
        assert!(views[0].ends_with_newline);
        assert!(views.iter().all(|v| v.group_id.is_none() && v.popup.is_none()));
    }

    #[test]
    fn test_count_badge_on_group_tail_only() {
        let spans = spans();
        let segmentation = segment("Hello World", &spans).unwrap();
        let views = render_segments(&segmentation, &spans, &AnnotatorState::new(), None);

        assert_eq!(views.len(), 3);
        assert!(views.iter().all(|v| v.annotation_count == 2));
        assert!(!views[0].show_count_badge);
        assert!(!views[1].show_count_badge);
        assert!(views[2].show_count_badge);
    }

    #[test]
    fn test_group_picker_popup() {
        let spans = spans();
        let segmentation = segment("Hello World", &spans).unwrap();
        let mut state = AnnotatorState::new();
        state.select_group(&segmentation.groups[0]);

        let views = render_segments(&segmentation, &spans, &state, None);

        assert!(views.iter().all(|v| v.is_group_selected));
        assert_eq!(views[0].popup, None);
        assert_eq!(
            views[2].popup,
            Some(Popup::SelectAnnotation {
                annotations: vec![AnnotationRef(0), AnnotationRef(1)],
            })
        );
    }

    #[test]
    fn test_selected_annotation_popup_at_its_end() {
        let spans = spans();
        let segmentation = segment("Hello World", &spans).unwrap();
        let mut state = AnnotatorState::new();
        state.select_group(&segmentation.groups[0]);
        state.select_annotation(AnnotationRef(0));

        let views = render_segments(&segmentation, &spans, &state, None);

        assert!(views[0].is_annotation_selected);
        assert!(views[1].is_annotation_selected);
        assert!(!views[2].is_annotation_selected);
        // [0, 7) ends with the second segment
        assert_eq!(views[1].popup, Some(Popup::Annotation { annotation: AnnotationRef(0) }));
    }

    #[test]
    fn test_draft_excluded_from_count() {
        // Saved [0, 5) plus a draft [3, 8) appended last
        let spans = vec![Span::new(0, 5), Span::new(3, 8)];
        let segmentation = segment("Hello World", &spans).unwrap();
        let mut state = AnnotatorState::new();
        state.begin_draft(Span::new(3, 8));

        let views = render_segments(&segmentation, &spans, &state, Some(AnnotationRef(1)));

        // Segments: [0,3) [3,5) [5,8) [8,11)
        assert!(!views[0].is_new_annotation_span);
        assert_eq!(views[0].annotation_count, 2);
        assert!(views[1].is_new_annotation_span);
        assert_eq!(views[1].annotation_count, 1);
        assert_eq!(views[2].popup, Some(Popup::CreateAnnotation { span: Span::new(3, 8) }));
    }

    #[test]
    fn test_annotated_newline_is_stripped() {
        let spans = vec![Span::new(0, 5)];
        let segmentation = segment("ab\ncd", &spans).unwrap();
        let views = render_segments(&segmentation, &spans, &AnnotatorState::new(), None);

        assert_eq!(views[0].display_text, "ab");
        assert!(views[0].ends_with_newline);
        assert_eq!(views[1].display_text, "cd");
    }
}
