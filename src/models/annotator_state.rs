//! Annotator interaction state
//!
//! This module contains the AnnotatorState struct which tracks what the user
//! is doing with the annotated text: hovering, picking one of several
//! overlapping annotations, inspecting an annotation, or drafting a new one.
//!
//! The mode is a tagged union so that e.g. a selected annotation and a draft
//! span can never coexist.

use serde::{Deserialize, Serialize};

use crate::segment::{GroupId, SegmentGroup};
use crate::text::{AnnotationRef, Span};

/// What the annotator is currently doing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum Mode {
    /// Nothing selected
    #[default]
    Normal,

    /// A group with several annotations was clicked; the user must pick one
    GroupSelected { group_id: GroupId },

    /// One annotation is selected (directly or picked from its group)
    AnnotationSelected {
        group_id: Option<GroupId>,
        annotation: AnnotationRef,
    },

    /// A text selection is being turned into a new annotation
    NewAnnotation { span: Span },
}

/// Complete interaction state
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnotatorState {
    pub mode: Mode,

    /// Group under the pointer (independent of the mode)
    pub highlighted_group: Option<GroupId>,

    /// Annotation under the pointer in the group picker
    pub highlighted_annotation: Option<AnnotationRef>,
}

impl AnnotatorState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_normal(&self) -> bool {
        self.mode == Mode::Normal
    }

    /// Group currently selected, if any
    pub fn selected_group(&self) -> Option<GroupId> {
        match self.mode {
            Mode::GroupSelected { group_id } => Some(group_id),
            Mode::AnnotationSelected { group_id, .. } => group_id,
            _ => None,
        }
    }

    /// Annotation currently selected, if any
    pub fn selected_annotation(&self) -> Option<AnnotationRef> {
        match self.mode {
            Mode::AnnotationSelected { annotation, .. } => Some(annotation),
            _ => None,
        }
    }

    /// Span being drafted, if any
    pub fn draft_span(&self) -> Option<Span> {
        match self.mode {
            Mode::NewAnnotation { span } => Some(span),
            _ => None,
        }
    }

    pub fn highlight_group(&mut self, group_id: Option<GroupId>) {
        self.highlighted_group = group_id;
    }

    pub fn highlight_annotation(&mut self, annotation: Option<AnnotationRef>) {
        self.highlighted_annotation = annotation;
    }

    /// Handle a click on a group
    ///
    /// Only honored from normal mode. A group with a single annotation selects
    /// that annotation directly; otherwise the group picker opens.
    pub fn select_group(&mut self, group: &SegmentGroup) {
        if !self.is_normal() {
            log::debug!("select_group({:?}) ignored in {:?}", group.group_id, self.mode);
            return;
        }

        self.mode = match group.annotations.as_slice() {
            [only] => Mode::AnnotationSelected {
                group_id: Some(group.group_id),
                annotation: *only,
            },
            _ => Mode::GroupSelected {
                group_id: group.group_id,
            },
        };
        self.highlighted_group = Some(group.group_id);
        self.highlighted_annotation = None;
    }

    /// Select one annotation, keeping the selected group
    pub fn select_annotation(&mut self, annotation: AnnotationRef) {
        self.mode = Mode::AnnotationSelected {
            group_id: self.selected_group(),
            annotation,
        };
    }

    /// Start drafting a new annotation over `span`
    pub fn begin_draft(&mut self, span: Span) {
        self.mode = Mode::NewAnnotation { span };
    }

    /// Back to normal mode with no highlights
    pub fn reset(&mut self) {
        self.mode = Mode::Normal;
        self.highlighted_group = None;
        self.highlighted_annotation = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn group(id: usize, members: &[usize]) -> SegmentGroup {
        SegmentGroup {
            group_id: GroupId(id),
            start: 0,
            end: 5,
            annotations: members.iter().map(|&i| AnnotationRef(i)).collect(),
        }
    }

    #[test]
    fn test_state_new() {
        let state = AnnotatorState::new();

        assert!(state.is_normal());
        assert!(state.highlighted_group.is_none());
        assert!(state.selected_annotation().is_none());
    }

    #[test]
    fn test_select_single_member_group_selects_annotation() {
        let mut state = AnnotatorState::new();
        state.highlight_annotation(Some(AnnotationRef(9)));

        state.select_group(&group(0, &[3]));

        assert_eq!(
            state.mode,
            Mode::AnnotationSelected {
                group_id: Some(GroupId(0)),
                annotation: AnnotationRef(3),
            }
        );
        assert_eq!(state.highlighted_group, Some(GroupId(0)));
        assert!(state.highlighted_annotation.is_none());
    }

    #[test]
    fn test_select_overlapping_group_opens_picker() {
        let mut state = AnnotatorState::new();

        state.select_group(&group(1, &[0, 1]));

        assert_eq!(state.mode, Mode::GroupSelected { group_id: GroupId(1) });
        assert_eq!(state.selected_group(), Some(GroupId(1)));
    }

    #[test]
    fn test_select_group_only_from_normal() {
        let mut state = AnnotatorState::new();
        state.begin_draft(Span::new(0, 2));

        state.select_group(&group(0, &[0, 1]));

        assert_eq!(state.draft_span(), Some(Span::new(0, 2)));
    }

    #[test]
    fn test_pick_annotation_from_group_keeps_group() {
        let mut state = AnnotatorState::new();
        state.select_group(&group(2, &[0, 1]));

        state.select_annotation(AnnotationRef(1));

        assert_eq!(state.selected_group(), Some(GroupId(2)));
        assert_eq!(state.selected_annotation(), Some(AnnotationRef(1)));
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut state = AnnotatorState::new();
        state.select_group(&group(0, &[0]));
        state.highlight_annotation(Some(AnnotationRef(0)));

        state.reset();

        assert_eq!(state, AnnotatorState::default());
    }

    #[test]
    fn test_mode_serializes_tagged() {
        let json = serde_json::to_value(Mode::GroupSelected { group_id: GroupId(4) }).unwrap();
        assert_eq!(json, serde_json::json!({ "mode": "group_selected", "group_id": 4 }));
    }
}
