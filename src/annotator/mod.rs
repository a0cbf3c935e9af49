//! Annotator: interaction layer over the segmentation engine
//!
//! Owns the base text, the annotation store, the interaction state and the
//! region table, and turns user intents into state changes and store
//! updates. Every render re-runs the engine from scratch over the stored
//! annotations with the draft span (if any) appended last.

pub mod errors;

pub use errors::AnnotatorError;

use crate::models::AnnotatorState;
use crate::segment::{segment_with_options, GroupId, SegmentError, SegmentOptions, Segmentation};
use crate::selection::{RegionMap, SelectionPoint};
use crate::text::{utf16_len, Annotation, AnnotationList, AnnotationRef, AnnotationStore, HasSpan, Span};
use crate::view::{render_segments, SegmentView};

/// Annotated text with its interaction state
#[derive(Debug, Clone)]
pub struct Annotator<S: AnnotationStore = AnnotationList> {
    text: String,
    text_len: usize,
    store: S,
    state: AnnotatorState,
    options: SegmentOptions,
    regions: RegionMap,
}

impl<S: AnnotationStore> Annotator<S> {
    /// Create an annotator over immutable `text`
    pub fn new(text: impl Into<String>, store: S) -> Self {
        let text = text.into();
        let text_len = utf16_len(&text);
        Self {
            text,
            text_len,
            store,
            state: AnnotatorState::new(),
            options: SegmentOptions::default(),
            regions: RegionMap::new(),
        }
    }

    /// Use non-default segmentation settings
    pub fn with_options(mut self, options: SegmentOptions) -> Self {
        self.options = options;
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Length of the base text in UTF-16 code units
    pub fn text_len(&self) -> usize {
        self.text_len
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    pub fn state(&self) -> &AnnotatorState {
        &self.state
    }

    pub fn options(&self) -> &SegmentOptions {
        &self.options
    }

    /// Region table filled by the last `render`
    pub fn regions(&self) -> &RegionMap {
        &self.regions
    }

    pub fn annotation(&self, annotation: AnnotationRef) -> Option<&Annotation> {
        self.store.get(annotation)
    }

    /// Position of the draft span in the current pass's span list
    pub fn draft_ref(&self) -> Option<AnnotationRef> {
        self.state
            .draft_span()
            .map(|_| AnnotationRef(self.store.len()))
    }

    /// Spans fed to the engine: stored annotations, then the draft
    pub fn pass_spans(&self) -> Vec<Span> {
        self.store
            .annotations()
            .iter()
            .map(HasSpan::span)
            .chain(self.state.draft_span())
            .collect()
    }

    /// Run the engine over the current annotations
    pub fn segmentation(&self) -> Result<Segmentation, AnnotatorError> {
        Ok(segment_with_options(&self.text, &self.pass_spans(), &self.options)?)
    }

    /// Segment, refresh the region table and build the segment views
    pub fn render(&mut self) -> Result<Vec<SegmentView>, AnnotatorError> {
        let spans = self.pass_spans();
        let segmentation = segment_with_options(&self.text, &spans, &self.options)?;
        self.regions.register_segments(&segmentation);
        Ok(render_segments(&segmentation, &spans, &self.state, self.draft_ref()))
    }

    pub fn highlight_group(&mut self, group_id: Option<GroupId>) {
        self.state.highlight_group(group_id);
    }

    pub fn highlight_annotation(&mut self, annotation: Option<AnnotationRef>) {
        self.state.highlight_annotation(annotation);
    }

    /// Click on a group; unknown ids are ignored
    ///
    /// Returns whether the group exists in the current segmentation.
    pub fn select_group(&mut self, group_id: GroupId) -> Result<bool, AnnotatorError> {
        let segmentation = self.segmentation()?;
        match segmentation.group(group_id) {
            Some(group) => {
                self.state.select_group(group);
                Ok(true)
            }
            None => {
                log::debug!("select_group: no group {:?}", group_id);
                Ok(false)
            }
        }
    }

    /// Pick one annotation (from the group picker)
    pub fn select_annotation(&mut self, annotation: AnnotationRef) {
        self.state.select_annotation(annotation);
    }

    /// Start drafting an annotation over `span`
    ///
    /// `None` or an empty span (collapsed selection) leaves the state alone.
    pub fn request_new_annotation(&mut self, span: Option<Span>) -> Result<(), AnnotatorError> {
        let span = match span {
            Some(span) if !span.is_empty() => span,
            _ => return Ok(()),
        };

        if span.end > self.text_len {
            return Err(SegmentError::InvalidSpan {
                index: self.store.len(),
                start: span.start,
                end: span.end,
                text_len: self.text_len,
            }
            .into());
        }

        log::debug!("request_new_annotation: drafting [{}, {})", span.start, span.end);
        self.state.begin_draft(span);
        Ok(())
    }

    /// Resolve a user selection through the region table and start a draft
    ///
    /// Returns whether a draft was started.
    pub fn request_new_annotation_from_selection(
        &mut self,
        anchor: SelectionPoint,
        focus: SelectionPoint,
    ) -> Result<bool, AnnotatorError> {
        let span = self.regions.resolve_selection(anchor, focus);
        self.request_new_annotation(span)?;
        Ok(span.is_some())
    }

    /// Store the draft with `value` and return to normal mode
    pub fn save_annotation(&mut self, value: impl Into<String>) -> Result<AnnotationRef, AnnotatorError> {
        let span = self.state.draft_span().ok_or(AnnotatorError::NoDraft)?;

        self.store.create(Annotation::new(span, value));
        self.state.reset();

        let created = AnnotationRef(self.store.len() - 1);
        log::info!("save_annotation: created #{} [{}, {})", created.index(), span.start, span.end);
        Ok(created)
    }

    /// Remove a stored annotation and return to normal mode
    pub fn delete_annotation(&mut self, annotation: AnnotationRef) -> Result<Annotation, AnnotatorError> {
        let removed = self
            .store
            .delete(annotation)
            .ok_or(AnnotatorError::UnknownAnnotation(annotation.index()))?;

        self.state.reset();
        log::info!("delete_annotation: removed #{}", annotation.index());
        Ok(removed)
    }

    /// Back to normal mode with no highlights
    pub fn reset(&mut self) {
        self.state.reset();
    }
}
