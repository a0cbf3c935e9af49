//! Property-based tests for the segmentation engine.
//!
//! Uses proptest to verify invariants that must hold for any text and any
//! set of in-bounds spans.

use std::collections::BTreeSet;

use annotator_wasm::{segment, AnnotationRef, Segmentation, Span, DEFAULT_LONG_SPAN_THRESHOLD};
use proptest::prelude::*;

// ============================================================================
// Strategies
// ============================================================================

/// Short ASCII texts with newlines (offsets equal char indices)
fn text_strategy() -> impl Strategy<Value = String> {
    "[ab \\n]{0,60}"
}

/// A text together with spans that fit inside it
fn text_and_spans() -> impl Strategy<Value = (String, Vec<Span>)> {
    text_strategy().prop_flat_map(|text| {
        let len = text.len();
        let spans = prop::collection::vec((0..=len, 0..=len), 0..8)
            .prop_map(|points| points.into_iter().map(|(a, b)| Span::between(a, b)).collect::<Vec<Span>>());
        (Just(text), spans)
    })
}

fn boundaries(result: &Segmentation) -> BTreeSet<usize> {
    result
        .segments
        .iter()
        .flat_map(|s| [s.start, s.end])
        .collect()
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    /// Segments tile [0, len) in order with no gap and no overlap.
    #[test]
    fn segments_tile_the_text((text, spans) in text_and_spans()) {
        let result = segment(&text, &spans).unwrap();

        prop_assert!(!result.segments.is_empty());
        prop_assert_eq!(result.segments[0].start, 0);
        prop_assert_eq!(result.segments.last().unwrap().end, text.len());
        for pair in result.segments.windows(2) {
            prop_assert_eq!(pair[0].end, pair[1].start);
        }
        if !text.is_empty() {
            prop_assert!(result.segments.iter().all(|s| s.start < s.end));
        }
    }

    /// Joining segment texts reproduces the input.
    #[test]
    fn segment_texts_are_lossless((text, spans) in text_and_spans()) {
        let result = segment(&text, &spans).unwrap();
        let joined: String = result.segments.iter().map(|s| s.text.as_str()).collect();
        prop_assert_eq!(joined, text);
    }

    /// Every span start and end is a segment boundary.
    #[test]
    fn span_edges_are_boundaries((text, spans) in text_and_spans()) {
        let result = segment(&text, &spans).unwrap();
        let cuts = boundaries(&result);

        for span in &spans {
            prop_assert!(cuts.contains(&span.start), "start {} missing", span.start);
            prop_assert!(cuts.contains(&span.end), "end {} missing", span.end);
        }
    }

    /// Each input span is a member of exactly one group.
    #[test]
    fn groups_partition_the_spans((text, spans) in text_and_spans()) {
        let result = segment(&text, &spans).unwrap();

        let mut members: Vec<AnnotationRef> = result
            .groups
            .iter()
            .flat_map(|g| g.annotations.iter().copied())
            .collect();
        members.sort();
        let expected: Vec<AnnotationRef> = (0..spans.len()).map(AnnotationRef).collect();
        prop_assert_eq!(members, expected);
    }

    /// Groups are ordered and never overlap one another.
    #[test]
    fn groups_do_not_overlap((text, spans) in text_and_spans()) {
        let result = segment(&text, &spans).unwrap();

        for pair in result.groups.windows(2) {
            prop_assert!(pair[0].end <= pair[1].start);
        }
    }

    /// A segment's active spans are exactly the non-empty spans covering it,
    /// and it belongs to a group exactly when one is active.
    #[test]
    fn segment_membership_matches_coverage((text, spans) in text_and_spans()) {
        let result = segment(&text, &spans).unwrap();

        for seg in result.segments.iter().filter(|s| s.start < s.end) {
            let expected: BTreeSet<AnnotationRef> = spans
                .iter()
                .enumerate()
                .filter(|(_, span)| !span.is_empty() && span.start <= seg.start && seg.end <= span.end)
                .map(|(i, _)| AnnotationRef(i))
                .collect();
            let actual: BTreeSet<AnnotationRef> = seg.spans.iter().copied().collect();
            prop_assert_eq!(actual, expected);

            prop_assert_eq!(seg.group.is_some(), !seg.spans.is_empty());
            if let Some(group) = result.group_of(seg) {
                prop_assert!(group.start <= seg.start && seg.end <= group.end);
            }
        }
    }

    /// No segment contains a newline except as its last character.
    #[test]
    fn newlines_end_segments((text, spans) in text_and_spans()) {
        let result = segment(&text, &spans).unwrap();

        for seg in &result.segments {
            let body = seg.text.strip_suffix('\n').unwrap_or(seg.text.as_str());
            prop_assert!(!body.contains('\n'), "segment {:?} straddles a newline", seg.text);
        }
    }

    /// Spans over the threshold are cut at every interior offset.
    #[test]
    fn long_spans_are_fragmented((text, spans) in text_and_spans()) {
        let result = segment(&text, &spans).unwrap();
        let cuts = boundaries(&result);

        for span in spans.iter().filter(|s| s.len() > DEFAULT_LONG_SPAN_THRESHOLD) {
            for offset in span.start..=span.end {
                prop_assert!(cuts.contains(&offset));
            }
        }
    }

    /// Same input, same output.
    #[test]
    fn segmentation_is_deterministic((text, spans) in text_and_spans()) {
        prop_assert_eq!(segment(&text, &spans).unwrap(), segment(&text, &spans).unwrap());
    }

    /// Spans reaching past the text are rejected.
    #[test]
    fn out_of_bounds_spans_are_rejected(text in text_strategy(), overshoot in 1usize..10) {
        let spans = [Span::new(0, text.len() + overshoot)];
        prop_assert!(segment(&text, &spans).is_err());
    }
}
