//! Property tests over the pure pipeline stages.

use proptest::prelude::*;

use semantic_splitter::assembly::{chunk_text, enforce_min_size, plan_ranges};
use semantic_splitter::breakpoints::detect_breakpoints;
use semantic_splitter::delimiters;
use semantic_splitter::segmenter::sentences;

fn arb_document() -> impl Strategy<Value = String> {
    // Words, sentence terminators, and assorted whitespace.
    proptest::collection::vec(
        prop_oneof![
            "[a-zA-Z]{1,8}",
            Just(".".to_string()),
            Just("!".to_string()),
            Just("?".to_string()),
            Just(" ".to_string()),
            Just("\n".to_string()),
        ],
        0..60,
    )
    .prop_map(|parts| parts.concat())
}

proptest! {
    /// Sentence spans tile the document: no gaps, no overlaps, exact
    /// reconstruction from raw spans.
    #[test]
    fn sentence_spans_tile_the_document(doc in arb_document()) {
        let delims = delimiters::resolve("");
        let spans: Vec<_> = sentences(&doc, &delims).collect();

        let mut cursor = 0;
        for sentence in &spans {
            prop_assert_eq!(sentence.start, cursor);
            prop_assert!(sentence.end > sentence.start);
            cursor = sentence.end;
        }
        if let Some(last) = spans.last() {
            prop_assert_eq!(last.end, doc.len());
        } else {
            // Zero sentences only for whitespace-only input.
            prop_assert!(doc.chars().all(char::is_whitespace));
        }

        let rebuilt: String = spans.iter().map(|s| s.raw(&doc)).collect();
        if !spans.is_empty() {
            prop_assert_eq!(rebuilt, doc);
        }
    }

    /// Trimmed sentence texts never drop non-whitespace content.
    #[test]
    fn sentence_texts_preserve_words(doc in arb_document()) {
        let delims = delimiters::resolve("");
        let spans: Vec<_> = sentences(&doc, &delims).collect();
        let original: String = doc.split_whitespace().collect();
        let joined: String = spans
            .iter()
            .flat_map(|s| s.text.split_whitespace())
            .collect();
        prop_assert_eq!(original, joined);
    }

    /// Raising the percentile threshold never produces more breakpoints.
    #[test]
    fn breakpoint_count_is_monotone_in_threshold(
        distances in proptest::collection::vec(0.0f32..1.0, 0..40),
        lower in 0.01f32..1.0,
        delta in 0.0f32..0.5,
    ) {
        let higher = (lower + delta).min(1.0);
        let at_lower = detect_breakpoints(&distances, lower).len();
        let at_higher = detect_breakpoints(&distances, higher).len();
        prop_assert!(at_higher <= at_lower);
    }

    /// After min-size enforcement every chunk meets the minimum, or exactly
    /// one chunk remains; ranges stay contiguous and cover all sentences.
    #[test]
    fn min_size_enforcement_holds(
        doc in arb_document(),
        cuts in proptest::collection::vec(1usize..30, 0..8),
        min in 0usize..40,
    ) {
        let delims = delimiters::resolve("");
        let spans: Vec<_> = sentences(&doc, &delims).collect();
        prop_assume!(!spans.is_empty());

        let ranges = plan_ranges(spans.len(), &cuts);
        let merged = enforce_min_size(&doc, &spans, ranges, min);

        prop_assert_eq!(merged.first().map(|r| r.0), Some(0));
        prop_assert_eq!(merged.last().map(|r| r.1), Some(spans.len()));
        for pair in merged.windows(2) {
            prop_assert_eq!(pair[0].1, pair[1].0);
        }

        if merged.len() > 1 {
            for range in &merged {
                let len = chunk_text(&doc, &spans, *range).chars().count();
                prop_assert!(len >= min, "chunk of {} chars below minimum {}", len, min);
            }
        }
    }
}
