//! Cuts the sentence sequence at breakpoints and enforces the minimum chunk
//! size.

use crate::segmenter::Sentence;

/// Half-open range of sentence indices forming one chunk.
pub type ChunkRange = (usize, usize);

/// Produces contiguous sentence ranges from breakpoint indices.
///
/// Breakpoints are sorted and deduplicated; cuts at zero or beyond the last
/// sentence are ignored. The ranges always cover `0..sentence_count`.
pub fn plan_ranges(sentence_count: usize, breakpoints: &[usize]) -> Vec<ChunkRange> {
    if sentence_count == 0 {
        return Vec::new();
    }

    let mut sorted = breakpoints.to_vec();
    sorted.sort_unstable();
    sorted.dedup();

    let mut ranges = Vec::new();
    let mut start = 0;
    for &point in &sorted {
        if point <= start || point >= sentence_count {
            continue;
        }
        ranges.push((start, point));
        start = point;
    }
    ranges.push((start, sentence_count));
    ranges
}

/// Materializes a chunk's text from the original document.
///
/// The slice spans the first sentence's start to the last sentence's end, so
/// inter-sentence text (delimiters and whitespace) is preserved verbatim;
/// only the outer edges are trimmed.
pub fn chunk_text(doc: &str, sentences: &[Sentence<'_>], range: ChunkRange) -> String {
    let (start, end) = range;
    doc[sentences[start].start..sentences[end - 1].end]
        .trim()
        .to_string()
}

/// Merges chunks shorter than `min_chunk_size` characters into a neighbor.
///
/// Left-to-right scan: an undersized chunk merges into the following one, or
/// into the preceding one when it is last. Repeats until every chunk meets
/// the minimum or exactly one remains.
pub fn enforce_min_size(
    doc: &str,
    sentences: &[Sentence<'_>],
    mut ranges: Vec<ChunkRange>,
    min_chunk_size: usize,
) -> Vec<ChunkRange> {
    if min_chunk_size == 0 {
        return ranges;
    }

    let too_small = |range: &ChunkRange| -> bool {
        chunk_text(doc, sentences, *range).chars().count() < min_chunk_size
    };

    while ranges.len() > 1 {
        let Some(idx) = ranges.iter().position(too_small) else {
            break;
        };
        if idx + 1 < ranges.len() {
            let following = ranges.remove(idx + 1);
            ranges[idx].1 = following.1;
        } else {
            let last = ranges.pop().expect("non-empty ranges");
            ranges
                .last_mut()
                .expect("preceding range exists")
                .1 = last.1;
        }
    }
    ranges
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::segmenter::sentences;

    fn sample<'a>(doc: &'a str, delimiters: &'a [String]) -> Vec<Sentence<'a>> {
        sentences(doc, delimiters).collect()
    }

    #[test]
    fn no_breakpoints_yield_single_range() {
        assert_eq!(plan_ranges(4, &[]), vec![(0, 4)]);
    }

    #[test]
    fn breakpoints_cut_into_contiguous_ranges() {
        assert_eq!(plan_ranges(5, &[2, 4]), vec![(0, 2), (2, 4), (4, 5)]);
    }

    #[test]
    fn out_of_range_and_duplicate_cuts_are_ignored() {
        assert_eq!(plan_ranges(3, &[0, 2, 2, 3, 9]), vec![(0, 2), (2, 3)]);
    }

    #[test]
    fn chunk_text_preserves_interior_whitespace() {
        let d = vec![".".to_string()];
        let doc = "One.  Two.   Three.";
        let s = sample(doc, &d);
        assert_eq!(chunk_text(doc, &s, (0, 2)), "One.  Two.");
        assert_eq!(chunk_text(doc, &s, (1, 3)), "Two.   Three.");
    }

    #[test]
    fn undersized_chunk_merges_forward() {
        let d = vec![".".to_string()];
        let doc = "Hi. A considerably longer second sentence.";
        let s = sample(doc, &d);
        let merged = enforce_min_size(doc, &s, vec![(0, 1), (1, 2)], 10);
        assert_eq!(merged, vec![(0, 2)]);
    }

    #[test]
    fn undersized_last_chunk_merges_backward() {
        let d = vec![".".to_string()];
        let doc = "A considerably longer first sentence. Bye.";
        let s = sample(doc, &d);
        let merged = enforce_min_size(doc, &s, vec![(0, 1), (1, 2)], 10);
        assert_eq!(merged, vec![(0, 2)]);
    }

    #[test]
    fn merging_repeats_until_minimum_met() {
        let d = vec![".".to_string()];
        let doc = "Aa. Bb. Cc. Dd.";
        let s = sample(doc, &d);
        let ranges: Vec<ChunkRange> = vec![(0, 1), (1, 2), (2, 3), (3, 4)];
        let merged = enforce_min_size(doc, &s, ranges, 7);
        for range in &merged {
            assert!(chunk_text(doc, &s, *range).chars().count() >= 7);
        }
        assert_eq!(merged, vec![(0, 2), (2, 4)]);
    }

    #[test]
    fn whole_document_below_minimum_collapses_to_one_chunk() {
        let d = vec![".".to_string()];
        let doc = "Tiny. Also tiny.";
        let s = sample(doc, &d);
        let merged = enforce_min_size(doc, &s, vec![(0, 1), (1, 2)], 1000);
        assert_eq!(merged, vec![(0, 2)]);
    }

    #[test]
    fn zero_minimum_is_a_no_op() {
        let d = vec![".".to_string()];
        let doc = "A. B.";
        let s = sample(doc, &d);
        let ranges = vec![(0, 1), (1, 2)];
        assert_eq!(enforce_min_size(doc, &s, ranges.clone(), 0), ranges);
    }
}
