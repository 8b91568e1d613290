//! Groups sentences into overlapping sliding windows for embedding.
//!
//! Window *i* and *i+1* share all but one sentence, which smooths embeddings
//! against single-sentence noise.

use crate::segmenter::Sentence;

/// An ordered run of consecutive sentences, identified by the index of its
/// last sentence. `text` is the member sentences joined with a single space.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Window {
    pub last_sentence: usize,
    pub text: String,
}

/// Builds sliding windows of `window_size` consecutive sentences.
///
/// Window *i* covers sentences `[i, i + window_size)`. When fewer sentences
/// than `window_size` exist, a single window spanning all of them is produced.
/// No sentences, no windows.
pub fn build_windows(sentences: &[Sentence<'_>], window_size: usize) -> Vec<Window> {
    if sentences.is_empty() {
        return Vec::new();
    }
    let size = window_size.max(1);

    if sentences.len() < size {
        return vec![window_over(sentences, sentences.len() - 1)];
    }

    (0..=sentences.len() - size)
        .map(|i| window_over(&sentences[i..i + size], i + size - 1))
        .collect()
}

fn window_over(members: &[Sentence<'_>], last_sentence: usize) -> Window {
    let text = members
        .iter()
        .map(|sentence| sentence.text)
        .collect::<Vec<_>>()
        .join(" ");
    Window {
        last_sentence,
        text,
    }
}
