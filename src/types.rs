use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A fully assembled chunk ready for downstream retrieval.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SemanticChunk {
    pub id: Uuid,
    pub text: String,
    /// Character count of `text`.
    pub char_len: usize,
    /// Index of the first sentence covered by this chunk.
    pub first_sentence: usize,
    /// Index of the last sentence covered by this chunk (inclusive).
    pub last_sentence: usize,
}

impl SemanticChunk {
    pub fn new(text: String, first_sentence: usize, last_sentence: usize) -> Self {
        let char_len = text.chars().count();
        Self {
            id: Uuid::new_v4(),
            text,
            char_len,
            first_sentence,
            last_sentence,
        }
    }
}

/// Aggregate result returned by the splitter, including optional trace data.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ChunkingOutcome {
    pub chunks: Vec<SemanticChunk>,
    pub trace: Option<ChunkingTrace>,
    pub stats: ChunkingStats,
}

impl ChunkingOutcome {
    pub fn empty() -> Self {
        Self {
            chunks: Vec::new(),
            trace: None,
            stats: ChunkingStats::default(),
        }
    }

    /// Consumes the outcome and yields the chunk texts in document order.
    pub fn into_texts(self) -> Vec<String> {
        self.chunks.into_iter().map(|chunk| chunk.text).collect()
    }
}

/// Basic runtime stats for diagnostics.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ChunkingStats {
    pub total_sentences: usize,
    pub total_windows: usize,
    pub total_chunks: usize,
    pub average_chars: f32,
}

/// Trace data is useful for debugging breakpoint placement.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ChunkingTrace {
    pub events: Vec<TraceEvent>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TraceEvent {
    pub label: String,
    pub score: Option<f32>,
    pub index: Option<usize>,
}

impl TraceEvent {
    pub fn new(label: impl Into<String>, score: Option<f32>, index: Option<usize>) -> Self {
        Self {
            label: label.into(),
            score,
            index,
        }
    }
}

/// Errors the splitter can surface to callers.
#[derive(thiserror::Error, Debug)]
pub enum ChunkingError {
    #[error("invalid configuration: {reason}")]
    InvalidConfig { reason: String },
    #[error("embedding failed: {reason}")]
    EmbeddingFailed { reason: String },
}
