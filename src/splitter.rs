//! The splitter service: wires the pipeline stages together behind a single
//! "split document" operation.

use std::time::Instant;

use tracing::{field, info_span, Instrument};

use crate::assembly::{chunk_text, enforce_min_size, plan_ranges};
use crate::breakpoints::{adjacent_distances, detect_breakpoints};
use crate::config::SplitterConfig;
use crate::delimiters;
use crate::embeddings::SharedEmbeddingProvider;
use crate::segmenter::{sentences, Sentence};
use crate::types::{
    ChunkingError, ChunkingOutcome, ChunkingStats, ChunkingTrace, SemanticChunk, TraceEvent,
};
use crate::windows::build_windows;

/// Splits documents into semantically coherent chunks by cutting at embedding
/// drift boundaries.
///
/// Configuration is validated once at construction and read-only afterwards;
/// the instance holds no per-request state and is safe for concurrent reuse.
/// The only await point per split is the batched provider call, so dropping
/// the future aborts the outstanding batch and releases nothing partial.
pub struct SemanticSplitter {
    config: SplitterConfig,
    delimiters: Vec<String>,
    embedder: SharedEmbeddingProvider,
}

impl std::fmt::Debug for SemanticSplitter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SemanticSplitter")
            .field("config", &self.config)
            .field("delimiters", &self.delimiters)
            .field("embedder", &self.embedder.identify())
            .finish()
    }
}

impl SemanticSplitter {
    /// Validates `config` and binds the embedding provider.
    pub fn new(
        config: SplitterConfig,
        embedder: SharedEmbeddingProvider,
    ) -> Result<Self, ChunkingError> {
        config.validate()?;
        let delimiters = delimiters::resolve(&config.delimiters);
        Ok(Self {
            config,
            delimiters,
            embedder,
        })
    }

    pub fn builder() -> SemanticSplitterBuilder {
        SemanticSplitterBuilder::new()
    }

    pub fn config(&self) -> &SplitterConfig {
        &self.config
    }

    /// Resolved delimiter set, in match-priority order.
    pub fn delimiters(&self) -> &[String] {
        &self.delimiters
    }

    /// Splits `document` and returns the chunk texts in document order.
    ///
    /// An empty document yields an empty list without touching the provider.
    pub async fn split(&self, document: &str) -> Result<Vec<String>, ChunkingError> {
        Ok(self.split_with_outcome(document).await?.into_texts())
    }

    /// Splits `document` and returns chunks plus trace events and stats.
    pub async fn split_with_outcome(
        &self,
        document: &str,
    ) -> Result<ChunkingOutcome, ChunkingError> {
        let span = info_span!(
            "semantic_split",
            embedder = %self.embedder.identify(),
            sentences = field::Empty,
            windows = field::Empty,
            breakpoints = field::Empty,
            chunks = field::Empty,
            duration_ms = field::Empty,
        );
        let record = span.clone();
        self.run_split(document, record).instrument(span).await
    }

    async fn run_split(
        &self,
        document: &str,
        span: tracing::Span,
    ) -> Result<ChunkingOutcome, ChunkingError> {
        let start = Instant::now();

        if document.is_empty() {
            return Ok(ChunkingOutcome::empty());
        }

        let sentence_list: Vec<Sentence<'_>> = sentences(document, &self.delimiters).collect();
        if sentence_list.is_empty() {
            return Ok(ChunkingOutcome::empty());
        }

        let windows = build_windows(&sentence_list, self.config.window_size);
        span.record("sentences", field::display(sentence_list.len()));
        span.record("windows", field::display(windows.len()));

        let mut trace_events = Vec::new();
        let boundaries: Vec<usize> = if windows.len() < 2 {
            // No adjacent pair to compare; the provider is not consulted.
            Vec::new()
        } else {
            let texts: Vec<String> = windows.iter().map(|w| w.text.clone()).collect();
            let embeddings = self.embedder.embed_batch(&texts).await?;
            if embeddings.len() != windows.len() {
                return Err(ChunkingError::EmbeddingFailed {
                    reason: format!(
                        "provider returned {} vectors for {} windows",
                        embeddings.len(),
                        windows.len()
                    ),
                });
            }

            let distances = adjacent_distances(&embeddings);
            for (idx, distance) in distances.iter().enumerate() {
                trace_events.push(TraceEvent::new("distance", Some(*distance), Some(idx)));
            }

            detect_breakpoints(&distances, self.config.breakpoint_threshold)
                .into_iter()
                .map(|pair_idx| windows[pair_idx].last_sentence + 1)
                .collect()
        };
        for boundary in &boundaries {
            trace_events.push(TraceEvent::new("breakpoint", None, Some(*boundary)));
        }
        span.record("breakpoints", field::display(boundaries.len()));

        let initial = plan_ranges(sentence_list.len(), &boundaries);
        let ranges = enforce_min_size(
            document,
            &sentence_list,
            initial.clone(),
            self.config.min_chunk_size,
        );
        for _ in ranges.len()..initial.len() {
            trace_events.push(TraceEvent::new("min_size_merge", None, None));
        }

        let chunks: Vec<SemanticChunk> = ranges
            .iter()
            .map(|range| {
                SemanticChunk::new(
                    chunk_text(document, &sentence_list, *range),
                    range.0,
                    range.1 - 1,
                )
            })
            .collect();

        let stats = compute_stats(&chunks, sentence_list.len(), windows.len());

        span.record("chunks", field::display(chunks.len()));
        span.record("duration_ms", field::display(start.elapsed().as_millis()));

        Ok(ChunkingOutcome {
            chunks,
            trace: Some(ChunkingTrace {
                events: trace_events,
            }),
            stats,
        })
    }
}

fn compute_stats(
    chunks: &[SemanticChunk],
    total_sentences: usize,
    total_windows: usize,
) -> ChunkingStats {
    let total_chunks = chunks.len();
    let char_sum: usize = chunks.iter().map(|chunk| chunk.char_len).sum();
    let average_chars = if total_chunks == 0 {
        0.0
    } else {
        char_sum as f32 / total_chunks as f32
    };
    ChunkingStats {
        total_sentences,
        total_windows,
        total_chunks,
        average_chars,
    }
}

pub struct SemanticSplitterBuilder {
    config: SplitterConfig,
    embedder: Option<SharedEmbeddingProvider>,
}

impl SemanticSplitterBuilder {
    fn new() -> Self {
        Self {
            config: SplitterConfig::default(),
            embedder: None,
        }
    }

    pub fn with_config(mut self, config: SplitterConfig) -> Self {
        self.config = config;
        self
    }

    pub fn update_config<F>(mut self, f: F) -> Self
    where
        F: FnOnce(&mut SplitterConfig),
    {
        f(&mut self.config);
        self
    }

    pub fn with_embedding_provider(mut self, provider: SharedEmbeddingProvider) -> Self {
        self.embedder = Some(provider);
        self
    }

    pub fn build(self) -> Result<SemanticSplitter, ChunkingError> {
        let embedder = self.embedder.ok_or_else(|| ChunkingError::InvalidConfig {
            reason: "embedding provider not configured".to_string(),
        })?;
        SemanticSplitter::new(self.config, embedder)
    }
}
