//! Embedding-driven semantic text splitter.
//!
//! Detects topic boundaries by measuring semantic drift between consecutive
//! sliding windows of sentences, then cuts the document there instead of at
//! arbitrary fixed lengths.
//!
//! ```text
//! raw delimiter config ──► delimiters::resolve ──► literal terminator set
//!                                                        │
//! document ──► segmenter::sentences ──► windows::build_windows
//!                                                        │
//!                        EmbeddingProvider::embed_batch ◄┘ (one batch)
//!                                    │
//!          breakpoints::adjacent_distances + detect_breakpoints
//!                                    │
//!        assembly::plan_ranges + enforce_min_size ──► ordered chunks
//! ```
//!
//! [`SemanticSplitter`] drives the pipeline; everything upstream of the
//! embedding provider is synchronous, in-memory computation, and the provider
//! is reached through the [`EmbeddingProvider`] trait so any batch-capable
//! backend plugs in.

pub mod assembly;
pub mod breakpoints;
pub mod config;
pub mod delimiters;
pub mod embeddings;
pub mod segmenter;
pub mod splitter;
pub mod types;
pub mod windows;

pub use config::SplitterConfig;
pub use embeddings::{EmbeddingProvider, MockEmbeddingProvider, SharedEmbeddingProvider};
#[cfg(feature = "rig")]
pub use embeddings::RigEmbeddingProvider;
pub use segmenter::{sentences, Sentence, Sentences};
pub use splitter::{SemanticSplitter, SemanticSplitterBuilder};
pub use types::{
    ChunkingError, ChunkingOutcome, ChunkingStats, ChunkingTrace, SemanticChunk, TraceEvent,
};
pub use windows::{build_windows, Window};
