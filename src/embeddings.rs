use async_trait::async_trait;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use crate::types::ChunkingError;

/// Abstract embedding provider used by the splitter.
///
/// One call embeds one ordered batch; implementations must return exactly one
/// vector per input, in input order, and fail as a unit. The splitter never
/// retries locally.
#[async_trait]
pub trait EmbeddingProvider: Send + Sync {
    async fn embed_batch(&self, inputs: &[String]) -> Result<Vec<Vec<f32>>, ChunkingError>;

    fn identify(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}

/// Shared reference type alias for embedding providers.
pub type SharedEmbeddingProvider = Arc<dyn EmbeddingProvider>;

/// Hash-seeded stand-in embeddings for tests and offline runs.
///
/// Every input text maps to the same [`MockEmbeddingProvider::DIMENSIONS`]-lane
/// vector on every call; distinct texts land on unrelated vectors. No model is
/// involved, so distances carry no semantic meaning beyond equal/unequal text.
#[derive(Clone, Default)]
pub struct MockEmbeddingProvider;

impl MockEmbeddingProvider {
    pub const DIMENSIONS: usize = 8;

    pub fn new() -> Self {
        Self
    }

    fn embed_one(input: &str) -> Vec<f32> {
        (0..Self::DIMENSIONS as u64)
            .map(|lane| Self::lane_component(input, lane))
            .collect()
    }

    /// Hashes the text together with the lane index and maps the result into
    /// `[-1, 1]`.
    fn lane_component(input: &str, lane: u64) -> f32 {
        let mut hasher = DefaultHasher::new();
        input.hash(&mut hasher);
        lane.hash(&mut hasher);
        let bits = hasher.finish() >> 40;
        (bits as f32 / (1u64 << 24) as f32) * 2.0 - 1.0
    }
}

#[async_trait]
impl EmbeddingProvider for MockEmbeddingProvider {
    async fn embed_batch(&self, inputs: &[String]) -> Result<Vec<Vec<f32>>, ChunkingError> {
        Ok(inputs.iter().map(|text| Self::embed_one(text)).collect())
    }

    fn identify(&self) -> &'static str {
        "mock"
    }
}

/// Runs split requests against a RIG embedding model.
///
/// Wraps any [`rig::embeddings::embedding::EmbeddingModelDyn`] behind the
/// local [`EmbeddingProvider`] trait; model failures surface as
/// [`ChunkingError::EmbeddingFailed`] tagged with the provider label.
#[cfg(feature = "rig")]
pub struct RigEmbeddingProvider {
    model: Arc<dyn rig::embeddings::embedding::EmbeddingModelDyn>,
    label: String,
}

#[cfg(feature = "rig")]
impl RigEmbeddingProvider {
    pub fn new(model: Arc<dyn rig::embeddings::embedding::EmbeddingModelDyn>) -> Self {
        Self {
            model,
            label: "rig-embedding".to_string(),
        }
    }

    /// Wraps an owned model, labeling the provider after its concrete type.
    pub fn from_model<M>(model: M) -> Self
    where
        M: rig::embeddings::embedding::EmbeddingModel + 'static,
    {
        Self::new(Arc::new(model)).with_label(std::any::type_name::<M>())
    }

    /// Overrides the label reported in telemetry and error messages.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    pub fn model_label(&self) -> &str {
        &self.label
    }
}

#[cfg(feature = "rig")]
#[async_trait]
impl EmbeddingProvider for RigEmbeddingProvider {
    async fn embed_batch(&self, inputs: &[String]) -> Result<Vec<Vec<f32>>, ChunkingError> {
        if inputs.is_empty() {
            return Ok(Vec::new());
        }

        let batch = self.model.embed_texts(inputs.to_vec()).await;
        let embeddings = batch.map_err(|err| ChunkingError::EmbeddingFailed {
            reason: format!("{}: {err}", self.label),
        })?;

        // RIG vectors are f64; the pipeline works in f32 throughout.
        let mut vectors = Vec::with_capacity(embeddings.len());
        for embedding in embeddings {
            vectors.push(embedding.vec.iter().map(|&value| value as f32).collect());
        }
        Ok(vectors)
    }

    fn identify(&self) -> &'static str {
        "rig"
    }
}
