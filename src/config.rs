use serde::{Deserialize, Serialize};

use crate::types::ChunkingError;

/// Tuning knobs for the splitter, bound once at construction.
///
/// Hosts typically deserialize this from their own configuration surface;
/// every field falls back to its default when absent. Validation happens in
/// [`SplitterConfig::validate`], which the splitter runs before accepting the
/// config, never per split call.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct SplitterConfig {
    /// Percentile of the adjacent-window distance distribution above which a
    /// breakpoint is declared, in `(0, 1]`.
    pub breakpoint_threshold: f32,
    /// Number of consecutive sentences per sliding window.
    pub window_size: usize,
    /// Minimum chunk size in characters; smaller chunks merge into a neighbor.
    pub min_chunk_size: usize,
    /// Raw delimiter configuration, resolved by [`crate::delimiters::resolve`].
    pub delimiters: String,
}

impl Default for SplitterConfig {
    fn default() -> Self {
        Self {
            breakpoint_threshold: 0.95,
            window_size: 3,
            min_chunk_size: 100,
            delimiters: ".,!,?".to_string(),
        }
    }
}

impl SplitterConfig {
    pub fn validate(&self) -> Result<(), ChunkingError> {
        if self.window_size < 1 {
            return Err(ChunkingError::InvalidConfig {
                reason: "window_size must be at least 1".to_string(),
            });
        }
        if !(self.breakpoint_threshold > 0.0 && self.breakpoint_threshold <= 1.0) {
            return Err(ChunkingError::InvalidConfig {
                reason: format!(
                    "breakpoint_threshold must be in (0, 1], got {}",
                    self.breakpoint_threshold
                ),
            });
        }
        Ok(())
    }
}
