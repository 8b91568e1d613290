//! Turns adjacent-window embedding distances into breakpoint decisions.

/// Cosine distance between two embedding vectors: `1 - cosine similarity`.
///
/// A zero-magnitude operand has similarity 0 by definition, so the distance
/// is maximal.
pub fn cosine_distance(a: &[f32], b: &[f32]) -> f32 {
    let mut dot = 0.0;
    let mut norm_a = 0.0;
    let mut norm_b = 0.0;
    for (lhs, rhs) in a.iter().zip(b.iter()) {
        dot += lhs * rhs;
        norm_a += lhs * lhs;
        norm_b += rhs * rhs;
    }
    if norm_a == 0.0 || norm_b == 0.0 {
        return 1.0;
    }
    1.0 - dot / (norm_a.sqrt() * norm_b.sqrt())
}

/// Semantic distance between each pair of consecutive embeddings.
pub fn adjacent_distances(embeddings: &[Vec<f32>]) -> Vec<f32> {
    embeddings
        .windows(2)
        .map(|pair| cosine_distance(&pair[0], &pair[1]))
        .collect()
}

/// The `p`-percentile of `values` using linear interpolation between order
/// statistics, or `None` for an empty sample. At small sample sizes
/// nearest-rank and interpolated percentiles place breakpoints differently;
/// this crate commits to interpolation.
pub fn percentile(values: &[f32], p: f32) -> Option<f32> {
    if values.is_empty() {
        return None;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    let rank = p.clamp(0.0, 1.0) * (sorted.len() - 1) as f32;
    let lower = rank.floor() as usize;
    let upper = rank.ceil() as usize;
    Some(if lower == upper {
        sorted[lower]
    } else {
        sorted[lower] + (rank - lower as f32) * (sorted[upper] - sorted[lower])
    })
}

/// Indices of adjacent-window pairs whose distance strictly exceeds the
/// `threshold`-percentile of the distance distribution.
///
/// Fewer than two distances never produce a breakpoint: with a single
/// distance the percentile equals that distance and no topic shift is
/// decidable, and with none there is nothing to compare.
pub fn detect_breakpoints(distances: &[f32], threshold: f32) -> Vec<usize> {
    if distances.len() < 2 {
        return Vec::new();
    }
    let Some(cutoff) = percentile(distances, threshold) else {
        return Vec::new();
    };
    distances
        .iter()
        .enumerate()
        .filter(|(_, distance)| **distance > cutoff)
        .map(|(idx, _)| idx)
        .collect()
}
