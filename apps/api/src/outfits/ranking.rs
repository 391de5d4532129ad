//! Similarity ranking: scores a user's inventory against the prompt vector.
//!
//! Pure functions, no I/O. Ties keep inventory order because `sort_by` is stable.

use serde::Serialize;

use crate::models::clothing::ClothingItemRow;

/// A clothing item paired with its cosine similarity to the prompt vector.
#[derive(Debug, Clone, Serialize)]
pub struct RankedItem {
    pub item: ClothingItemRow,
    pub score: f64,
}

/// Cosine similarity `dot(a, b) / (|a| * |b|)`, clamped to [-1, 1].
///
/// Missing components of the shorter vector count as zero. Returns 0.0 when either
/// vector has zero magnitude or holds a non-finite component.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f64 {
    let dot: f64 = a
        .iter()
        .zip(b)
        .map(|(&x, &y)| f64::from(x) * f64::from(y))
        .sum();

    let magnitude_a = magnitude(a);
    let magnitude_b = magnitude(b);
    if magnitude_a == 0.0 || magnitude_b == 0.0 {
        return 0.0;
    }

    let similarity = dot / (magnitude_a * magnitude_b);
    if !similarity.is_finite() {
        return 0.0;
    }
    similarity.clamp(-1.0, 1.0)
}

fn magnitude(v: &[f32]) -> f64 {
    v.iter().map(|&x| f64::from(x) * f64::from(x)).sum::<f64>().sqrt()
}

/// Scores every item against `query` and sorts descending by score.
pub fn rank_items(items: Vec<ClothingItemRow>, query: &[f32]) -> Vec<RankedItem> {
    let mut ranked: Vec<RankedItem> = items
        .into_iter()
        .map(|item| {
            let score = cosine_similarity(&item.tags_vector, query);
            RankedItem { item, score }
        })
        .collect();

    ranked.sort_by(|a, b| b.score.total_cmp(&a.score));
    ranked
}
