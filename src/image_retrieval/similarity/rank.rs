//! Top-k ranking over a candidate set.

use std::cmp::Ordering;

use crate::image_retrieval::common::error::{Result, RetrievalError};
use crate::image_retrieval::features::FeatureVector;
use crate::image_retrieval::similarity::distance::descriptor_distance;

/// Number of matches reported per metric unless configured otherwise.
pub const DEFAULT_TOP_K: usize = 5;

/// One candidate with its dissimilarity score under a single metric.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredCandidate {
    pub identifier: String,
    pub score: f64,
}

/// Top-k candidate lists for one query, one list per metric.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedResult {
    pub color: Vec<ScoredCandidate>,
    pub texture: Vec<ScoredCandidate>,
    pub combined: Vec<ScoredCandidate>,
}

/// Ranks every candidate against the query under the color, texture, and
/// combined metrics.
///
/// Each list is sorted ascending by score with a stable sort, so candidates
/// with equal scores keep their input order, then truncated to `top_k`
/// entries. Fewer candidates than `top_k` yields all of them, still sorted.
///
/// # Errors
///
/// `EmptyCandidateSet` when `candidates` is empty.
pub fn rank(
    query: &FeatureVector,
    candidates: &[FeatureVector],
    top_k: usize,
) -> Result<RankedResult> {
    if candidates.is_empty() {
        return Err(RetrievalError::EmptyCandidateSet);
    }

    let mut color = Vec::with_capacity(candidates.len());
    let mut texture = Vec::with_capacity(candidates.len());
    let mut combined = Vec::with_capacity(candidates.len());

    for candidate in candidates {
        let distance = descriptor_distance(query, candidate);
        color.push(ScoredCandidate {
            identifier: candidate.identifier.clone(),
            score: distance.color,
        });
        texture.push(ScoredCandidate {
            identifier: candidate.identifier.clone(),
            score: distance.texture,
        });
        combined.push(ScoredCandidate {
            identifier: candidate.identifier.clone(),
            score: distance.combined(),
        });
    }

    Ok(RankedResult {
        color: take_best(color, top_k),
        texture: take_best(texture, top_k),
        combined: take_best(combined, top_k),
    })
}

/// Stable ascending sort by score, truncated to the first `top_k` entries.
fn take_best(mut scored: Vec<ScoredCandidate>, top_k: usize) -> Vec<ScoredCandidate> {
    scored.sort_by(|a, b| a.score.partial_cmp(&b.score).unwrap_or(Ordering::Equal));
    scored.truncate(top_k);
    scored
}
