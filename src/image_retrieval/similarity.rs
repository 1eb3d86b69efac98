//! Similarity ranking module
//!
//! Pairwise descriptor distances and top-k ranking over a candidate set.

mod distance;
mod rank;


pub use distance::{DescriptorDistance, descriptor_distance};
pub use rank::{DEFAULT_TOP_K, RankedResult, ScoredCandidate, rank};
