//! Descriptor distance computation.

use crate::image_retrieval::features::FeatureVector;

/// Scalar dissimilarity between two feature vectors, one component per
/// descriptor family. Smaller means more similar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DescriptorDistance {
    /// L1 distance summed across the three color channel histograms.
    pub color: f64,
    /// L1 distance between the texture histograms.
    pub texture: f64,
}

impl DescriptorDistance {
    /// Combined color + texture score.
    pub fn combined(&self) -> f64 {
        self.color + self.texture
    }
}

/// L1 distances between two feature vectors.
///
/// Symmetric, and zero for vectors holding identical histograms. Equal bin
/// counts are guaranteed by construction and not re-checked here.
pub fn descriptor_distance(a: &FeatureVector, b: &FeatureVector) -> DescriptorDistance {
    let color = a.red.l1_distance(&b.red)
        + a.green.l1_distance(&b.green)
        + a.blue.l1_distance(&b.blue);
    let texture = a.texture.l1_distance(&b.texture);

    DescriptorDistance { color, texture }
}
