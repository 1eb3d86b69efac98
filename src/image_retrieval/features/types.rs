//! Descriptor bundle types

use serde::{Deserialize, Serialize};

use crate::image_retrieval::features::histogram::NormalizedHistogram;

/// The full descriptor set extracted from one image.
///
/// Built once per image and immutable afterwards. Round-trips through a
/// feature store without loss.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureVector {
    /// Identifier the image was extracted under, typically its file name.
    pub identifier: String,
    /// Normalized red channel histogram.
    pub red: NormalizedHistogram,
    /// Normalized green channel histogram.
    pub green: NormalizedHistogram,
    /// Normalized blue channel histogram.
    pub blue: NormalizedHistogram,
    /// Normalized LBP texture histogram.
    pub texture: NormalizedHistogram,
}
