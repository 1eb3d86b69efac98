//! Descriptor extraction entry point.

use crate::image_retrieval::features::color::{build_color_histograms, normalize_color_histograms};
use crate::image_retrieval::features::histogram::NormalizedHistogram;
use crate::image_retrieval::features::texture::build_texture_histogram;
use crate::image_retrieval::features::types::FeatureVector;
use crate::image_retrieval::grid::PixelGrid;

/// Extracts the color and texture descriptors for one grid.
///
/// Deterministic: the same grid always yields the same feature vector. Grid
/// validity (minimum 3x3, rectangular) is a [`PixelGrid`] construction
/// invariant, so extraction itself cannot fail.
pub fn extract_features(grid: &PixelGrid, identifier: impl Into<String>) -> FeatureVector {
    let [red, green, blue] = normalize_color_histograms(build_color_histograms(grid));
    let texture = NormalizedHistogram::from_raw(&build_texture_histogram(grid));

    FeatureVector {
        identifier: identifier.into(),
        red,
        green,
        blue,
        texture,
    }
}
