//! Descriptor extraction module
//!
//! Builds the two image descriptors: a per-channel color histogram and a
//! local binary pattern texture histogram, both min-max normalized.

mod color;
mod extractor;
mod texture;
pub mod histogram;
pub mod types;


pub use color::{COLOR_CHANNELS, build_color_histograms, normalize_color_histograms};
pub use extractor::extract_features;
pub use histogram::{HISTOGRAM_BINS, NormalizedHistogram, RawHistogram};
pub use texture::build_texture_histogram;
pub use types::FeatureVector;
