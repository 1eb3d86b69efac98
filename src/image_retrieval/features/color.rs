//! Per-channel color histogram construction.

use crate::image_retrieval::features::histogram::{
    HISTOGRAM_BINS, NormalizedHistogram, RawHistogram,
};
use crate::image_retrieval::grid::PixelGrid;

/// Number of color channels in a pixel.
pub const COLOR_CHANNELS: usize = 3;

/// Counts channel intensities over every pixel of the grid.
///
/// All pixels contribute, border included; only the texture descriptor
/// excludes the border. Each histogram's counters sum to the pixel count.
pub fn build_color_histograms(grid: &PixelGrid) -> [RawHistogram; COLOR_CHANNELS] {
    let mut histograms = [[0u64; HISTOGRAM_BINS]; COLOR_CHANNELS];
    for pixel in grid.pixels() {
        for (channel, &value) in pixel.iter().enumerate() {
            histograms[channel][value as usize] += 1;
        }
    }
    histograms
}

/// Normalizes the three channel histograms independently.
///
/// Min and max are found per channel, never across channels.
pub fn normalize_color_histograms(
    histograms: [RawHistogram; COLOR_CHANNELS],
) -> [NormalizedHistogram; COLOR_CHANNELS] {
    histograms.map(|histogram| NormalizedHistogram::from_raw(&histogram))
}
