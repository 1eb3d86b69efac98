//! Histogram primitives shared by the color and texture descriptors.

use serde::{Deserialize, Serialize};

/// Number of bins in every descriptor histogram, one per possible 8-bit
/// value.
pub const HISTOGRAM_BINS: usize = 256;

/// Bin counters accumulated while a descriptor is being built.
pub type RawHistogram = [u64; HISTOGRAM_BINS];

/// A histogram min-max rescaled to the [0, 1] range.
///
/// Immutable once built. Always holds [`HISTOGRAM_BINS`] finite bins: a flat
/// input (every counter equal, so min == max) maps to all zeros instead of
/// dividing by zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedHistogram {
    bins: Vec<f64>,
}

impl NormalizedHistogram {
    /// Min-max normalizes a raw histogram.
    ///
    /// For a non-flat input the smallest counter maps to exactly 0.0 and the
    /// largest to exactly 1.0.
    pub fn from_raw(raw: &RawHistogram) -> Self {
        let mut bins: Vec<f64> = raw.iter().map(|&count| count as f64).collect();
        min_max_scale(&mut bins);
        Self { bins }
    }

    pub fn bins(&self) -> &[f64] {
        &self.bins
    }

    /// L1 distance: sum of absolute per-bin differences.
    pub fn l1_distance(&self, other: &NormalizedHistogram) -> f64 {
        self.bins
            .iter()
            .zip(&other.bins)
            .map(|(a, b)| (a - b).abs())
            .sum()
    }
}

/// Rescales `bins` linearly so the observed minimum maps to 0.0 and the
/// observed maximum to 1.0. A flat slice (min == max) is set to all zeros.
pub(crate) fn min_max_scale(bins: &mut [f64]) {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for &bin in bins.iter() {
        min = min.min(bin);
        max = max.max(bin);
    }

    let range = max - min;
    if range == 0.0 {
        bins.fill(0.0);
        return;
    }

    for bin in bins.iter_mut() {
        *bin = (*bin - min) / range;
    }
}
