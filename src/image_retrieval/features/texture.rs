//! Local binary pattern texture histogram construction.

use crate::image_retrieval::features::histogram::{HISTOGRAM_BINS, RawHistogram};
use crate::image_retrieval::grid::PixelGrid;

/// Bit carried by each neighbor of the 3x3 window, in row-major visit order
/// with the center skipped:
///
/// ```text
/// 7  6  5
/// 4  .  3
/// 2  1  0
/// ```
const NEIGHBOR_BITS: [(isize, isize, u8); 8] = [
    (-1, -1, 1 << 7),
    (-1, 0, 1 << 6),
    (-1, 1, 1 << 5),
    (0, -1, 1 << 4),
    (0, 1, 1 << 3),
    (1, -1, 1 << 2),
    (1, 0, 1 << 1),
    (1, 1, 1 << 0),
];

/// Accumulates the histogram of LBP codes over every interior pixel.
///
/// Border pixels have no full 3x3 neighborhood and never contribute, so the
/// counters sum to `(height - 2) * (width - 2)`.
pub fn build_texture_histogram(grid: &PixelGrid) -> RawHistogram {
    let mut histogram = [0u64; HISTOGRAM_BINS];
    for row in 1..grid.height() - 1 {
        for col in 1..grid.width() - 1 {
            let code = local_binary_pattern(grid, row, col);
            histogram[code as usize] += 1;
        }
    }
    histogram
}

/// Computes the 8-bit LBP code for one interior pixel.
///
/// The scalar compared is the summed channel intensity of each pixel. A bit
/// is set only when the neighbor sum is strictly greater than the center
/// sum; a tie leaves the bit clear.
fn local_binary_pattern(grid: &PixelGrid, row: usize, col: usize) -> u8 {
    let center = grid.intensity_sum(row, col);
    let mut code = 0u8;
    for (row_offset, col_offset, bit) in NEIGHBOR_BITS {
        let neighbor_row = (row as isize + row_offset) as usize;
        let neighbor_col = (col as isize + col_offset) as usize;
        if grid.intensity_sum(neighbor_row, neighbor_col) > center {
            code |= bit;
        }
    }
    code
}
