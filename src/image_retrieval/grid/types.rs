//! Pixel grid data types

use crate::image_retrieval::common::error::{Result, RetrievalError};

/// Minimum grid width and height. The texture descriptor reads a full 3x3
/// neighborhood, so a grid needs at least one interior pixel.
pub const MIN_GRID_DIM: usize = 3;

/// A decoded image as a row-major grid of RGB pixels.
///
/// Dimensions and pixel count are validated at construction, so every
/// downstream computation can index the grid without re-checking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelGrid {
    width: usize,
    height: usize,
    /// Row-major pixel data, one `[r, g, b]` triple per pixel.
    data: Vec<[u8; 3]>,
}

impl PixelGrid {
    /// Builds a grid from a flat row-major pixel buffer.
    ///
    /// # Errors
    ///
    /// * `InvalidDimensions` if either dimension is below [`MIN_GRID_DIM`]
    /// * `PixelCountMismatch` if the buffer length is not `width * height`
    pub fn new(width: usize, height: usize, data: Vec<[u8; 3]>) -> Result<Self> {
        if width < MIN_GRID_DIM || height < MIN_GRID_DIM {
            return Err(RetrievalError::InvalidDimensions(width, height));
        }
        let expected = width * height;
        if data.len() != expected {
            return Err(RetrievalError::PixelCountMismatch {
                expected,
                found: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Builds a grid from one pixel vector per row, rejecting ragged input.
    pub fn from_rows(rows: &[Vec<[u8; 3]>]) -> Result<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        for (row, pixels) in rows.iter().enumerate() {
            if pixels.len() != width {
                return Err(RetrievalError::RaggedRow {
                    row,
                    expected: width,
                    found: pixels.len(),
                });
            }
        }
        let data = rows.iter().flatten().copied().collect();
        Self::new(width, height, data)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns the pixel at (row, col).
    ///
    /// Panics if the position is outside the grid.
    pub fn pixel(&self, row: usize, col: usize) -> [u8; 3] {
        assert!(row < self.height && col < self.width);
        self.data[row * self.width + col]
    }

    /// All pixels in row-major order.
    pub fn pixels(&self) -> &[[u8; 3]] {
        &self.data
    }

    /// Summed channel intensity, the scalar the texture descriptor compares.
    pub(crate) fn intensity_sum(&self, row: usize, col: usize) -> u16 {
        let [r, g, b] = self.pixel(row, col);
        r as u16 + g as u16 + b as u16
    }
}
