//! Image decoder implementation backed by the image library.
//!
//! Decodes any format the library can sniff from the byte stream (JPEG, PNG,
//! BMP, ...) and converts the result to an 8-bit RGB pixel grid.

use tracing::debug;

use crate::image_retrieval::common::error::{Result, RetrievalError};
use crate::image_retrieval::grid::decoder::GridDecoder;
use crate::image_retrieval::grid::types::PixelGrid;

/// Decoder that goes through `image::DynamicImage`.
///
/// Non-RGB sources (grayscale, paletted, RGBA) are converted to RGB8 before
/// the grid is built, so the channel layout downstream is always the same.
pub struct DynamicImageDecoder;

impl GridDecoder for DynamicImageDecoder {
    /// Decodes encoded image bytes into a [`PixelGrid`].
    ///
    /// # Errors
    ///
    /// * `DecodeError` when the bytes are not a decodable image
    /// * `InvalidDimensions` when the decoded image is smaller than 3x3
    fn decode_grid(&self, data: &[u8]) -> Result<PixelGrid> {
        debug!("Decoding image, {} bytes", data.len());

        let decoded = image::load_from_memory(data)
            .map_err(|e| RetrievalError::DecodeError(e.to_string()))?;
        let rgb = decoded.to_rgb8();
        let (width, height) = rgb.dimensions();

        debug!("Decoded image: {}x{}", width, height);

        let pixels = rgb.pixels().map(|p| p.0).collect();
        PixelGrid::new(width as usize, height as usize, pixels)
    }
}
