use crate::image_retrieval::common::error::Result;
use crate::image_retrieval::grid::types::PixelGrid;

pub trait GridDecoder {
    fn decode_grid(&self, data: &[u8]) -> Result<PixelGrid>;
}
