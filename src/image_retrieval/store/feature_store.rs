use std::io::{Read, Write};

use crate::image_retrieval::common::error::Result;
use crate::image_retrieval::features::FeatureVector;

pub trait FeatureStore {
    fn save_features(&self, features: &[FeatureVector], output: &mut dyn Write) -> Result<()>;
    fn load_features(&self, input: &mut dyn Read) -> Result<Vec<FeatureVector>>;
}
