//! JSON-backed feature store implementation.

use std::io::{Read, Write};

use tracing::debug;

use crate::image_retrieval::common::error::{Result, RetrievalError};
use crate::image_retrieval::features::FeatureVector;
use crate::image_retrieval::store::feature_store::FeatureStore;

/// Feature store that serializes descriptors as JSON.
///
/// serde_json emits f64 bins with enough precision to reparse to the
/// identical value, so stored descriptors round-trip exactly.
pub struct JsonFeatureStore;

impl FeatureStore for JsonFeatureStore {
    fn save_features(&self, features: &[FeatureVector], output: &mut dyn Write) -> Result<()> {
        debug!("Saving {} feature vectors", features.len());
        serde_json::to_writer(output, features)
            .map_err(|e| RetrievalError::StoreWriteError(e.to_string()))
    }

    fn load_features(&self, input: &mut dyn Read) -> Result<Vec<FeatureVector>> {
        let features: Vec<FeatureVector> = serde_json::from_reader(input)
            .map_err(|e| RetrievalError::StoreReadError(e.to_string()))?;
        debug!("Loaded {} feature vectors", features.len());
        Ok(features)
    }
}
