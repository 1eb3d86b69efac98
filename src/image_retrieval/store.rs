//! Descriptor persistence module
//!
//! This module provides feature store implementations used to cache
//! extracted descriptors between runs.

mod feature_store;
mod json_store;


pub use feature_store::FeatureStore;
pub use json_store::JsonFeatureStore;
