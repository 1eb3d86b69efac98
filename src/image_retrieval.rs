//! Image retrieval engine module
//!
//! This module provides a structured approach to content-based image
//! retrieval, with separate modules for pixel grids, descriptor extraction,
//! similarity ranking, descriptor persistence, and query orchestration.

pub mod common;
pub mod features;
pub mod grid;
pub mod report;
pub mod retrieval;
pub mod similarity;
pub mod store;

pub use common::{
    Result,
    RetrievalError,
};

pub use grid::{
    DynamicImageDecoder,
    GridDecoder,
    PixelGrid,
};

pub use features::{
    FeatureVector,
    HISTOGRAM_BINS,
    NormalizedHistogram,
    RawHistogram,
    extract_features,
};

pub use similarity::{
    DEFAULT_TOP_K,
    DescriptorDistance,
    RankedResult,
    ScoredCandidate,
    descriptor_distance,
    rank,
};

pub use store::{
    FeatureStore,
    JsonFeatureStore,
};

pub use retrieval::{
    RetrievalConfig,
    RetrievalConfigBuilder,
    RetrievalPipeline,
};

pub use report::{
    MetricSummary,
    QueryReport,
    build_report,
    class_label,
};
