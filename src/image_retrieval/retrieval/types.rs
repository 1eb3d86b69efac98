//! Retrieval configuration types

use std::path::PathBuf;

use crate::image_retrieval::similarity::DEFAULT_TOP_K;

/// Configuration for the retrieval pipeline
#[derive(Debug, Clone)]
pub struct RetrievalConfig {
    /// Number of matches reported per metric
    pub top_k: usize,
    /// Where reference descriptors are cached between runs; `None` disables
    /// caching
    pub cache_path: Option<PathBuf>,
    /// File extensions (lowercase, without the dot) picked up when indexing
    /// a directory
    pub extensions: Vec<String>,
}

impl Default for RetrievalConfig {
    fn default() -> Self {
        Self {
            top_k: DEFAULT_TOP_K,
            cache_path: None,
            extensions: vec!["jpg".to_string(), "jpeg".to_string(), "png".to_string()],
        }
    }
}

impl RetrievalConfig {
    pub fn builder() -> RetrievalConfigBuilder {
        RetrievalConfigBuilder::default()
    }
}

/// Builder for RetrievalConfig
#[derive(Default)]
pub struct RetrievalConfigBuilder {
    top_k: Option<usize>,
    cache_path: Option<Option<PathBuf>>,
    extensions: Option<Vec<String>>,
}

impl RetrievalConfigBuilder {
    pub fn top_k(mut self, top_k: usize) -> Self {
        self.top_k = Some(top_k);
        self
    }

    pub fn cache_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.cache_path = Some(Some(path.into()));
        self
    }

    pub fn no_cache(mut self) -> Self {
        self.cache_path = Some(None);
        self
    }

    pub fn extensions(mut self, extensions: Vec<String>) -> Self {
        self.extensions = Some(extensions);
        self
    }

    pub fn build(self) -> RetrievalConfig {
        let default = RetrievalConfig::default();
        RetrievalConfig {
            top_k: self.top_k.unwrap_or(default.top_k),
            cache_path: self.cache_path.unwrap_or(default.cache_path),
            extensions: self.extensions.unwrap_or(default.extensions),
        }
    }
}
