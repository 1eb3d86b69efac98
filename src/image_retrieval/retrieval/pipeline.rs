use std::fs::File;
use std::path::{Path, PathBuf};

use tracing::{info, instrument, warn};

use crate::image_retrieval::common::error::{Result, RetrievalError};
use crate::image_retrieval::features::{FeatureVector, extract_features};
use crate::image_retrieval::grid::{DynamicImageDecoder, GridDecoder};
use crate::image_retrieval::retrieval::types::RetrievalConfig;
use crate::image_retrieval::similarity::{RankedResult, rank};
use crate::image_retrieval::store::{FeatureStore, JsonFeatureStore};

pub struct RetrievalPipeline<D: GridDecoder, S: FeatureStore> {
    decoder: D,
    store: S,
    config: RetrievalConfig,
}

impl RetrievalPipeline<DynamicImageDecoder, JsonFeatureStore> {
    pub fn new(config: RetrievalConfig) -> Self {
        Self {
            decoder: DynamicImageDecoder,
            store: JsonFeatureStore,
            config,
        }
    }
}

impl<D: GridDecoder, S: FeatureStore> RetrievalPipeline<D, S> {
    pub fn with_custom(decoder: D, store: S, config: RetrievalConfig) -> Self {
        Self {
            decoder,
            store,
            config,
        }
    }

    /// Decodes one image file and extracts its descriptors.
    ///
    /// The file name becomes the feature vector's identifier.
    #[instrument(skip(self, path))]
    pub fn extract_file<P: AsRef<Path>>(&self, path: P) -> Result<FeatureVector> {
        let path = path.as_ref();
        let identifier = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        let data = {
            let _span = tracing::info_span!("read_image_file").entered();
            std::fs::read(path).map_err(|e| {
                RetrievalError::InputReadError(format!("{}: {}", path.display(), e))
            })?
        };

        let grid = {
            let _span = tracing::info_span!("decode_grid").entered();
            self.decoder.decode_grid(&data)?
        };

        let features = {
            let _span = tracing::info_span!("extract_features", image = %identifier).entered();
            extract_features(&grid, identifier)
        };

        Ok(features)
    }

    /// Extracts descriptors for every image file in a directory.
    ///
    /// Files are visited in sorted path order so indexing is deterministic.
    #[instrument(skip(self, dir))]
    pub fn index_directory<P: AsRef<Path>>(&self, dir: P) -> Result<Vec<FeatureVector>> {
        let dir = dir.as_ref();
        info!(directory = %dir.display(), "Indexing reference images");

        let mut paths: Vec<PathBuf> = std::fs::read_dir(dir)?
            .collect::<std::io::Result<Vec<_>>>()?
            .into_iter()
            .map(|entry| entry.path())
            .filter(|path| self.matches_extension(path))
            .collect();
        paths.sort();

        let mut features = Vec::with_capacity(paths.len());
        for path in &paths {
            features.push(self.extract_file(path)?);
        }

        info!(count = features.len(), "Indexing complete");
        Ok(features)
    }

    /// Loads cached reference descriptors when possible, otherwise indexes
    /// the directory and refreshes the cache.
    ///
    /// A missing, unreadable, or empty cache is not fatal; it falls back to
    /// indexing.
    pub fn load_or_index<P: AsRef<Path>>(&self, dir: P) -> Result<Vec<FeatureVector>> {
        if let Some(cache_path) = &self.config.cache_path {
            match self.load_cache(cache_path) {
                Ok(features) if !features.is_empty() => {
                    info!(
                        count = features.len(),
                        cache = %cache_path.display(),
                        "Loaded descriptors from cache"
                    );
                    return Ok(features);
                }
                Ok(_) => {
                    warn!(cache = %cache_path.display(), "Cache is empty, reindexing");
                }
                Err(e) => {
                    warn!(cache = %cache_path.display(), error = %e, "Cache unavailable, reindexing");
                }
            }
        }

        let features = self.index_directory(dir)?;

        if let Some(cache_path) = &self.config.cache_path {
            self.save_cache(cache_path, &features)?;
        }

        Ok(features)
    }

    /// Ranks the reference set against one query with the configured top-k.
    pub fn query(
        &self,
        query: &FeatureVector,
        references: &[FeatureVector],
    ) -> Result<RankedResult> {
        rank(query, references, self.config.top_k)
    }

    pub fn config(&self) -> &RetrievalConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: RetrievalConfig) {
        self.config = config;
    }

    fn matches_extension(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|extension| extension.to_str())
            .is_some_and(|extension| {
                let extension = extension.to_ascii_lowercase();
                self.config.extensions.iter().any(|known| *known == extension)
            })
    }

    fn load_cache(&self, path: &Path) -> Result<Vec<FeatureVector>> {
        let mut file = File::open(path)
            .map_err(|e| RetrievalError::StoreReadError(format!("{}: {}", path.display(), e)))?;
        self.store.load_features(&mut file)
    }

    fn save_cache(&self, path: &Path, features: &[FeatureVector]) -> Result<()> {
        let mut file = File::create(path)
            .map_err(|e| RetrievalError::StoreWriteError(format!("{}: {}", path.display(), e)))?;
        self.store.save_features(features, &mut file)?;
        info!(
            count = features.len(),
            cache = %path.display(),
            "Saved descriptors to cache"
        );
        Ok(())
    }
}
