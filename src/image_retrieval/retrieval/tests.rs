#[cfg(test)]
mod tests {
    use std::io::{Read, Write};
    use std::sync::{Arc, Mutex};

    use crate::image_retrieval::common::error::{Result, RetrievalError};
    use crate::image_retrieval::features::{FeatureVector, extract_features};
    use crate::image_retrieval::grid::{GridDecoder, PixelGrid};
    use crate::image_retrieval::retrieval::pipeline::RetrievalPipeline;
    use crate::image_retrieval::retrieval::types::RetrievalConfig;
    use crate::image_retrieval::store::FeatureStore;

    /// Decodes any byte payload into a 4x4 grid shaded by the first byte.
    struct MockDecoder {
        should_fail: bool,
    }

    impl GridDecoder for MockDecoder {
        fn decode_grid(&self, data: &[u8]) -> Result<PixelGrid> {
            if self.should_fail {
                return Err(RetrievalError::DecodeError("Mock decode error".to_string()));
            }
            let shade = data.first().copied().unwrap_or(0);
            PixelGrid::new(4, 4, vec![[shade, shade, shade]; 16])
        }
    }

    fn mock_grid(shade: u8) -> PixelGrid {
        PixelGrid::new(4, 4, vec![[shade, shade, shade]; 16]).unwrap()
    }

    struct MockStore {
        should_fail: bool,
        preloaded: Option<Vec<FeatureVector>>,
        saved: Arc<Mutex<Vec<Vec<FeatureVector>>>>,
    }

    impl MockStore {
        fn empty() -> Self {
            Self {
                should_fail: false,
                preloaded: None,
                saved: Arc::new(Mutex::new(Vec::new())),
            }
        }

        fn preloaded(features: Vec<FeatureVector>) -> Self {
            Self {
                should_fail: false,
                preloaded: Some(features),
                saved: Arc::new(Mutex::new(Vec::new())),
            }
        }
    }

    impl FeatureStore for MockStore {
        fn save_features(&self, features: &[FeatureVector], _output: &mut dyn Write) -> Result<()> {
            if self.should_fail {
                return Err(RetrievalError::StoreWriteError(
                    "Mock store error".to_string(),
                ));
            }
            self.saved.lock().unwrap().push(features.to_vec());
            Ok(())
        }

        fn load_features(&self, _input: &mut dyn Read) -> Result<Vec<FeatureVector>> {
            if self.should_fail {
                return Err(RetrievalError::StoreReadError("Mock store error".to_string()));
            }
            Ok(self.preloaded.clone().unwrap_or_default())
        }
    }

    #[test]
    fn extract_file_uses_the_file_name_as_identifier() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sample.png");
        std::fs::write(&path, [42]).unwrap();

        let pipeline = RetrievalPipeline::with_custom(
            MockDecoder { should_fail: false },
            MockStore::empty(),
            RetrievalConfig::default(),
        );

        let features = pipeline.extract_file(&path).unwrap();
        assert_eq!(features.identifier, "sample.png");
        assert_eq!(features, extract_features(&mock_grid(42), "sample.png"));
    }

    #[test]
    fn extract_file_surfaces_decode_failures() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.png");
        std::fs::write(&path, [1]).unwrap();

        let pipeline = RetrievalPipeline::with_custom(
            MockDecoder { should_fail: true },
            MockStore::empty(),
            RetrievalConfig::default(),
        );

        let result = pipeline.extract_file(&path);
        assert!(matches!(result.unwrap_err(), RetrievalError::DecodeError(_)));
    }

    #[test]
    fn extract_file_missing_input_is_a_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.png");

        let pipeline = RetrievalPipeline::with_custom(
            MockDecoder { should_fail: false },
            MockStore::empty(),
            RetrievalConfig::default(),
        );

        let result = pipeline.extract_file(&path);
        assert!(matches!(
            result.unwrap_err(),
            RetrievalError::InputReadError(_)
        ));
    }

    #[test]
    fn index_directory_is_sorted_and_filtered() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("b.png"), [2]).unwrap();
        std::fs::write(dir.path().join("a.png"), [1]).unwrap();
        std::fs::write(dir.path().join("notes.txt"), b"not an image").unwrap();

        let pipeline = RetrievalPipeline::with_custom(
            MockDecoder { should_fail: false },
            MockStore::empty(),
            RetrievalConfig::default(),
        );

        let features = pipeline.index_directory(dir.path()).unwrap();
        let identifiers: Vec<&str> = features.iter().map(|f| f.identifier.as_str()).collect();
        assert_eq!(identifiers, ["a.png", "b.png"]);
    }

    #[test]
    fn load_or_index_prefers_a_usable_cache() {
        let dir = tempfile::tempdir().unwrap();
        let cache = dir.path().join("cache.json");
        std::fs::write(&cache, b"{}").unwrap();

        let cached = vec![extract_features(&mock_grid(9), "cached.png")];
        let config = RetrievalConfig::builder().cache_path(&cache).build();
        // A failing decoder proves no image is touched on a cache hit.
        let pipeline = RetrievalPipeline::with_custom(
            MockDecoder { should_fail: true },
            MockStore::preloaded(cached.clone()),
            config,
        );

        let features = pipeline.load_or_index(dir.path()).unwrap();
        assert_eq!(features, cached);
    }

    #[test]
    fn load_or_index_falls_back_to_indexing_and_saves() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("a.png"), [1]).unwrap();
        let cache = dir.path().join("cache.json");

        let store = MockStore::empty();
        let saved = store.saved.clone();
        let config = RetrievalConfig::builder().cache_path(&cache).build();
        let pipeline =
            RetrievalPipeline::with_custom(MockDecoder { should_fail: false }, store, config);

        let features = pipeline.load_or_index(dir.path()).unwrap();
        assert_eq!(features.len(), 1);
        assert_eq!(features[0].identifier, "a.png");

        let saved = saved.lock().unwrap();
        assert_eq!(saved.len(), 1);
        assert_eq!(saved[0], features);
        assert!(cache.exists());
    }

    #[test]
    fn load_or_index_without_cache_never_touches_the_store() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("a.png"), [1]).unwrap();

        let store = MockStore {
            should_fail: true,
            preloaded: None,
            saved: Arc::new(Mutex::new(Vec::new())),
        };
        let pipeline = RetrievalPipeline::with_custom(
            MockDecoder { should_fail: false },
            store,
            RetrievalConfig::default(),
        );

        let features = pipeline.load_or_index(dir.path()).unwrap();
        assert_eq!(features.len(), 1);
    }

    #[test]
    fn query_respects_the_configured_top_k() {
        let config = RetrievalConfig::builder().top_k(2).build();
        let pipeline = RetrievalPipeline::with_custom(
            MockDecoder { should_fail: false },
            MockStore::empty(),
            config,
        );

        let query = extract_features(&mock_grid(0), "query.png");
        let references: Vec<FeatureVector> = (1u8..=4)
            .map(|shade| extract_features(&mock_grid(shade * 20), format!("ref{shade}.png")))
            .collect();

        let result = pipeline.query(&query, &references).unwrap();
        assert_eq!(result.color.len(), 2);
        assert_eq!(result.texture.len(), 2);
        assert_eq!(result.combined.len(), 2);
    }

    #[test]
    fn config_builder_applies_overrides_and_defaults() {
        let config = RetrievalConfig::builder()
            .top_k(7)
            .cache_path("features.json")
            .build();

        assert_eq!(config.top_k, 7);
        assert_eq!(
            config.cache_path.as_deref(),
            Some(std::path::Path::new("features.json"))
        );
        assert_eq!(config.extensions, ["jpg", "jpeg", "png"]);

        let defaults = RetrievalConfig::default();
        assert_eq!(defaults.top_k, 5);
        assert!(defaults.cache_path.is_none());

        let uncached = RetrievalConfig::builder()
            .cache_path("features.json")
            .no_cache()
            .build();
        assert!(uncached.cache_path.is_none());
    }
}
