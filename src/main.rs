use photosift_rs::image_retrieval::{RetrievalConfig, RetrievalPipeline, build_report};
use photosift_rs::logger;

use tracing::{error, info};

fn main() -> anyhow::Result<()> {
    logger::init();

    info!("Starting photosift...");

    let mut args = std::env::args().skip(1);
    let reference_dir = args.next().unwrap_or_else(|| "references".to_string());
    let query_dir = args.next().unwrap_or_else(|| "queries".to_string());

    let config = RetrievalConfig::builder()
        .top_k(5)
        .cache_path("reference_features.json")
        .build();
    let pipeline = RetrievalPipeline::new(config);

    info!("Retrieval pipeline initialized");
    info!("Top-k: {}", pipeline.config().top_k);
    info!("References: {}, queries: {}", reference_dir, query_dir);

    let references = pipeline.load_or_index(&reference_dir)?;
    info!("Reference set ready: {} images", references.len());

    let mut query_paths: Vec<_> = std::fs::read_dir(&query_dir)?
        .collect::<Result<Vec<_>, _>>()?
        .into_iter()
        .map(|entry| entry.path())
        .filter(|path| {
            path.extension()
                .and_then(|extension| extension.to_str())
                .is_some_and(|extension| {
                    let extension = extension.to_ascii_lowercase();
                    pipeline
                        .config()
                        .extensions
                        .iter()
                        .any(|known| *known == extension)
                })
        })
        .collect();
    query_paths.sort();

    for path in query_paths {
        match pipeline.extract_file(&path) {
            Ok(query) => match pipeline.query(&query, &references) {
                Ok(ranked) => println!("{}", build_report(&query.identifier, &ranked)),
                Err(e) => error!("Ranking failed for {}: {}", query.identifier, e),
            },
            Err(e) => error!("Extraction failed for {}: {}", path.display(), e),
        }
    }

    Ok(())
}
