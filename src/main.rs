use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use tokio::net::TcpListener;

use sentiscope::application::services::{AnalysisService, SegmentExtractor};
use sentiscope::infrastructure::classifier::ClassifierChainFactory;
use sentiscope::infrastructure::observability::{TracingConfig, init_tracing};
use sentiscope::infrastructure::sentiment::KeywordExtractor;
use sentiscope::infrastructure::text_processing::{CompositeFileLoader, RuleSegmenter};
use sentiscope::presentation::{AppState, Environment, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let environment = Environment::from_env().map_err(anyhow::Error::msg)?;
    let settings = Settings::load(environment).context("Failed to load settings")?;

    let json_logs = settings.logging.json_format || TracingConfig::default().json_format;
    init_tracing(&TracingConfig::new(environment.as_str(), json_logs))?;

    let strategies = ClassifierChainFactory::create(&settings.classifier)?;
    let analysis_service = Arc::new(AnalysisService::new(
        strategies,
        Arc::new(KeywordExtractor::standard()),
        Duration::from_millis(settings.classifier.timeout_ms),
        settings.analysis.max_concurrency,
    ));
    let segment_extractor = Arc::new(SegmentExtractor::new(
        Arc::new(CompositeFileLoader::standard()),
        Arc::new(RuleSegmenter),
    ));

    let addr = format!("{}:{}", settings.server.host, settings.server.port);
    let state = AppState {
        segment_extractor,
        analysis_service,
    };
    let router = create_router(state);

    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    tracing::info!(address = %addr, environment = %environment, "Listening");

    axum::serve(listener, router).await?;

    Ok(())
}
