use std::net::SocketAddr;
use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use screener_api::config::AppConfig;
use screener_api::state::AppState;
use screener_core::models::screener::Screener;
use screener_scoring::{default_criteria, QuestionDomainMapping, ScoringEngine};
use screener_storage::submissions::{MemorySubmissionStore, S3SubmissionStore, SubmissionStore};

#[tokio::main]
async fn main() -> eyre::Result<()> {
    let config = AppConfig::from_env()?;
    init_tracing(&config);

    let mapping = match &config.domain_mapping_path {
        Some(path) => QuestionDomainMapping::from_path(path)?,
        None => QuestionDomainMapping::embedded()?,
    };
    let engine = ScoringEngine::new(mapping, default_criteria())?;
    let screener = Screener::embedded()?;

    let store: Arc<dyn SubmissionStore> = match &config.bucket {
        Some(bucket) => {
            let s3 = screener_storage::client::build_client().await;
            Arc::new(S3SubmissionStore::new(s3, bucket.clone()))
        }
        None => {
            tracing::warn!(
                capacity = screener_storage::submissions::DEFAULT_MEMORY_CAPACITY,
                "SCREENER_BUCKET not set, only the most recent submissions are kept in memory"
            );
            Arc::new(MemorySubmissionStore::new())
        }
    };

    let state = AppState {
        engine: Arc::new(engine),
        screener: Arc::new(screener),
        store,
    };
    let app = screener_api::router(state, screener_api::cors_layer(&config.allowed_origins)?);

    if config.lambda_runtime {
        tracing::info!(environment = %config.environment, "starting lambda handler");
        return lambda_http::run(app).await.map_err(|e| eyre::eyre!(e));
    }

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, environment = %config.environment, "server is running");
    axum::serve(listener, app).await?;
    Ok(())
}

fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if config.json_logs() {
        // Structured JSON logging for CloudWatch
        tracing_subscriber::fmt().with_env_filter(filter).json().init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).compact().init();
    }
}
