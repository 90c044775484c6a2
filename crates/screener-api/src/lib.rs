//! screener-api
//!
//! HTTP host for the screener: serves the questionnaire, scores submissions
//! and hands accepted answers to the submission store.

use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderValue, Method};
use axum::middleware as axum_mw;
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{AllowOrigin, CorsLayer};

pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod state;

use state::AppState;

/// CORS policy that only echoes origins on the allow-list. Requests from
/// other origins are still served, just without the allow header.
pub fn cors_layer(allowed_origins: &[String]) -> eyre::Result<CorsLayer> {
    if allowed_origins.iter().any(|o| o == "*") {
        eyre::bail!("wildcard CORS origin is not supported, list origins explicitly");
    }
    let origins = allowed_origins
        .iter()
        .map(|o| {
            HeaderValue::from_str(o).map_err(|e| eyre::eyre!("invalid CORS origin {o:?}: {e}"))
        })
        .collect::<eyre::Result<Vec<_>>>()?;

    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([CONTENT_TYPE]))
}

pub fn router(state: AppState, cors: CorsLayer) -> Router {
    Router::new()
        .route("/health", get(routes::health::health_check))
        .route("/screener-config", get(routes::screener::get_screener))
        .route(
            "/assessment-submissions",
            post(routes::submissions::create_submission),
        )
        .fallback(routes::not_found)
        .layer(axum_mw::from_fn(middleware::audit::audit_log))
        .layer(cors)
        .with_state(state)
}
