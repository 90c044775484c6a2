#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, Response};
use axum::Router;
use serde_json::Value;
use tower::ServiceExt;

use screener_api::config::DEFAULT_ALLOWED_ORIGINS;
use screener_api::state::AppState;
use screener_core::models::screener::Screener;
use screener_scoring::ScoringEngine;
use screener_storage::submissions::SubmissionStore;

pub fn app(store: Arc<dyn SubmissionStore>) -> Router {
    let origins: Vec<String> = DEFAULT_ALLOWED_ORIGINS.iter().map(|o| o.to_string()).collect();
    let state = AppState {
        engine: Arc::new(ScoringEngine::embedded().unwrap()),
        screener: Arc::new(Screener::embedded().unwrap()),
        store,
    };
    screener_api::router(state, screener_api::cors_layer(&origins).unwrap())
}

pub fn post_json(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

pub async fn send(app: Router, req: Request<Body>) -> Response<Body> {
    app.oneshot(req).await.unwrap()
}

pub async fn json_body(response: Response<Body>) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

/// Let detached tasks run until `done` holds or we give up.
pub async fn wait_for(done: impl Fn() -> bool) {
    for _ in 0..100 {
        if done() {
            return;
        }
        tokio::task::yield_now().await;
    }
}
