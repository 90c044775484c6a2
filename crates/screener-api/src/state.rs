use std::sync::Arc;

use screener_core::models::screener::Screener;
use screener_scoring::ScoringEngine;
use screener_storage::submissions::SubmissionStore;

/// Shared application state, injected into all route handlers via Axum state.
/// Everything here is read-only after startup.
#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<ScoringEngine>,
    pub screener: Arc<Screener>,
    pub store: Arc<dyn SubmissionStore>,
}
