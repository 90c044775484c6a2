use axum::extract::State;
use axum::Json;

use screener_core::models::screener::Screener;

use crate::state::AppState;

/// The questionnaire definition the frontend renders.
pub async fn get_screener(State(state): State<AppState>) -> Json<Screener> {
    Json(state.screener.as_ref().clone())
}
