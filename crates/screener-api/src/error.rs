use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use screener_scoring::ScoringError;

pub const INVALID_JSON: &str = "Invalid JSON format";
pub const INVALID_INPUT_FORMAT: &str = "Invalid input format. Expected { answers: [...] }";

/// Unified API error type for all route handlers.
#[derive(Debug)]
pub enum ApiError {
    NotFound(String),
    BadRequest(String),
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}

impl From<ScoringError> for ApiError {
    fn from(e: ScoringError) -> Self {
        ApiError::BadRequest(e.to_string())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        match rejection {
            // No JSON body at all is treated like a body without `answers`.
            JsonRejection::MissingJsonContentType(_) => {
                ApiError::BadRequest(INVALID_INPUT_FORMAT.to_string())
            }
            other => {
                tracing::warn!(error = %other.body_text(), "invalid JSON body");
                ApiError::BadRequest(INVALID_JSON.to_string())
            }
        }
    }
}
