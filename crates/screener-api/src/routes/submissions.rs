use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use screener_core::models::answer::Answer;

use crate::error::{ApiError, INVALID_INPUT_FORMAT};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionRequest {
    pub answers: Vec<Answer>,
    #[serde(default, deserialize_with = "lenient_patient_id")]
    pub patient_id: Option<String>,
}

/// Only strings are used as patient ids. Anything else is dropped so that a
/// bad id never turns a scored submission into an error; the record then
/// gets a generated id.
fn lenient_patient_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(id)) => Ok(Some(id)),
        Some(Value::Null) | None => Ok(None),
        Some(other) => {
            tracing::warn!(kind = json_kind(&other), "ignoring non-string patientId");
            Ok(None)
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[derive(Debug, Serialize)]
pub struct SubmissionResponse {
    pub results: Vec<String>,
}

/// Score a screener submission and return the indicated assessments.
///
/// Persisting the submission happens in the background once scoring has
/// succeeded; its outcome never changes the response.
pub async fn create_submission(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<SubmissionResponse>, ApiError> {
    let Json(body) = payload?;
    let request = parse_request(body)?;
    tracing::info!(
        answers = request.answers.len(),
        has_patient_id = request.patient_id.is_some(),
        "received submission"
    );

    let results = state
        .engine
        .score_and_recommend(&request.answers)
        .inspect_err(|e| tracing::warn!(error = %e, "failed to score submission"))?;
    tracing::info!(results = ?results, "generated assessments");

    persist_in_background(&state, request);

    Ok(Json(SubmissionResponse { results }))
}

fn parse_request(body: Value) -> Result<SubmissionRequest, ApiError> {
    if !body.is_object() {
        tracing::warn!("submission body is not an object");
        return Err(ApiError::BadRequest(INVALID_INPUT_FORMAT.to_string()));
    }
    let request: SubmissionRequest = serde_json::from_value(body).map_err(|e| {
        tracing::warn!(error = %e, "invalid submission format");
        ApiError::BadRequest(INVALID_INPUT_FORMAT.to_string())
    })?;

    if request.answers.is_empty() {
        tracing::warn!("submission has no answers");
        return Err(ApiError::BadRequest(INVALID_INPUT_FORMAT.to_string()));
    }
    Ok(request)
}

fn persist_in_background(state: &AppState, request: SubmissionRequest) {
    let store = Arc::clone(&state.store);
    tokio::spawn(async move {
        match store.save(request.answers, request.patient_id).await {
            Ok(submission) => {
                tracing::info!(submission_id = %submission.id, "persisted assessment submission");
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to save assessment submission");
            }
        }
    });
}
