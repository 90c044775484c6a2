mod common;

use std::sync::Arc;

use axum::http::StatusCode;
use serde_json::{json, Value};

use screener_core::models::answer::Answer;
use screener_core::models::submission::AssessmentSubmission;
use screener_storage::error::StorageError;
use screener_storage::submissions::{BoxFuture, MemorySubmissionStore, SubmissionStore};

use common::{app, json_body, post_json, send, wait_for};

const URI: &str = "/assessment-submissions";

fn valid_answers() -> Value {
    json!([
        {"question_id": "question_a", "value": 3},
        {"question_id": "question_b", "value": 2},
        {"question_id": "question_c", "value": 1},
        {"question_id": "question_d", "value": 2},
        {"question_id": "question_e", "value": 0},
        {"question_id": "question_f", "value": 1},
        {"question_id": "question_g", "value": 2},
        {"question_id": "question_h", "value": 0}
    ])
}

async fn submit(body: Value) -> (StatusCode, Value) {
    let store = Arc::new(MemorySubmissionStore::new());
    let response = send(app(store), post_json(URI, &body.to_string())).await;
    let status = response.status();
    (status, json_body(response).await)
}

struct FailingStore;

impl SubmissionStore for FailingStore {
    fn save(
        &self,
        _answers: Vec<Answer>,
        _patient_id: Option<String>,
    ) -> BoxFuture<'_, Result<AssessmentSubmission, StorageError>> {
        Box::pin(async { Err(StorageError::PutObject("database unavailable".to_string())) })
    }
}

#[tokio::test]
async fn valid_answers_return_deduplicated_results() {
    let (status, body) = submit(json!({"answers": valid_answers()})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["results"], json!(["PHQ-9", "ASRM"]));
}

#[tokio::test]
async fn substance_use_returns_assist() {
    let (status, body) =
        submit(json!({"answers": [{"question_id": "question_h", "value": 1}]})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["results"], json!(["ASSIST"]));
}

#[tokio::test]
async fn all_domains_over_threshold() {
    let (status, body) = submit(json!({"answers": [
        {"question_id": "question_a", "value": 3},
        {"question_id": "question_c", "value": 3},
        {"question_id": "question_h", "value": 2}
    ]}))
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["results"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn malformed_input_is_rejected() {
    for body in [
        json!({}),
        json!({"answers": null}),
        json!({"answers": "not an array"}),
        json!({"answers": []}),
        json!({"answers": [{"value": 2}]}),
        json!([{"question_id": "question_a", "value": 1}]),
    ] {
        let (status, response) = submit(body.clone()).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{body}");
        assert_eq!(
            response["error"],
            "Invalid input format. Expected { answers: [...] }",
            "{body}"
        );
    }
}

#[tokio::test]
async fn invalid_json_is_rejected() {
    let store = Arc::new(MemorySubmissionStore::new());
    let response = send(app(store), post_json(URI, "{\"answers\": [")).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(json_body(response).await["error"], "Invalid JSON format");
}

#[tokio::test]
async fn invalid_values_are_rejected() {
    for answer in [
        json!({"question_id": "question_a", "value": 5}),
        json!({"question_id": "question_b", "value": -1}),
        json!({"question_id": "question_c", "value": "2"}),
        json!({"question_id": "question_d", "value": 1.5}),
        json!({"question_id": "question_e"}),
    ] {
        let question_id = answer["question_id"].as_str().unwrap().to_string();
        let (status, body) = submit(json!({"answers": [answer]})).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], format!("Invalid value for question {question_id}"));
    }
}

#[tokio::test]
async fn unknown_question_is_rejected() {
    let (status, body) =
        submit(json!({"answers": [{"question_id": "unknown_question", "value": 2}]})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Unknown question_id: unknown_question");
}

#[tokio::test]
async fn rejected_submissions_are_not_persisted() {
    let store = Arc::new(MemorySubmissionStore::new());
    let body = json!({"answers": [{"question_id": "question_a", "value": 9}]});
    let response = send(app(store.clone()), post_json(URI, &body.to_string())).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    for _ in 0..10 {
        tokio::task::yield_now().await;
    }
    assert!(store.submissions().is_empty());
}

#[tokio::test]
async fn saves_submission_with_patient_id() {
    let store = Arc::new(MemorySubmissionStore::new());
    let body = json!({"patientId": "test-patient-id", "answers": valid_answers()});
    let response = send(app(store.clone()), post_json(URI, &body.to_string())).await;
    assert_eq!(response.status(), StatusCode::OK);

    wait_for(|| !store.submissions().is_empty()).await;
    let saved = store.submissions();
    assert_eq!(saved.len(), 1);
    assert_eq!(saved[0].patient_id, "test-patient-id");
    assert_eq!(serde_json::to_value(&saved[0].answers).unwrap(), valid_answers());
}

#[tokio::test]
async fn saves_submission_with_generated_patient_id() {
    let store = Arc::new(MemorySubmissionStore::new());
    let body = json!({"answers": valid_answers()});
    let response = send(app(store.clone()), post_json(URI, &body.to_string())).await;
    assert_eq!(response.status(), StatusCode::OK);

    wait_for(|| !store.submissions().is_empty()).await;
    let saved = store.submissions();
    assert_eq!(saved.len(), 1);
    assert!(saved[0].patient_id.parse::<uuid::Uuid>().is_ok());
}

#[tokio::test]
async fn store_failure_does_not_change_response() {
    let body = json!({"patientId": "test-patient-id", "answers": valid_answers()});
    let response = send(app(Arc::new(FailingStore)), post_json(URI, &body.to_string())).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_body(response).await["results"], json!(["PHQ-9", "ASRM"]));
}

#[tokio::test]
async fn non_string_patient_id_is_ignored() {
    for patient_id in [json!(42), json!(true), json!({"id": "p-1"})] {
        let store = Arc::new(MemorySubmissionStore::new());
        let body = json!({
            "patientId": patient_id,
            "answers": [{"question_id": "question_h", "value": 1}]
        });
        let response = send(app(store.clone()), post_json(URI, &body.to_string())).await;
        assert_eq!(response.status(), StatusCode::OK, "{patient_id}");
        assert_eq!(json_body(response).await["results"], json!(["ASSIST"]));

        wait_for(|| !store.submissions().is_empty()).await;
        let saved = store.submissions();
        assert_eq!(saved.len(), 1);
        assert!(saved[0].patient_id.parse::<uuid::Uuid>().is_ok());
    }
}

#[tokio::test]
async fn null_patient_id_is_treated_as_missing() {
    let (status, body) = submit(json!({
        "patientId": null,
        "answers": [{"question_id": "question_h", "value": 1}]
    }))
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["results"], json!(["ASSIST"]));
}

#[tokio::test]
async fn whole_number_float_values_are_scored() {
    let (status, body) =
        submit(json!({"answers": [{"question_id": "question_h", "value": 1.0}]})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["results"], json!(["ASSIST"]));
}

#[tokio::test]
async fn fractional_values_are_rejected() {
    let (status, body) =
        submit(json!({"answers": [{"question_id": "question_h", "value": 2.5}]})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid value for question question_h");
}
