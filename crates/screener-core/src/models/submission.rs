use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use super::answer::Answer;

/// A persisted screener submission. Written once, never updated.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AssessmentSubmission {
    pub id: Uuid,
    pub patient_id: String,
    pub answers: Vec<Answer>,
    pub submitted_at: jiff::Timestamp,
}

impl AssessmentSubmission {
    /// Build a new record. Without a patient id a random one is assigned.
    pub fn new(answers: Vec<Answer>, patient_id: Option<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            patient_id: patient_id.unwrap_or_else(|| Uuid::new_v4().to_string()),
            answers,
            submitted_at: jiff::Timestamp::now(),
        }
    }
}
