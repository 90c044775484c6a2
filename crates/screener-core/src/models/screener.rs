use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

const EMBEDDED_SCREENER: &str = include_str!("../../data/screener.json");

/// The questionnaire shown to patients, served as-is to the frontend.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Screener {
    pub id: String,
    pub name: String,
    pub disorder: String,
    pub full_name: String,
    pub content: ScreenerContent,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScreenerContent {
    pub display_name: String,
    pub sections: Vec<Section>,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Section {
    #[serde(rename = "type")]
    pub section_type: String,
    pub title: String,
    pub answers: Vec<AnswerOption>,
    pub questions: Vec<Question>,
}

/// One choice on the rating scale of a section.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AnswerOption {
    pub title: String,
    pub value: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Question {
    pub question_id: String,
    pub title: String,
}

impl Screener {
    /// Parse the screener bundled with this crate.
    pub fn embedded() -> Result<Self, CoreError> {
        Ok(serde_json::from_str(EMBEDDED_SCREENER)?)
    }

    pub fn questions(&self) -> impl Iterator<Item = &Question> {
        self.content.sections.iter().flat_map(|s| &s.questions)
    }
}
