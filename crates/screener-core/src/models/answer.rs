use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A single question/answer pair as submitted by the client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Answer {
    pub question_id: String,
    /// Missing values deserialize to `null` so that they surface as an
    /// invalid value for this question rather than a malformed request.
    #[serde(default)]
    pub value: AnswerValue,
}

impl Answer {
    pub fn new(question_id: impl Into<String>, value: i64) -> Self {
        Self {
            question_id: question_id.into(),
            value: AnswerValue::Integer(value),
        }
    }
}

/// The raw value of an answer.
///
/// Clients send arbitrary JSON here. Integers are kept as such; anything else
/// (strings, fractions, null) is preserved verbatim so the submission can be
/// stored exactly as received.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(untagged)]
#[ts(export)]
pub enum AnswerValue {
    Integer(i64),
    Other(serde_json::Value),
}

impl AnswerValue {
    /// The value as a whole number. Floats with no fractional part, such as
    /// `1.0`, count as whole numbers.
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            AnswerValue::Integer(v) => Some(*v),
            AnswerValue::Other(serde_json::Value::Number(n)) => n
                .as_f64()
                .filter(|f| f.is_finite() && f.fract() == 0.0)
                .filter(|f| *f >= i64::MIN as f64 && *f <= i64::MAX as f64)
                .map(|f| f as i64),
            AnswerValue::Other(_) => None,
        }
    }
}

impl Default for AnswerValue {
    fn default() -> Self {
        AnswerValue::Other(serde_json::Value::Null)
    }
}
