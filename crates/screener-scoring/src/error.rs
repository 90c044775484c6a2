use thiserror::Error;

/// Why a batch of answers could not be scored. Both variants are caused by
/// the submitted data and are not worth retrying as-is.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScoringError {
    #[error("Invalid value for question {question_id}")]
    InvalidAnswerValue { question_id: String },

    #[error("Unknown question_id: {question_id}")]
    UnknownQuestion { question_id: String },
}

impl ScoringError {
    pub fn question_id(&self) -> &str {
        match self {
            ScoringError::InvalidAnswerValue { question_id }
            | ScoringError::UnknownQuestion { question_id } => question_id,
        }
    }
}

/// Problems with the static scoring tables, raised once at startup.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read domain mapping {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse domain mapping: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("question '{question_id}' mapped to both '{first}' and '{second}'")]
    ConflictingQuestion {
        question_id: String,
        first: String,
        second: String,
    },

    #[error("duplicate criterion for domain '{0}'")]
    DuplicateCriterion(String),

    #[error("criterion for domain '{0}' has an empty assessment name")]
    EmptyAssessment(String),
}
