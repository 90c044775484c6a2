use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::ConfigError;

/// Assessment names recommended by the default table.
pub mod assessment {
    pub const PHQ_9: &str = "PHQ-9";
    pub const ASRM: &str = "ASRM";
    pub const ASSIST: &str = "ASSIST";
}

/// Domain names used by the default table.
pub mod domain {
    pub const DEPRESSION: &str = "depression";
    pub const MANIA: &str = "mania";
    pub const ANXIETY: &str = "anxiety";
    pub const SUBSTANCE_USE: &str = "substance_use";
}

/// Recommend `assessment` when the domain's score reaches `threshold`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AssessmentCriterion {
    pub domain: String,
    pub threshold: i64,
    pub assessment: String,
}

impl AssessmentCriterion {
    pub fn new(domain: &str, threshold: i64, assessment: &str) -> Self {
        Self {
            domain: domain.to_string(),
            threshold,
            assessment: assessment.to_string(),
        }
    }

    /// Thresholds are inclusive.
    pub fn is_met(&self, score: i64) -> bool {
        score >= self.threshold
    }
}

/// The fixed criteria table. Several domains may share an assessment.
pub fn default_criteria() -> Vec<AssessmentCriterion> {
    vec![
        AssessmentCriterion::new(domain::DEPRESSION, 2, assessment::PHQ_9),
        AssessmentCriterion::new(domain::MANIA, 2, assessment::ASRM),
        AssessmentCriterion::new(domain::ANXIETY, 2, assessment::PHQ_9),
        AssessmentCriterion::new(domain::SUBSTANCE_USE, 1, assessment::ASSIST),
    ]
}

/// One criterion per domain, each naming an assessment.
pub(crate) fn validate(criteria: &[AssessmentCriterion]) -> Result<(), ConfigError> {
    let mut seen = HashSet::new();
    for criterion in criteria {
        if !seen.insert(criterion.domain.as_str()) {
            return Err(ConfigError::DuplicateCriterion(criterion.domain.clone()));
        }
        if criterion.assessment.trim().is_empty() {
            return Err(ConfigError::EmptyAssessment(criterion.domain.clone()));
        }
    }
    Ok(())
}
