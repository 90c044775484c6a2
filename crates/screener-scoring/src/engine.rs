use std::collections::HashMap;

use screener_core::models::answer::{Answer, AnswerValue};

use crate::criteria::{self, default_criteria, AssessmentCriterion};
use crate::error::{ConfigError, ScoringError};
use crate::mapping::QuestionDomainMapping;

/// Smallest accepted answer value.
pub const MIN_VALUE: i64 = 0;
/// Largest accepted answer value.
pub const MAX_VALUE: i64 = 4;

/// Accumulated score per domain for one batch of answers.
pub type DomainScores = HashMap<String, i64>;

/// Scores answers against a fixed mapping and criteria table.
///
/// Holds no mutable state, so one instance can be shared across any number
/// of concurrent requests.
#[derive(Debug, Clone)]
pub struct ScoringEngine {
    mapping: QuestionDomainMapping,
    criteria: Vec<AssessmentCriterion>,
}

impl ScoringEngine {
    pub fn new(
        mapping: QuestionDomainMapping,
        criteria: Vec<AssessmentCriterion>,
    ) -> Result<Self, ConfigError> {
        criteria::validate(&criteria)?;
        Ok(Self { mapping, criteria })
    }

    /// Engine over the bundled mapping and the default criteria.
    pub fn embedded() -> Result<Self, ConfigError> {
        Self::new(QuestionDomainMapping::embedded()?, default_criteria())
    }

    pub fn mapping(&self) -> &QuestionDomainMapping {
        &self.mapping
    }

    pub fn criteria(&self) -> &[AssessmentCriterion] {
        &self.criteria
    }

    /// Sum answer values per domain.
    ///
    /// Stops at the first answer with an out-of-range value or an unknown
    /// question; nothing accumulated before that point is returned.
    pub fn domain_scores(&self, answers: &[Answer]) -> Result<DomainScores, ScoringError> {
        let mut scores = DomainScores::new();
        for answer in answers {
            let value = valid_value(&answer.value).ok_or_else(|| {
                ScoringError::InvalidAnswerValue {
                    question_id: answer.question_id.clone(),
                }
            })?;
            let domain = self.mapping.domain_for(&answer.question_id).ok_or_else(|| {
                ScoringError::UnknownQuestion {
                    question_id: answer.question_id.clone(),
                }
            })?;
            *scores.entry(domain.to_string()).or_insert(0) += value;
        }
        Ok(scores)
    }

    /// Assessments indicated by `answers`, each named once, in the order the
    /// criteria table first triggers them.
    pub fn score_and_recommend(&self, answers: &[Answer]) -> Result<Vec<String>, ScoringError> {
        let scores = self.domain_scores(answers)?;

        let mut assessments: Vec<String> = Vec::new();
        for criterion in &self.criteria {
            let score = scores.get(&criterion.domain).copied().unwrap_or(0);
            if criterion.is_met(score) && !assessments.contains(&criterion.assessment) {
                assessments.push(criterion.assessment.clone());
            }
        }
        Ok(assessments)
    }
}

fn valid_value(value: &AnswerValue) -> Option<i64> {
    value
        .as_integer()
        .filter(|v| (MIN_VALUE..=MAX_VALUE).contains(v))
}
