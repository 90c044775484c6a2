//! screener-scoring
//!
//! Maps screener answers to recommended follow-up assessments. Pure data and
//! arithmetic, no I/O beyond loading the mapping table at startup.

pub mod criteria;
pub mod engine;
pub mod error;
pub mod mapping;

pub use criteria::{default_criteria, AssessmentCriterion};
pub use engine::{DomainScores, ScoringEngine};
pub use error::{ConfigError, ScoringError};
pub use mapping::QuestionDomainMapping;
