//! screener-core
//!
//! Shared domain types for the screener service: answers, persisted
//! submissions, the questionnaire definition and storage key conventions.
//! No AWS SDK dependency.

pub mod error;
pub mod keys;
pub mod models;
