//! screener-storage
//!
//! Persistence for accepted submissions. Thin wrapper around the AWS S3 SDK,
//! plus an in-process store for local runs and tests.

pub mod client;
pub mod error;
pub mod objects;
pub mod submissions;
