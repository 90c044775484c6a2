//! Object key conventions.
//!
//! Pure string functions. These define where persisted records live in the
//! screener bucket.

use uuid::Uuid;

pub const SUBMISSIONS_PREFIX: &str = "submissions/";

pub fn submission(id: Uuid) -> String {
    format!("{SUBMISSIONS_PREFIX}{id}.json")
}
