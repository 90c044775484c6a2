use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::ConfigError;

const EMBEDDED_MAPPING: &str = include_str!("../data/domain_mapping.json");

/// One row of the question → domain table as stored on disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct MappingEntry {
    pub question_id: String,
    pub domain: String,
}

/// Static lookup from question id to the clinical domain it scores into.
///
/// Built once before the first request and only read afterwards.
#[derive(Debug, Clone, Default)]
pub struct QuestionDomainMapping {
    domains: HashMap<String, String>,
}

impl QuestionDomainMapping {
    /// Build the table from entries. Repeating an identical entry is allowed;
    /// mapping one question to two domains is not.
    pub fn from_entries<I>(entries: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = MappingEntry>,
    {
        let mut domains: HashMap<String, String> = HashMap::new();
        for entry in entries {
            match domains.get(&entry.question_id) {
                Some(existing) if *existing != entry.domain => {
                    return Err(ConfigError::ConflictingQuestion {
                        question_id: entry.question_id,
                        first: existing.clone(),
                        second: entry.domain,
                    });
                }
                Some(_) => {}
                None => {
                    domains.insert(entry.question_id, entry.domain);
                }
            }
        }
        Ok(Self { domains })
    }

    pub fn from_pairs<'a, I>(pairs: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        Self::from_entries(pairs.into_iter().map(|(question_id, domain)| MappingEntry {
            question_id: question_id.to_string(),
            domain: domain.to_string(),
        }))
    }

    /// Parse a JSON array of `{question_id, domain}` objects.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let entries: Vec<MappingEntry> = serde_json::from_str(json)?;
        Self::from_entries(entries)
    }

    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        let mapping = Self::from_json_str(&contents)?;
        tracing::info!(
            path = %path.display(),
            questions = mapping.len(),
            "loaded domain mapping from file"
        );
        Ok(mapping)
    }

    /// The mapping bundled with this crate.
    pub fn embedded() -> Result<Self, ConfigError> {
        Self::from_json_str(EMBEDDED_MAPPING)
    }

    pub fn domain_for(&self, question_id: &str) -> Option<&str> {
        self.domains.get(question_id).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.domains.len()
    }

    pub fn is_empty(&self) -> bool {
        self.domains.is_empty()
    }
}
