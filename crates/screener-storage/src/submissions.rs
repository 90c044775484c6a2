use std::collections::VecDeque;
use std::future::Future;
use std::pin::Pin;
use std::sync::{Mutex, MutexGuard, PoisonError};

use aws_sdk_s3::Client;

use screener_core::keys;
use screener_core::models::answer::Answer;
use screener_core::models::submission::AssessmentSubmission;

use crate::error::StorageError;
use crate::objects;

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Somewhere to record accepted submissions.
pub trait SubmissionStore: Send + Sync {
    /// Persist the answers. A missing patient id is replaced with a random one.
    fn save(
        &self,
        answers: Vec<Answer>,
        patient_id: Option<String>,
    ) -> BoxFuture<'_, Result<AssessmentSubmission, StorageError>>;
}

/// Stores each submission as a JSON object under `submissions/`.
#[derive(Clone)]
pub struct S3SubmissionStore {
    client: Client,
    bucket: String,
}

impl S3SubmissionStore {
    pub fn new(client: Client, bucket: impl Into<String>) -> Self {
        Self {
            client,
            bucket: bucket.into(),
        }
    }
}

impl SubmissionStore for S3SubmissionStore {
    fn save(
        &self,
        answers: Vec<Answer>,
        patient_id: Option<String>,
    ) -> BoxFuture<'_, Result<AssessmentSubmission, StorageError>> {
        Box::pin(async move {
            let submission = AssessmentSubmission::new(answers, patient_id);
            let key = keys::submission(submission.id);
            let body = serde_json::to_vec(&submission)?;
            objects::put_object(&self.client, &self.bucket, &key, body, Some("application/json"))
                .await?;
            tracing::info!(
                submission_id = %submission.id,
                key = %key,
                "saved assessment submission"
            );
            Ok(submission)
        })
    }
}

/// How many submissions [`MemorySubmissionStore::new`] keeps.
pub const DEFAULT_MEMORY_CAPACITY: usize = 1000;

/// Keeps the most recent submissions in process memory. Older ones are
/// evicted once `capacity` is reached, and everything is lost on restart.
pub struct MemorySubmissionStore {
    capacity: usize,
    submissions: Mutex<VecDeque<AssessmentSubmission>>,
}

impl MemorySubmissionStore {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_MEMORY_CAPACITY)
    }

    /// A capacity of zero keeps nothing.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity,
            submissions: Mutex::new(VecDeque::new()),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Snapshot of the retained submissions, oldest first.
    pub fn submissions(&self) -> Vec<AssessmentSubmission> {
        self.entries().iter().cloned().collect()
    }

    // A panic elsewhere cannot leave the deque half-updated, so a poisoned
    // lock is recovered rather than reported.
    fn entries(&self) -> MutexGuard<'_, VecDeque<AssessmentSubmission>> {
        self.submissions
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for MemorySubmissionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SubmissionStore for MemorySubmissionStore {
    fn save(
        &self,
        answers: Vec<Answer>,
        patient_id: Option<String>,
    ) -> BoxFuture<'_, Result<AssessmentSubmission, StorageError>> {
        Box::pin(async move {
            let submission = AssessmentSubmission::new(answers, patient_id);
            if self.capacity > 0 {
                let mut entries = self.entries();
                while entries.len() >= self.capacity {
                    entries.pop_front();
                }
                entries.push_back(submission.clone());
            }
            tracing::debug!(
                submission_id = %submission.id,
                "saved assessment submission in memory"
            );
            Ok(submission)
        })
    }
}
