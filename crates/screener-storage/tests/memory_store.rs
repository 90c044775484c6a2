use screener_core::models::answer::Answer;
use screener_storage::submissions::{
    DEFAULT_MEMORY_CAPACITY, MemorySubmissionStore, SubmissionStore,
};

#[tokio::test]
async fn saves_with_given_patient_id() {
    let store = MemorySubmissionStore::new();
    let answers = vec![Answer::new("question_a", 3), Answer::new("question_h", 1)];

    let saved = store
        .save(answers.clone(), Some("test-patient-id".to_string()))
        .await
        .unwrap();

    assert_eq!(saved.patient_id, "test-patient-id");
    assert_eq!(saved.answers, answers);

    let stored = store.submissions();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].id, saved.id);
}

#[tokio::test]
async fn assigns_patient_id_when_missing() {
    let store = MemorySubmissionStore::new();
    let saved = store.save(vec![Answer::new("question_b", 2)], None).await.unwrap();
    assert!(!saved.patient_id.is_empty());
}

#[tokio::test]
async fn each_submission_gets_its_own_record() {
    let store = MemorySubmissionStore::new();
    let first = store.save(vec![Answer::new("question_a", 1)], None).await.unwrap();
    let second = store.save(vec![Answer::new("question_a", 1)], None).await.unwrap();

    assert_ne!(first.id, second.id);
    assert_eq!(store.submissions().len(), 2);
}

#[tokio::test]
async fn store_is_usable_as_trait_object() {
    let store: Box<dyn SubmissionStore> = Box::new(MemorySubmissionStore::new());
    let saved = store.save(vec![], Some("p".to_string())).await.unwrap();
    assert!(saved.answers.is_empty());
}

#[tokio::test]
async fn oldest_submissions_are_evicted_at_capacity() {
    let store = MemorySubmissionStore::with_capacity(3);
    let mut ids = Vec::new();
    for value in 0..5 {
        let saved = store
            .save(vec![Answer::new("question_a", value)], None)
            .await
            .unwrap();
        ids.push(saved.id);
    }

    let retained: Vec<_> = store.submissions().iter().map(|s| s.id).collect();
    assert_eq!(retained, ids[2..]);
}

#[tokio::test]
async fn zero_capacity_keeps_nothing_but_still_saves() {
    let store = MemorySubmissionStore::with_capacity(0);
    let saved = store.save(vec![Answer::new("question_h", 1)], None).await;
    assert!(saved.is_ok());
    assert!(store.submissions().is_empty());
}

#[test]
fn default_store_is_bounded() {
    let store = MemorySubmissionStore::new();
    assert_eq!(store.capacity(), DEFAULT_MEMORY_CAPACITY);
}
