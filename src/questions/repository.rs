//! CRUD facade over the question store
//!
//! Every operation is a full read-modify-write against the single
//! storage slot and completes before returning, so the persisted
//! collection is always exactly the result of the last successful write.

use uuid::Uuid;

use super::models::{Question, QuestionDraft, QuestionPatch};
use super::store::{QuestionStore, Result, StorageError};

pub struct QuestionRepository {
    store: QuestionStore,
}

impl QuestionRepository {
    pub fn new(store: QuestionStore) -> Self {
        Self { store }
    }

    /// List all questions in storage order
    pub fn list(&self) -> Result<Vec<Question>> {
        self.store.read()
    }

    /// Get a specific question
    pub fn get(&self, id: Uuid) -> Result<Question> {
        let questions = self.store.read()?;
        questions
            .into_iter()
            .find(|q| q.id == id)
            .ok_or(StorageError::NotFound(id))
    }

    /// Create a new question and persist it
    pub fn create(&self, draft: QuestionDraft) -> Result<Question> {
        validate_draft(&draft)?;

        let question = Question::new(
            draft.question,
            draft.answer,
            draft.topic,
            draft.difficulty,
            draft.confidence,
        );

        let mut questions = self.store.read()?;
        questions.push(question.clone());
        self.store.write(&questions)?;

        log::info!("Created question {} in topic '{}'", question.id, question.topic);
        Ok(question)
    }

    /// Merge a partial update over an existing question.
    /// `id` and `created_at` are never changed.
    pub fn update(&self, id: Uuid, patch: &QuestionPatch) -> Result<Question> {
        validate_patch(patch)?;

        let mut questions = self.store.read()?;
        let pos = questions
            .iter()
            .position(|q| q.id == id)
            .ok_or(StorageError::NotFound(id))?;

        patch.apply(&mut questions[pos]);
        let updated = questions[pos].clone();
        self.store.write(&questions)?;

        Ok(updated)
    }

    /// Delete a question by id. An unknown id is reported as
    /// `NotFound` (consistent with `update`) and leaves storage untouched.
    pub fn delete(&self, id: Uuid) -> Result<()> {
        let mut questions = self.store.read()?;
        let pos = questions
            .iter()
            .position(|q| q.id == id)
            .ok_or(StorageError::NotFound(id))?;

        questions.remove(pos);
        self.store.write(&questions)?;

        log::info!("Deleted question {}", id);
        Ok(())
    }
}

fn validate_draft(draft: &QuestionDraft) -> Result<()> {
    if draft.question.trim().is_empty() {
        return Err(StorageError::MissingField("question"));
    }
    if draft.topic.trim().is_empty() {
        return Err(StorageError::MissingField("topic"));
    }
    validate_confidence(draft.confidence)
}

fn validate_patch(patch: &QuestionPatch) -> Result<()> {
    if let Some(text) = &patch.question {
        if text.trim().is_empty() {
            return Err(StorageError::MissingField("question"));
        }
    }
    if let Some(topic) = &patch.topic {
        if topic.trim().is_empty() {
            return Err(StorageError::MissingField("topic"));
        }
    }
    if let Some(confidence) = patch.confidence {
        validate_confidence(confidence)?;
    }
    Ok(())
}

fn validate_confidence(confidence: i32) -> Result<()> {
    if !(1..=5).contains(&confidence) {
        return Err(StorageError::ConfidenceOutOfRange(confidence));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::questions::Difficulty;
    use std::collections::HashSet;
    use tempfile::TempDir;

    fn create_test_repository() -> (QuestionRepository, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let store = QuestionStore::new(temp_dir.path().to_path_buf());
        (QuestionRepository::new(store), temp_dir)
    }

    fn sample_draft(topic: &str) -> QuestionDraft {
        QuestionDraft {
            question: "Explain two-pointer technique".to_string(),
            answer: None,
            topic: topic.to_string(),
            difficulty: Difficulty::Easy,
            confidence: 4,
        }
    }

    #[test]
    fn test_create_and_list() {
        let (repo, _temp) = create_test_repository();

        let created = repo.create(sample_draft("Arrays")).unwrap();
        assert_eq!(created.topic, "Arrays");
        assert_eq!(created.confidence, 4);

        let listed = repo.list().unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0], created);
    }

    #[test]
    fn test_create_assigns_unique_ids() {
        let (repo, _temp) = create_test_repository();

        for _ in 0..5 {
            repo.create(sample_draft("Graphs")).unwrap();
        }

        let ids: HashSet<_> = repo.list().unwrap().into_iter().map(|q| q.id).collect();
        assert_eq!(ids.len(), 5);
    }

    #[test]
    fn test_create_rejects_blank_required_fields() {
        let (repo, _temp) = create_test_repository();

        let mut draft = sample_draft("Arrays");
        draft.question = "   ".to_string();
        assert!(matches!(
            repo.create(draft),
            Err(StorageError::MissingField("question"))
        ));

        let mut draft = sample_draft("Arrays");
        draft.topic = String::new();
        assert!(matches!(
            repo.create(draft),
            Err(StorageError::MissingField("topic"))
        ));

        assert!(repo.list().unwrap().is_empty());
    }

    #[test]
    fn test_create_rejects_out_of_range_confidence() {
        let (repo, _temp) = create_test_repository();

        for bad in [0, 6, -1] {
            let mut draft = sample_draft("Arrays");
            draft.confidence = bad;
            assert!(matches!(
                repo.create(draft),
                Err(StorageError::ConfidenceOutOfRange(c)) if c == bad
            ));
        }
    }

    #[test]
    fn test_update_merges_only_patched_fields() {
        let (repo, _temp) = create_test_repository();

        let created = repo.create(sample_draft("Arrays")).unwrap();
        let patch = QuestionPatch {
            confidence: Some(2),
            answer: Some("Walk both ends inward".to_string()),
            ..Default::default()
        };

        let updated = repo.update(created.id, &patch).unwrap();
        assert_eq!(updated.id, created.id);
        assert_eq!(updated.created_at, created.created_at);
        assert_eq!(updated.question, created.question);
        assert_eq!(updated.topic, "Arrays");
        assert_eq!(updated.confidence, 2);
        assert_eq!(updated.answer.as_deref(), Some("Walk both ends inward"));

        // Persisted copy matches the returned record
        assert_eq!(repo.get(created.id).unwrap(), updated);
    }

    #[test]
    fn test_update_unknown_id_is_not_found() {
        let (repo, _temp) = create_test_repository();
        repo.create(sample_draft("Arrays")).unwrap();

        let missing = Uuid::new_v4();
        let patch = QuestionPatch {
            confidence: Some(1),
            ..Default::default()
        };
        assert!(matches!(
            repo.update(missing, &patch),
            Err(StorageError::NotFound(id)) if id == missing
        ));
    }

    #[test]
    fn test_delete_removes_record() {
        let (repo, _temp) = create_test_repository();

        let keep = repo.create(sample_draft("Arrays")).unwrap();
        let gone = repo.create(sample_draft("Graphs")).unwrap();

        repo.delete(gone.id).unwrap();

        let listed = repo.list().unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].id, keep.id);
    }

    #[test]
    fn test_delete_unknown_id_leaves_collection_intact() {
        let (repo, _temp) = create_test_repository();

        let created = repo.create(sample_draft("Arrays")).unwrap();
        let before = repo.list().unwrap();

        let missing = Uuid::new_v4();
        assert!(matches!(
            repo.delete(missing),
            Err(StorageError::NotFound(id)) if id == missing
        ));

        assert_eq!(repo.list().unwrap(), before);
        assert_eq!(repo.get(created.id).unwrap(), created);
    }

    #[test]
    fn test_list_is_idempotent() {
        let (repo, _temp) = create_test_repository();

        repo.create(sample_draft("Arrays")).unwrap();
        repo.create(sample_draft("Graphs")).unwrap();

        assert_eq!(repo.list().unwrap(), repo.list().unwrap());
    }
}
