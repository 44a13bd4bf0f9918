//! In-memory question cache kept in sync with the repository
//!
//! `QuestionContext` is the single state container behind the UI: it
//! owns the canonical cached list (newest first) and reconciles it
//! after each successful mutation instead of re-fetching. Construct
//! one per process (or per test) and pass it around explicitly.

use std::collections::HashMap;

use uuid::Uuid;

use crate::questions::{
    Question, QuestionDraft, QuestionPatch, QuestionRepository, Result,
};
use crate::stats::{self, DashboardStats, TopicBreakdown};

pub struct QuestionContext {
    repository: QuestionRepository,
    questions: Vec<Question>,
    /// id → position in `questions`, rebuilt after structural changes
    index: HashMap<Uuid, usize>,
}

impl QuestionContext {
    /// Load the cache from storage, newest first
    pub fn load(repository: QuestionRepository) -> Result<Self> {
        let mut context = Self {
            repository,
            questions: Vec::new(),
            index: HashMap::new(),
        };
        context.refresh()?;
        Ok(context)
    }

    /// Re-fetch the full collection, replacing the cache
    pub fn refresh(&mut self) -> Result<()> {
        let mut questions = self.repository.list()?;
        // Stable sort: records sharing a timestamp keep storage order
        questions.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        log::info!("Loaded {} questions", questions.len());
        self.questions = questions;
        self.reindex();
        Ok(())
    }

    /// The cached list, most recent first
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn get(&self, id: Uuid) -> Option<&Question> {
        self.index.get(&id).map(|&pos| &self.questions[pos])
    }

    /// The `n` most recently created questions
    pub fn recent(&self, n: usize) -> &[Question] {
        &self.questions[..n.min(self.questions.len())]
    }

    /// Create a question and prepend it to the cache. The new record
    /// is always the newest, so the descending order is preserved.
    pub fn add_question(&mut self, draft: QuestionDraft) -> Result<Question> {
        let question = self.repository.create(draft)?;
        self.questions.insert(0, question.clone());
        self.reindex();
        Ok(question)
    }

    /// Update a question and replace the cached entry in place
    pub fn update_question(&mut self, id: Uuid, patch: &QuestionPatch) -> Result<Question> {
        let updated = self.repository.update(id, patch)?;
        if let Some(&pos) = self.index.get(&id) {
            self.questions[pos] = updated.clone();
        }
        Ok(updated)
    }

    /// Delete a question and drop it from the cache
    pub fn delete_question(&mut self, id: Uuid) -> Result<()> {
        self.repository.delete(id)?;
        if let Some(pos) = self.index.remove(&id) {
            self.questions.remove(pos);
            self.reindex();
        }
        Ok(())
    }

    pub fn stats(&self) -> DashboardStats {
        stats::dashboard_stats(&self.questions)
    }

    pub fn breakdown(&self) -> Vec<TopicBreakdown> {
        stats::topic_breakdown(&self.questions)
    }

    fn reindex(&mut self) {
        self.index = self
            .questions
            .iter()
            .enumerate()
            .map(|(pos, q)| (q.id, pos))
            .collect();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::questions::{Difficulty, QuestionStore, StorageError};
    use chrono::{Duration, Utc};
    use tempfile::TempDir;

    fn create_test_context() -> (QuestionContext, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let store = QuestionStore::new(temp_dir.path().to_path_buf());
        let context = QuestionContext::load(QuestionRepository::new(store)).unwrap();
        (context, temp_dir)
    }

    fn sample_draft(topic: &str) -> QuestionDraft {
        QuestionDraft {
            question: format!("Something about {}", topic),
            answer: None,
            topic: topic.to_string(),
            difficulty: Difficulty::Medium,
            confidence: 3,
        }
    }

    #[test]
    fn test_load_sorts_newest_first() {
        let temp_dir = TempDir::new().unwrap();
        let store = QuestionStore::new(temp_dir.path().to_path_buf());

        let now = Utc::now();
        let mut oldest = Question::new(
            "Oldest".to_string(),
            None,
            "A".to_string(),
            Difficulty::Easy,
            3,
        );
        oldest.created_at = now - Duration::hours(2);
        let mut middle = oldest.clone();
        middle.id = Uuid::new_v4();
        middle.question = "Middle".to_string();
        middle.created_at = now - Duration::hours(1);
        let mut newest = oldest.clone();
        newest.id = Uuid::new_v4();
        newest.question = "Newest".to_string();
        newest.created_at = now;

        // Stored out of order on purpose
        store
            .write(&[middle.clone(), newest.clone(), oldest.clone()])
            .unwrap();

        let context = QuestionContext::load(QuestionRepository::new(store)).unwrap();
        let titles: Vec<&str> = context
            .questions()
            .iter()
            .map(|q| q.question.as_str())
            .collect();
        assert_eq!(titles, vec!["Newest", "Middle", "Oldest"]);
        assert_eq!(context.get(oldest.id).unwrap().question, "Oldest");
    }

    #[test]
    fn test_add_question_prepends() {
        let (mut context, _temp) = create_test_context();

        context.add_question(sample_draft("Arrays")).unwrap();
        let second = context.add_question(sample_draft("Graphs")).unwrap();

        assert_eq!(context.questions().len(), 2);
        assert_eq!(context.questions()[0].id, second.id);
        assert_eq!(context.recent(1)[0].id, second.id);
    }

    #[test]
    fn test_update_question_replaces_cached_entry() {
        let (mut context, _temp) = create_test_context();

        let created = context.add_question(sample_draft("Arrays")).unwrap();
        let patch = QuestionPatch {
            confidence: Some(5),
            ..Default::default()
        };
        context.update_question(created.id, &patch).unwrap();

        let cached = context.get(created.id).unwrap();
        assert_eq!(cached.confidence, 5);
        assert_eq!(cached.created_at, created.created_at);
    }

    #[test]
    fn test_delete_question_drops_cached_entry() {
        let (mut context, _temp) = create_test_context();

        let first = context.add_question(sample_draft("Arrays")).unwrap();
        let second = context.add_question(sample_draft("Graphs")).unwrap();

        context.delete_question(second.id).unwrap();

        assert!(context.get(second.id).is_none());
        assert_eq!(context.questions().len(), 1);
        assert_eq!(context.get(first.id).unwrap().id, first.id);
    }

    #[test]
    fn test_failed_mutation_leaves_cache_unchanged() {
        let (mut context, _temp) = create_test_context();

        let created = context.add_question(sample_draft("Arrays")).unwrap();
        let before: Vec<Question> = context.questions().to_vec();

        let missing = Uuid::new_v4();
        let patch = QuestionPatch {
            confidence: Some(1),
            ..Default::default()
        };
        assert!(matches!(
            context.update_question(missing, &patch),
            Err(StorageError::NotFound(_))
        ));
        assert!(matches!(
            context.delete_question(missing),
            Err(StorageError::NotFound(_))
        ));

        assert_eq!(context.questions(), before.as_slice());
        assert_eq!(context.get(created.id).unwrap().id, created.id);
    }

    #[test]
    fn test_stats_reflect_cache() {
        let (mut context, _temp) = create_test_context();

        let mut draft = sample_draft("Arrays");
        draft.confidence = 1;
        context.add_question(draft).unwrap();
        context.add_question(sample_draft("Graphs")).unwrap();

        let stats = context.stats();
        assert_eq!(stats.total, 2);
        assert_eq!(stats.topic_count, 2);
        assert_eq!(stats.needs_revision, 1);

        let breakdown = context.breakdown();
        assert_eq!(breakdown.len(), 2);
    }
}
