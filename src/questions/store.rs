//! Durable storage slot for the question collection
//!
//! One JSON file holds the entire collection:
//! ```text
//! {data_dir}/questions.json   # Array of all questions
//! ```
//! There is no partial-update primitive; every operation reads or
//! overwrites the whole array.

use std::fs;
use std::path::PathBuf;

use thiserror::Error;
use uuid::Uuid;

use super::models::Question;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Question not found: {0}")]
    NotFound(Uuid),

    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Confidence must be between 1 and 5, got {0}")]
    ConfidenceOutOfRange(i32),

    #[error("Data directory not found")]
    DataDirNotFound,
}

pub type Result<T> = std::result::Result<T, StorageError>;

const QUESTIONS_FILE: &str = "questions.json";

/// Whole-collection persistence slot backed by a single JSON file
pub struct QuestionStore {
    data_dir: PathBuf,
}

impl QuestionStore {
    pub fn new(data_dir: PathBuf) -> Self {
        Self { data_dir }
    }

    /// Get the default data directory
    pub fn default_data_dir() -> Result<PathBuf> {
        dirs::data_local_dir()
            .map(|p| p.join("devprep"))
            .ok_or(StorageError::DataDirNotFound)
    }

    fn questions_path(&self) -> PathBuf {
        self.data_dir.join(QUESTIONS_FILE)
    }

    /// Read the full collection. A missing file is an empty collection;
    /// malformed JSON is surfaced as an error, never silently repaired.
    pub fn read(&self) -> Result<Vec<Question>> {
        let path = self.questions_path();
        if !path.exists() {
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&path)?;
        let questions: Vec<Question> = serde_json::from_str(&content)?;
        Ok(questions)
    }

    /// Overwrite the full collection
    pub fn write(&self, questions: &[Question]) -> Result<()> {
        fs::create_dir_all(&self.data_dir)?;
        let json = serde_json::to_string_pretty(questions)?;
        fs::write(self.questions_path(), json)?;
        Ok(())
    }
}
