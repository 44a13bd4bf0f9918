use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use uuid::Uuid;

use devprep_lib::context::QuestionContext;
use devprep_lib::questions::{Question, QuestionRepository, QuestionStore};

/// Shared application state for CLI commands
pub struct App {
    pub context: QuestionContext,
}

impl App {
    /// Initialize from the given data directory, or the default one
    pub fn new(data_dir: Option<PathBuf>) -> Result<Self> {
        let data_dir = match data_dir {
            Some(dir) => dir,
            None => QuestionStore::default_data_dir().context("Failed to get data directory")?,
        };

        let store = QuestionStore::new(data_dir);
        let context = QuestionContext::load(QuestionRepository::new(store))
            .context("Failed to load questions")?;

        Ok(Self { context })
    }

    /// Find a question by full id or unique id prefix
    pub fn find_question(&self, id: &str) -> Result<Question> {
        if let Ok(parsed) = Uuid::parse_str(id) {
            if let Some(q) = self.context.get(parsed) {
                return Ok(q.clone());
            }
            bail!("No question with id {}", parsed);
        }

        let matches: Vec<&Question> = self
            .context
            .questions()
            .iter()
            .filter(|q| q.id.to_string().starts_with(&id.to_lowercase()))
            .collect();

        match matches.len() {
            0 => bail!("No question matching id '{}'", id),
            1 => Ok(matches[0].clone()),
            _ => bail!(
                "Ambiguous id '{}'. Matches:\n{}",
                id,
                matches
                    .iter()
                    .map(|q| format!("  {} - {}", q.id, q.question))
                    .collect::<Vec<_>>()
                    .join("\n")
            ),
        }
    }
}
