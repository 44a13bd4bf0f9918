use anyhow::{bail, Context, Result};

use devprep_lib::questions::{Difficulty, QuestionPatch};

use crate::app::App;
use crate::OutputFormat;

#[allow(clippy::too_many_arguments)]
pub fn run(
    app: &mut App,
    id: &str,
    question: Option<String>,
    answer: Option<String>,
    topic: Option<String>,
    difficulty: Option<Difficulty>,
    confidence: Option<i32>,
    format: &OutputFormat,
) -> Result<()> {
    let existing = app.find_question(id)?;

    let patch = QuestionPatch {
        question,
        answer,
        topic,
        difficulty,
        confidence,
    };
    if patch.is_empty() {
        bail!("Nothing to change. Pass at least one of --question, --answer, --topic, --difficulty, --confidence");
    }

    let updated = app
        .context
        .update_question(existing.id, &patch)
        .context("Failed to update question")?;

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&updated)?);
        }
        OutputFormat::Plain => {
            println!(
                "Updated question {} (topic \"{}\", {}, confidence {}/5)",
                updated.id, updated.topic, updated.difficulty, updated.confidence
            );
        }
    }

    Ok(())
}
