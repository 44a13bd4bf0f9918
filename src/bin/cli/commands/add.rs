use anyhow::{Context, Result};

use devprep_lib::questions::{Difficulty, QuestionDraft};

use crate::app::App;
use crate::OutputFormat;

pub fn run(
    app: &mut App,
    question: String,
    answer: Option<String>,
    topic: String,
    difficulty: Difficulty,
    confidence: i32,
    format: &OutputFormat,
) -> Result<()> {
    let draft = QuestionDraft {
        question,
        answer,
        topic,
        difficulty,
        confidence,
    };

    let created = app
        .context
        .add_question(draft)
        .context("Failed to create question")?;

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&created)?);
        }
        OutputFormat::Plain => {
            println!(
                "Created question in topic \"{}\" ({}, confidence {}/5)",
                created.topic, created.difficulty, created.confidence
            );
            println!("  ID: {}", created.id);
        }
    }

    Ok(())
}
