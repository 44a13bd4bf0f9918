use anyhow::{Context, Result};

use crate::app::App;
use crate::render;
use crate::OutputFormat;

pub fn run(app: &mut App, id: &str, format: &OutputFormat) -> Result<()> {
    let question = app.find_question(id)?;

    app.context
        .delete_question(question.id)
        .context("Failed to delete question")?;

    match format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "deleted": question.id.to_string(),
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Plain => {
            println!(
                "Deleted \"{}\" from topic \"{}\"",
                render::truncate(&question.question, 50),
                question.topic
            );
        }
    }

    Ok(())
}
