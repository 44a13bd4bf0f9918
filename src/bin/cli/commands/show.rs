use anyhow::Result;

use crate::app::App;
use crate::render::{self, Color};
use crate::OutputFormat;

pub fn run(app: &App, id: &str, format: &OutputFormat, use_color: bool) -> Result<()> {
    let question = app.find_question(id)?;

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&question)?);
        }
        OutputFormat::Plain => {
            if use_color {
                println!("{}{}{}", Color::BOLD, question.question, Color::RESET);
            } else {
                println!("{}", question.question);
            }

            println!();
            println!("  Topic:      {}", question.topic);
            println!("  Difficulty: {}", question.difficulty);
            println!(
                "  Confidence: {} ({}/5)",
                render::confidence_dots(question.confidence),
                question.confidence
            );
            println!(
                "  Created:    {}",
                question.created_at.format("%Y-%m-%d %H:%M")
            );
            println!("  ID:         {}", question.id);

            println!();
            match question.answer.as_deref().filter(|a| !a.is_empty()) {
                Some(answer) => println!("{}", answer),
                None => {
                    if use_color {
                        println!("{}(no answer yet){}", Color::DIM, Color::RESET);
                    } else {
                        println!("(no answer yet)");
                    }
                }
            }
        }
    }

    Ok(())
}
