use anyhow::Result;

use devprep_lib::questions::Difficulty;
use devprep_lib::stats::{filter_questions, QuestionFilter};

use crate::app::App;
use crate::render::{self, Color};
use crate::OutputFormat;

pub fn run(
    app: &App,
    search: Option<String>,
    topic: Option<String>,
    difficulty: Option<Difficulty>,
    confidence: Option<i32>,
    format: &OutputFormat,
    use_color: bool,
) -> Result<()> {
    let filter = QuestionFilter {
        search,
        topic,
        difficulty,
        confidence,
    };
    let questions = filter_questions(app.context.questions(), &filter);

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&questions)?);
        }
        OutputFormat::Plain => {
            if questions.is_empty() {
                println!("No questions found.");
                return Ok(());
            }

            for q in &questions {
                let id = q.id.to_string();
                let short_id = &id[..8];
                let dots = render::confidence_dots(q.confidence);
                // Low-confidence questions get a revision marker
                let marker = match (q.needs_revision(), use_color) {
                    (true, true) => format!("{}!{}", Color::RED, Color::RESET),
                    (true, false) => "!".to_string(),
                    (false, _) => " ".to_string(),
                };

                if use_color {
                    println!(
                        "{}{}{} {} [{}] {:6} {}  {}",
                        Color::DIM,
                        short_id,
                        Color::RESET,
                        marker,
                        q.topic,
                        q.difficulty.to_string(),
                        dots,
                        render::truncate(&q.question, 60),
                    );
                } else {
                    println!(
                        "{} {} [{}] {:6} {}  {}",
                        short_id,
                        marker,
                        q.topic,
                        q.difficulty.to_string(),
                        dots,
                        render::truncate(&q.question, 60),
                    );
                }
            }

            println!("\n{} questions", questions.len());
        }
    }

    Ok(())
}
