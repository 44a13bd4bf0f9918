use anyhow::Result;

use crate::app::App;
use crate::render::{self, Color};
use crate::OutputFormat;

pub fn run(app: &App, format: &OutputFormat, use_color: bool) -> Result<()> {
    let stats = app.context.stats();

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&stats)?);
        }
        OutputFormat::Plain => {
            println!("Total questions:  {}", stats.total);
            println!("Topics:           {}", stats.topic_count);
            println!("Needs revision:   {}", stats.needs_revision);

            if !stats.topics.is_empty() {
                let shown: Vec<&str> = stats.topics.iter().take(3).map(|t| t.as_str()).collect();
                let more = stats.topics.len().saturating_sub(shown.len());
                let suffix = if more > 0 {
                    format!(" (+{} more)", more)
                } else {
                    String::new()
                };
                println!("                  {}{}", shown.join(", "), suffix);
            }

            let recent = app.context.recent(5);
            if !recent.is_empty() {
                println!();
                if use_color {
                    println!("{}Recent questions{}", Color::BOLD, Color::RESET);
                } else {
                    println!("Recent questions");
                }
                for q in recent {
                    println!(
                        "  {} [{}] {}",
                        q.created_at.format("%Y-%m-%d"),
                        q.topic,
                        render::truncate(&q.question, 50)
                    );
                }
            }
        }
    }

    Ok(())
}
