use anyhow::Result;

use crate::app::App;
use crate::render;
use crate::OutputFormat;

pub fn run(app: &App, format: &OutputFormat, _use_color: bool) -> Result<()> {
    let breakdown = app.context.breakdown();

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&breakdown)?);
        }
        OutputFormat::Plain => {
            if breakdown.is_empty() {
                println!("No topics yet. Topics appear as you add questions.");
                return Ok(());
            }

            let max_name_len = breakdown
                .iter()
                .map(|t| t.name.chars().count())
                .max()
                .unwrap_or(5)
                .max(5);

            println!(
                "{:<width$} Count  Easy  Med  Hard  Confidence",
                "Topic",
                width = max_name_len + 1
            );
            println!(
                "{} {}",
                "\u{2500}".repeat(max_name_len + 1),
                "\u{2500}".repeat(34)
            );

            for topic in &breakdown {
                println!(
                    "{:<width$} {:>5}  {:>4}  {:>3}  {:>4}  {}",
                    topic.name,
                    topic.count,
                    topic.easy,
                    topic.medium,
                    topic.hard,
                    render::confidence_dots(topic.avg_confidence),
                    width = max_name_len + 1
                );
            }

            println!("\n{} topics total", breakdown.len());
        }
    }

    Ok(())
}
