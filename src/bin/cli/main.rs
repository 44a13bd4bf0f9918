mod app;
mod commands;
mod render;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use devprep_lib::questions::Difficulty;

#[derive(Parser)]
#[command(name = "devprep", about = "Interview question tracker", version)]
struct Cli {
    /// Use a specific data directory (default: platform data dir)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, default_value = "plain")]
    format: OutputFormat,

    /// Disable ANSI colors
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Clone, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Plain,
    Json,
}

#[derive(Subcommand)]
enum Command {
    /// List questions, optionally filtered
    List {
        /// Case-insensitive text search over question, topic and answer
        #[arg(long)]
        search: Option<String>,
        /// Exact topic match
        #[arg(long)]
        topic: Option<String>,
        /// Filter by difficulty (easy, medium, hard)
        #[arg(long)]
        difficulty: Option<Difficulty>,
        /// Filter by exact confidence score
        #[arg(long, value_parser = clap::value_parser!(i32).range(1..=5))]
        confidence: Option<i32>,
    },

    /// Show a question in full
    Show {
        /// Question id (unique prefix accepted)
        id: String,
    },

    /// Add a new question
    Add {
        /// The question text
        question: String,
        /// Topic label
        #[arg(long)]
        topic: String,
        /// Difficulty (easy, medium, hard)
        #[arg(long)]
        difficulty: Difficulty,
        /// Confidence score 1-5
        #[arg(long, default_value = "3", value_parser = clap::value_parser!(i32).range(1..=5))]
        confidence: i32,
        /// Answer text (use "-" to read from stdin)
        #[arg(long)]
        answer: Option<String>,
    },

    /// Edit fields of an existing question
    Edit {
        /// Question id (unique prefix accepted)
        id: String,
        /// New question text
        #[arg(long)]
        question: Option<String>,
        /// New topic label
        #[arg(long)]
        topic: Option<String>,
        /// New difficulty (easy, medium, hard)
        #[arg(long)]
        difficulty: Option<Difficulty>,
        /// New confidence score 1-5
        #[arg(long, value_parser = clap::value_parser!(i32).range(1..=5))]
        confidence: Option<i32>,
        /// New answer text (use "-" to read from stdin)
        #[arg(long)]
        answer: Option<String>,
    },

    /// Delete a question
    Delete {
        /// Question id (unique prefix accepted)
        id: String,
    },

    /// Show dashboard statistics
    Stats,

    /// Show per-topic breakdown
    Topics,
}

/// Read content from stdin if piped, or resolve "-" as stdin
fn resolve_content(content: Option<String>) -> Option<String> {
    match content.as_deref() {
        Some("-") => {
            let mut buf = String::new();
            std::io::Read::read_to_string(&mut std::io::stdin(), &mut buf).ok();
            Some(buf.trim_end().to_string())
        }
        _ => content,
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let use_color = !cli.no_color && stdout_is_tty();

    match cli.command {
        Command::List {
            search,
            topic,
            difficulty,
            confidence,
        } => {
            let app = app::App::new(cli.data_dir)?;
            commands::list::run(
                &app,
                search,
                topic,
                difficulty,
                confidence,
                &cli.format,
                use_color,
            )?;
        }
        Command::Show { id } => {
            let app = app::App::new(cli.data_dir)?;
            commands::show::run(&app, &id, &cli.format, use_color)?;
        }
        Command::Add {
            question,
            topic,
            difficulty,
            confidence,
            answer,
        } => {
            let mut app = app::App::new(cli.data_dir)?;
            let answer = resolve_content(answer);
            commands::add::run(
                &mut app,
                question,
                answer,
                topic,
                difficulty,
                confidence,
                &cli.format,
            )?;
        }
        Command::Edit {
            id,
            question,
            topic,
            difficulty,
            confidence,
            answer,
        } => {
            let mut app = app::App::new(cli.data_dir)?;
            let answer = resolve_content(answer);
            commands::edit::run(
                &mut app,
                &id,
                question,
                answer,
                topic,
                difficulty,
                confidence,
                &cli.format,
            )?;
        }
        Command::Delete { id } => {
            let mut app = app::App::new(cli.data_dir)?;
            commands::delete::run(&mut app, &id, &cli.format)?;
        }
        Command::Stats => {
            let app = app::App::new(cli.data_dir)?;
            commands::stats::run(&app, &cli.format, use_color)?;
        }
        Command::Topics => {
            let app = app::App::new(cli.data_dir)?;
            commands::topics::run(&app, &cli.format, use_color)?;
        }
    }

    Ok(())
}

/// Check if stdout is a terminal (for color support)
fn stdout_is_tty() -> bool {
    unsafe { libc_isatty(1) != 0 }
}

extern "C" {
    #[link_name = "isatty"]
    fn libc_isatty(fd: i32) -> i32;
}
