mod json;
mod show;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::footer;
use crate::models::{config, schedule, DailyChallenge};

#[derive(Parser)]
#[command(name = "arena")]
#[command(about = "Python Learning Arena daily challenges", long_about = None)]
pub struct Cli {
    /// Challenge schedule to read instead of the configured one
    #[arg(long, global = true)]
    pub file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the daily challenge with the footer
    Show {
        /// Date to look up (YYYY-MM-DD), defaults to today
        #[arg(long)]
        date: Option<String>,
    },
    /// Print the daily challenge as JSON
    Json {
        /// Date to look up (YYYY-MM-DD), defaults to today
        #[arg(long)]
        date: Option<String>,
    },
    /// Print the footer
    Footer {
        /// Print the footer as an HTML element
        #[arg(long)]
        html: bool,
    },
}

pub fn run(cli: Cli) {
    match cli.command {
        None => show::show_challenge(cli.file, None),
        Some(Commands::Show { date }) => show::show_challenge(cli.file, date),
        Some(Commands::Json { date }) => json::print_challenge(cli.file, date),
        Some(Commands::Footer { html }) => {
            if html {
                println!("{}", footer::render_html());
            } else {
                footer::print();
            }
        }
    }
}

/// Loads the schedule and returns the looked-up date with its challenge, if any.
fn find_challenge(
    file: Option<PathBuf>,
    date: Option<String>,
) -> Result<(String, Option<DailyChallenge>), String> {
    let path = file.unwrap_or_else(|| config::load_config().challenges_file());
    let date = date.unwrap_or_else(schedule::today);

    let challenges = schedule::load(&path)?;
    let found = schedule::for_date(&challenges, &date).cloned();
    tracing::debug!(%date, found = found.is_some(), "looked up daily challenge");

    Ok((date, found))
}
