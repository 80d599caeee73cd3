//! Command implementations for the workout-wrapped CLI
//!
//! Each subcommand lives in its own module; shared setup such as logging
//! and configuration loading is in [`shared`].

pub mod shared;
pub mod story;
pub mod summarize;

pub use shared::RunStats;

use crate::Result;
use crate::cli::args::Commands;

/// Main command runner
///
/// Dispatches to the handler for the parsed subcommand:
/// - `summarize`: year-in-review summary as text, JSON or CSV
/// - `story`: the narrative story cards
pub async fn run(command: Commands) -> Result<RunStats> {
    match command {
        Commands::Summarize(summarize_args) => summarize::run_summarize(summarize_args).await,
        Commands::Story(story_args) => story::run_story(story_args).await,
    }
}
