//! Command-line argument definitions for Workout Wrapped
//!
//! This module defines the CLI interface using the clap derive API.

use crate::constants::{
    LOG_LEVEL_INFO, LOG_LEVEL_WARN, MAX_TARGET_YEAR, MIN_TARGET_YEAR, STDIN_PATH,
};
use crate::{Error, Result};
use clap::{Args as ClapArgs, Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};

/// CLI arguments for the workout year-in-review generator
///
/// Reads a set-by-set workout CSV export and reports volume, streaks,
/// favourite lifts and intensity for one calendar year.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "workout-wrapped",
    version,
    about = "Turn a year of workout logs into a year-in-review summary",
    long_about = "Reads a workout CSV export (one row per logged set) and produces a year-in-review \
                  summary: total volume, workout days, longest streak, top exercises by volume, \
                  time spent and average intensity. Output as a readable story, JSON or CSV."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Summarize a workout CSV export (main command)
    Summarize(SummarizeArgs),
    /// Print the year-in-review story cards for a workout CSV export
    Story(StoryArgs),
}

/// Input and logging options shared by every command
#[derive(Debug, Clone, ClapArgs)]
pub struct InputArgs {
    /// Workout CSV export to read
    ///
    /// Use `-` to read from standard input. The file must contain a header
    /// line; recognized columns are Date, Weight, Reps, Duration,
    /// Exercise Name, Distance and RPE.
    #[arg(value_name = "FILE")]
    pub input: PathBuf,

    /// Calendar year to summarize
    ///
    /// Rows dated in any other year are ignored entirely.
    /// Defaults to the configured target year (2025 unless overridden).
    #[arg(
        short = 'y',
        long = "year",
        value_name = "YEAR",
        help = "Calendar year to summarize"
    )]
    pub year: Option<i32>,

    /// Number of exercises in the top-volume ranking
    #[arg(
        short = 't',
        long = "top",
        value_name = "COUNT",
        help = "Number of exercises in the top-volume ranking"
    )]
    pub top: Option<usize>,

    /// Path to configuration file
    ///
    /// TOML configuration file for advanced settings. If not specified,
    /// looks for <config dir>/workout-wrapped/config.toml
    #[arg(
        short = 'c',
        long = "config",
        value_name = "FILE",
        help = "Path to configuration file (TOML format)"
    )]
    pub config_file: Option<PathBuf>,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output (quiet mode)
    ///
    /// Only show errors. Overrides verbose settings.
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress log output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

/// Arguments for the summarize command
#[derive(Debug, Clone, Parser)]
pub struct SummarizeArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Output format for the summary
    #[arg(
        long = "output-format",
        value_enum,
        default_value = "human",
        help = "Output format for results"
    )]
    pub output_format: OutputFormat,

    /// Include counts of skipped and defaulted rows
    #[arg(
        long = "diagnostics",
        help = "Include counts of skipped and defaulted rows"
    )]
    pub diagnostics: bool,
}

/// Arguments for the story command
#[derive(Debug, Clone, Parser)]
pub struct StoryArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Emit the cards as JSON instead of text
    #[arg(long = "json", help = "Emit the story cards as JSON")]
    pub json: bool,
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON format for scripting
    Json,
    /// CSV format for data analysis
    Csv,
}

impl InputArgs {
    /// Validate the shared arguments for consistency
    pub fn validate(&self) -> Result<()> {
        if !self.reads_stdin() {
            if !self.input.exists() {
                return Err(Error::configuration(format!(
                    "Input file does not exist: {}",
                    self.input.display()
                )));
            }

            if !self.input.is_file() {
                return Err(Error::configuration(format!(
                    "Input path is not a file: {}",
                    self.input.display()
                )));
            }
        }

        if let Some(year) = self.year
            && !(MIN_TARGET_YEAR..=MAX_TARGET_YEAR).contains(&year)
        {
            return Err(Error::configuration(format!(
                "Year must be between {} and {}",
                MIN_TARGET_YEAR, MAX_TARGET_YEAR
            )));
        }

        if self.top == Some(0) {
            return Err(Error::configuration(
                "Top exercise count must be greater than 0".to_string(),
            ));
        }

        if let Some(config_file) = &self.config_file
            && !config_file.exists()
        {
            return Err(Error::configuration(format!(
                "Config file does not exist: {}",
                config_file.display()
            )));
        }

        Ok(())
    }

    /// Whether the input should be read from standard input
    pub fn reads_stdin(&self) -> bool {
        self.input == Path::new(STDIN_PATH)
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => LOG_LEVEL_WARN,
                1 => LOG_LEVEL_INFO,
                2 => "debug",
                _ => "trace",
            }
        }
    }
}
