//! Shared components for CLI commands
//!
//! Logging setup, layered configuration loading and the common
//! read-then-summarize pipeline used by every subcommand.

use crate::app::services::aggregation::{SummaryEngine, SummaryReport};
use crate::cli::args::InputArgs;
use crate::cli::input::{is_blank, read_csv_input};
use crate::config::Config;
use crate::{Error, Result};
use indicatif::{ProgressBar, ProgressStyle};
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

/// Run statistics reported back to `main`
#[derive(Debug, Clone, Default)]
pub struct RunStats {
    /// Data rows read from the export
    pub rows_read: usize,
    /// Rows that counted towards the summary
    pub rows_included: usize,
    /// Wall-clock time spent reading and summarizing
    pub processing_time: Duration,
}

/// Set up structured logging on stderr
pub fn setup_logging(args: &InputArgs) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.get_log_level();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("workout_wrapped={}", log_level)));

    let init_result = if args.quiet {
        // Minimal logging for quiet mode
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .try_init()
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_timer(fmt::time::uptime())
                    .with_writer(std::io::stderr),
            )
            .try_init()
    };

    init_result
        .map_err(|e| Error::configuration(format!("Failed to initialize logging: {}", e)))?;

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}

/// Load configuration using the layered approach (defaults, file, CLI flags)
pub fn load_configuration(args: &InputArgs) -> Result<Config> {
    info!("Loading configuration");

    let default_config_path = if args.config_file.is_none() {
        Config::default_config_path().ok()
    } else {
        None
    };

    let config_file = match &args.config_file {
        Some(path) => Some(path.as_path()),
        None => default_config_path
            .as_ref()
            .filter(|path| path.exists())
            .map(|path| path.as_path()),
    };

    if let Some(config_path) = config_file {
        info!("Using config file: {}", config_path.display());
    } else {
        info!("No config file found, using defaults");
    }

    let config = apply_cli_overrides(Config::load_layered(config_file)?, args);
    config.validate()?;

    Ok(config)
}

/// Apply CLI argument overrides to configuration
pub fn apply_cli_overrides(mut config: Config, args: &InputArgs) -> Config {
    if let Some(year) = args.year {
        config = config.with_target_year(year);
    }
    if let Some(top) = args.top {
        config = config.with_top_exercise_count(top);
    }
    config
}

/// Read the export named by `args` and summarize it with `config`
///
/// Blank input is rejected before any aggregation runs.
pub async fn summarize_input(args: &InputArgs, config: &Config) -> Result<(SummaryReport, RunStats)> {
    let start_time = Instant::now();
    let spinner = create_spinner(args.quiet, "Reading workout log...");

    let csv = read_csv_input(&args.input).await?;
    if is_blank(&csv) {
        spinner.finish_and_clear();
        return Err(Error::EmptyInput);
    }

    spinner.set_message(format!(
        "Summarizing {}...",
        config.summary.target_year
    ));
    let engine = SummaryEngine::from_config(config);
    let report = engine.summarize(&csv)?;
    spinner.finish_and_clear();

    let stats = RunStats {
        rows_read: report.stats.total_rows,
        rows_included: report.stats.rows_included,
        processing_time: start_time.elapsed(),
    };

    info!("{}", report.stats.summary());
    if report.stats.invalid_dates > 0 {
        warn!(
            "{} rows had unreadable dates and were skipped",
            report.stats.invalid_dates
        );
    }

    Ok((report, stats))
}

/// Create a spinner on stderr, hidden in quiet mode
fn create_spinner(quiet: bool, message: &'static str) -> ProgressBar {
    if quiet {
        return ProgressBar::hidden();
    }

    let spinner = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.green} {msg}") {
        spinner.set_style(style);
    }
    spinner.set_message(message);
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::path::PathBuf;
    use tempfile::NamedTempFile;

    fn input_args(input: PathBuf) -> InputArgs {
        InputArgs {
            input,
            year: None,
            top: None,
            config_file: None,
            verbose: 0,
            quiet: true,
        }
    }

    #[test]
    fn test_cli_overrides_win_over_config() {
        let mut args = input_args(PathBuf::from("log.csv"));
        args.year = Some(2023);
        args.top = Some(2);

        let config = apply_cli_overrides(Config::default(), &args);

        assert_eq!(config.summary.target_year, 2023);
        assert_eq!(config.summary.top_exercise_count, 2);
    }

    #[test]
    fn test_explicit_config_file_is_loaded() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[summary]\ntarget_year = 2022\ntop_exercise_count = 3").unwrap();

        let mut args = input_args(PathBuf::from("log.csv"));
        args.config_file = Some(file.path().to_path_buf());
        args.top = Some(7);

        let config = load_configuration(&args).unwrap();

        assert_eq!(config.summary.target_year, 2022);
        assert_eq!(config.summary.top_exercise_count, 7);
    }

    #[tokio::test]
    async fn test_summarize_input_reports_row_counts() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            "Date,Weight,Reps,Duration,Exercise Name\n\
             2025-01-01 08:00:00,100,5,1h,Squat\n\
             2024-12-31 08:00:00,100,5,1h,Squat\n"
        )
        .unwrap();

        let args = input_args(file.path().to_path_buf());
        let (report, stats) = summarize_input(&args, &Config::default()).await.unwrap();

        assert_eq!(stats.rows_read, 2);
        assert_eq!(stats.rows_included, 1);
        assert_eq!(report.summary.total_pounds, 500.0);
    }

    #[tokio::test]
    async fn test_summarize_input_rejects_blank_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "  \n\n").unwrap();

        let args = input_args(file.path().to_path_buf());
        let result = summarize_input(&args, &Config::default()).await;

        assert!(matches!(result, Err(Error::EmptyInput)));
    }
}
