//! Configuration management and validation.
//!
//! Provides configuration structures for the aggregation engine and the
//! CLI report, with layered loading: built-in defaults, an optional TOML
//! file, then command-line overrides.

use crate::constants::{
    CONFIG_DIR_NAME, CONFIG_FILE_NAME, DEFAULT_CHART_WIDTH, DEFAULT_TARGET_YEAR,
    DEFAULT_TOP_EXERCISE_COUNT, MAX_TARGET_YEAR, MIN_TARGET_YEAR, NO_EXERCISE_LABEL,
    UNKNOWN_EXERCISE_LABEL,
};
use crate::{Error, Result};
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Top-level application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Aggregation engine settings
    pub summary: SummaryConfig,

    /// CLI report settings
    pub report: ReportConfig,
}

/// Settings that shape the computed summary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SummaryConfig {
    /// Only rows dated in this calendar year are aggregated
    pub target_year: i32,

    /// Length of the top-exercise ranking
    pub top_exercise_count: usize,

    /// Name given to rows without an exercise name
    pub unknown_exercise_label: String,

    /// Most frequent exercise reported when nothing was logged
    pub no_exercise_label: String,
}

/// Settings for the human-readable report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Width of the longest monthly volume bar
    pub chart_width: usize,

    /// Always include skipped/defaulted row counts
    pub show_diagnostics: bool,
}

impl Default for SummaryConfig {
    fn default() -> Self {
        Self {
            target_year: DEFAULT_TARGET_YEAR,
            top_exercise_count: DEFAULT_TOP_EXERCISE_COUNT,
            unknown_exercise_label: UNKNOWN_EXERCISE_LABEL.to_string(),
            no_exercise_label: NO_EXERCISE_LABEL.to_string(),
        }
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            chart_width: DEFAULT_CHART_WIDTH,
            show_diagnostics: false,
        }
    }
}

impl SummaryConfig {
    /// Summary settings for a specific year, everything else at defaults
    pub fn for_year(target_year: i32) -> Self {
        Self {
            target_year,
            ..Default::default()
        }
    }
}

impl Config {
    /// Default config file location (`<config dir>/workout-wrapped/config.toml`)
    pub fn default_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| Error::configuration("Could not determine user config directory"))?;

        Ok(config_dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;

        Ok(config)
    }

    /// Load configuration with layering: defaults, then the file if one is given
    pub fn load_layered(config_file: Option<&Path>) -> Result<Self> {
        let config = match config_file {
            Some(path) => {
                debug!("Loading configuration from {}", path.display());
                Self::from_file(path).map_err(|e| Error::configuration(format!("{:#}", e)))?
            }
            None => Self::default(),
        };

        Ok(config)
    }

    /// Apply a target year override
    pub fn with_target_year(mut self, year: i32) -> Self {
        self.summary.target_year = year;
        self
    }

    /// Apply a top-exercise count override
    pub fn with_top_exercise_count(mut self, count: usize) -> Self {
        self.summary.top_exercise_count = count;
        self
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        let year = self.summary.target_year;
        if !(MIN_TARGET_YEAR..=MAX_TARGET_YEAR).contains(&year) {
            return Err(Error::configuration(format!(
                "Target year {} is outside the supported range {}-{}",
                year, MIN_TARGET_YEAR, MAX_TARGET_YEAR
            )));
        }

        if self.summary.top_exercise_count == 0 {
            return Err(Error::configuration(
                "Top exercise count must be greater than 0",
            ));
        }

        if self.report.chart_width == 0 {
            return Err(Error::configuration("Chart width must be greater than 0"));
        }

        Ok(())
    }
}
