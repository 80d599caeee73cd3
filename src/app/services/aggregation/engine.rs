//! Summary engine orchestration
//!
//! Wires the row parser to the year accumulator. Each call owns a fresh
//! accumulator, so one engine can be shared freely across threads.

use tracing::{debug, warn};

use super::accumulator::YearAccumulator;
use super::stats::SummaryReport;
use crate::app::models::Summary;
use crate::app::services::csv_row_parser::{RawRow, parse_rows};
use crate::config::{Config, SummaryConfig};
use crate::{Error, Result};

/// Year-in-review engine for workout CSV exports
///
/// The engine is a pure function of its input:
/// - one forward pass over rows, no row revisited
/// - rows outside the target year contribute nothing
/// - malformed fields degrade to zero instead of failing
#[derive(Debug, Clone, Default)]
pub struct SummaryEngine {
    config: SummaryConfig,
}

impl SummaryEngine {
    /// Create an engine from summary settings
    pub fn new(config: SummaryConfig) -> Self {
        Self { config }
    }

    /// Create an engine from the application configuration
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.summary.clone())
    }

    /// Create an engine for a target year with default settings
    pub fn for_year(target_year: i32) -> Self {
        Self::new(SummaryConfig::for_year(target_year))
    }

    /// Settings used by this engine
    pub fn config(&self) -> &SummaryConfig {
        &self.config
    }

    /// Summarize raw CSV text
    ///
    /// Fails only when the input is empty or whitespace; every row-level
    /// problem is absorbed and counted in the report's diagnostics.
    pub fn summarize(&self, csv: &str) -> Result<SummaryReport> {
        if csv.trim().is_empty() {
            return Err(Error::EmptyInput);
        }

        let rows = parse_rows(csv);
        let missing = rows.mapping().missing_columns();
        if !missing.is_empty() {
            debug!(
                "Header lacks columns {:?}; their values count as missing",
                missing.iter().map(|c| c.header_name()).collect::<Vec<_>>()
            );
        }

        let report = self.summarize_rows(rows);

        if report.stats.total_rows > 0 && report.stats.rows_included == 0 {
            warn!(
                "No rows dated in {} out of {} data rows",
                self.config.target_year, report.stats.total_rows
            );
        }

        Ok(report)
    }

    /// Summarize already-parsed rows
    pub fn summarize_rows<I>(&self, rows: I) -> SummaryReport
    where
        I: IntoIterator<Item = RawRow>,
    {
        let mut accumulator = YearAccumulator::new(&self.config);
        for row in rows {
            accumulator.add_row(&row);
        }

        let (summary, stats) = accumulator.finish();
        debug!("{}", stats.summary());

        SummaryReport::new(summary, stats)
    }
}

/// Summarize CSV text for the default target year
///
/// Convenience wrapper around [`SummaryEngine`] that skips the empty-input
/// check: empty text simply produces an empty summary.
pub fn summarize_csv(csv: &str) -> Summary {
    SummaryEngine::default()
        .summarize_rows(parse_rows(csv))
        .into_summary()
}
