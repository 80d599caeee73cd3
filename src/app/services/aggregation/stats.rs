//! Aggregation diagnostics and result structures
//!
//! This module provides types for tracking how many rows were included,
//! skipped or defaulted during a summarization run, and bundles them with
//! the resulting [`Summary`].

use serde::{Deserialize, Serialize};

use crate::app::models::Summary;

/// Counts of rows skipped or defaulted during aggregation
///
/// These counts are observational only; they never change the summary.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregationStats {
    /// Total number of data rows encountered
    pub total_rows: usize,

    /// Rows dated in the target year
    pub rows_included: usize,

    /// Rows whose Date could not be parsed
    pub invalid_dates: usize,

    /// Rows dated in another year
    pub outside_target_year: usize,

    /// Included rows whose weight defaulted to zero
    pub weight_defaulted: usize,

    /// Included rows whose reps defaulted to zero
    pub reps_defaulted: usize,

    /// Included rows whose distance defaulted to zero
    pub distance_defaulted: usize,

    /// Included rows without a usable RPE
    pub rpe_missing: usize,

    /// Included rows without an exercise name
    pub unnamed_exercises: usize,

    /// Session timestamps whose duration was overwritten by a later row
    pub durations_overwritten: usize,
}

impl AggregationStats {
    /// Create new empty statistics
    pub fn new() -> Self {
        Self::default()
    }

    /// Rows excluded from every accumulator
    pub fn rows_skipped(&self) -> usize {
        self.invalid_dates + self.outside_target_year
    }

    /// Calculate inclusion rate as a percentage
    pub fn inclusion_rate(&self) -> f64 {
        if self.total_rows == 0 {
            0.0
        } else {
            (self.rows_included as f64 / self.total_rows as f64) * 100.0
        }
    }

    /// Whether any included row had a field replaced by a default
    pub fn has_defaulted_fields(&self) -> bool {
        self.weight_defaulted > 0
            || self.reps_defaulted > 0
            || self.distance_defaulted > 0
            || self.unnamed_exercises > 0
    }

    /// Get summary of aggregation diagnostics
    pub fn summary(&self) -> String {
        format!(
            "Aggregation Summary: {} of {} rows included ({:.1}%) | \
             Invalid dates: {} | Other years: {} | \
             Defaulted weight: {} | Defaulted reps: {} | Missing RPE: {}",
            self.rows_included,
            self.total_rows,
            self.inclusion_rate(),
            self.invalid_dates,
            self.outside_target_year,
            self.weight_defaulted,
            self.reps_defaulted,
            self.rpe_missing
        )
    }
}

/// Result of a summarization run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryReport {
    /// Year-in-review statistics
    pub summary: Summary,

    /// Row-level diagnostics
    pub stats: AggregationStats,
}

impl SummaryReport {
    /// Create a new summary report
    pub fn new(summary: Summary, stats: AggregationStats) -> Self {
        Self { summary, stats }
    }

    /// Take the summary, dropping diagnostics
    pub fn into_summary(self) -> Summary {
        self.summary
    }
}
