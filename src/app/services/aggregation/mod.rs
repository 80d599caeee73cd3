//! Aggregation engine for workout summaries
//!
//! This module turns parsed workout rows into a year-in-review [`Summary`]
//! in one forward pass, then derives streaks, rankings and averages.
//!
//! ## Architecture
//!
//! - [`engine`] - Entry points and orchestration
//! - [`accumulator`] - Per-call running totals and keyed tallies
//! - [`derived`] - Streak, duration and average calculations
//! - [`stats`] - Diagnostics and result structures
//!
//! ## Usage
//!
//! ```rust
//! use workout_wrapped::app::services::aggregation::SummaryEngine;
//!
//! let csv = "Date,Weight,Reps,Exercise Name\n\
//!            2024-06-01 09:00:00,60,5,Row\n\
//!            2025-06-01 09:00:00,80,5,Row";
//!
//! let report = SummaryEngine::for_year(2024).summarize(csv)?;
//!
//! assert_eq!(report.summary.total_pounds, 300.0);
//! assert_eq!(report.stats.outside_target_year, 1);
//! # Ok::<(), workout_wrapped::Error>(())
//! ```
//!
//! [`Summary`]: crate::app::models::Summary

pub mod accumulator;
pub mod derived;
pub mod engine;
pub mod stats;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use engine::{SummaryEngine, summarize_csv};
pub use stats::{AggregationStats, SummaryReport};
