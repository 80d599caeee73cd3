//! Row parser for workout log CSV exports
//!
//! This module splits raw CSV text into rows with named-field lookup. It is
//! permissive: it never fails on malformed content, and numeric
//! interpretation is deferred to the aggregation engine via the helpers in
//! [`field_parsers`].
//!
//! ## Architecture
//!
//! - [`column_mapping`] - Resolves recognized column positions from the header line
//! - [`parser`] - Lazy row iteration in input order
//! - [`field_parsers`] - Lenient numeric, date and duration parsing
//!
//! ## Limitations
//!
//! Fields are split on every comma. Quoted fields are not supported, so an
//! exercise name containing a literal comma shifts the remaining columns.
//!
//! ## Usage
//!
//! ```rust
//! use workout_wrapped::app::services::csv_row_parser::{Column, parse_rows};
//!
//! let csv = "Date,Exercise Name,Reps\n2025-01-02 07:30:00,Deadlift,5";
//! let rows: Vec<_> = parse_rows(csv).collect();
//!
//! assert_eq!(rows.len(), 1);
//! assert_eq!(rows[0].get(Column::ExerciseName), Some("Deadlift"));
//! assert_eq!(rows[0].get(Column::Weight), None);
//! ```

pub mod column_mapping;
pub mod field_parsers;
pub mod parser;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use column_mapping::{Column, ColumnMapping};
pub use parser::{CsvRows, RawRow, parse_rows};
