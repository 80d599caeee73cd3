//! Workout Wrapped Library
//!
//! A Rust library for turning a year of set-by-set workout logs (CSV exports
//! from strength-training apps) into a "year in review" summary.
//!
//! This library provides tools for:
//! - Parsing workout CSV exports with header-indexed column lookup
//! - Aggregating a target year of sets in a single forward pass
//! - Deriving streaks, per-exercise rankings, time spent and intensity measures
//! - Building the narrative story cards shown in a year-in-review
//! - Diagnostics for rows that were skipped or defaulted during aggregation
//!
//! ## Quick start
//!
//! ```rust
//! use workout_wrapped::summarize_csv;
//!
//! let csv = "Date,Weight,Reps,Duration,Exercise Name,Distance,RPE\n\
//!            2025-03-01 08:00:00,100,10,1h0m,Squat,0,8\n\
//!            2025-03-02 08:00:00,100,10,1h0m,Squat,0,8";
//!
//! let summary = summarize_csv(csv);
//! assert_eq!(summary.total_pounds, 2000.0);
//! assert_eq!(summary.longest_streak, 2);
//! ```

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod aggregation;
        pub mod csv_row_parser;
        pub mod story;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
    pub mod input;
}

// Re-export commonly used types
pub use app::models::{ExerciseVolume, StoryCard, Summary};
pub use app::services::aggregation::{
    AggregationStats, SummaryEngine, SummaryReport, summarize_csv,
};
pub use app::services::csv_row_parser::{Column, parse_rows};
pub use app::services::story::build_story;
pub use config::Config;

/// Result type alias for the workout summary library
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for workout summary operations
///
/// Row-level problems never surface here: bad dates, non-numeric fields and
/// absent columns are neutralized during aggregation.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// No CSV text was provided
    #[error("No workout data provided: the CSV input is empty")]
    EmptyInput,

    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Data validation error
    #[error("Data validation error: {message}")]
    DataValidation { message: String },

    /// Processing interrupted
    #[error("Processing interrupted: {reason}")]
    ProcessingInterrupted { reason: String },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a data validation error
    pub fn data_validation(message: impl Into<String>) -> Self {
        Self::DataValidation {
            message: message.into(),
        }
    }

    /// Create a processing interrupted error
    pub fn processing_interrupted(reason: impl Into<String>) -> Self {
        Self::ProcessingInterrupted {
            reason: reason.into(),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            Error::EmptyInput.to_string(),
            "No workout data provided: the CSV input is empty"
        );
        assert_eq!(
            Error::configuration("bad year").to_string(),
            "Configuration error: bad year"
        );
        assert_eq!(
            Error::processing_interrupted("ctrl-c").to_string(),
            "Processing interrupted: ctrl-c"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let error: Error = io.into();
        assert!(matches!(error, Error::Io { .. }));
        assert!(std::error::Error::source(&error).is_some());
    }
}
