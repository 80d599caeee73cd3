//! Application constants for Workout Wrapped
//!
//! This module contains the recognized CSV column names, sentinel labels,
//! default values and formats used throughout the application.

// =============================================================================
// CSV Column Names
// =============================================================================

/// Recognized column headers in workout CSV exports (case-sensitive, exact match)
pub mod columns {
    pub const DATE: &str = "Date";
    pub const WEIGHT: &str = "Weight";
    pub const REPS: &str = "Reps";
    pub const DURATION: &str = "Duration";
    pub const EXERCISE_NAME: &str = "Exercise Name";
    pub const DISTANCE: &str = "Distance";
    pub const RPE: &str = "RPE";
}

/// Field delimiter for workout CSV files (quote characters are read literally)
pub const CSV_DELIMITER: u8 = b',';

// =============================================================================
// Aggregation Defaults
// =============================================================================

/// Calendar year summarized when none is configured
pub const DEFAULT_TARGET_YEAR: i32 = 2025;

/// Number of exercises reported in the volume ranking
pub const DEFAULT_TOP_EXERCISE_COUNT: usize = 5;

/// Exercise name used when a row has no exercise name
pub const UNKNOWN_EXERCISE_LABEL: &str = "Unknown";

/// Reported as the most frequent exercise when no rows were included
pub const NO_EXERCISE_LABEL: &str = "N/A";

/// Accepted range for a configured target year
pub const MIN_TARGET_YEAR: i32 = 1900;
pub const MAX_TARGET_YEAR: i32 = 9999;

// =============================================================================
// Date and Duration Formats
// =============================================================================

/// Date-time layouts accepted for the Date column, tried in order
pub const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
];

/// Date-time layout with an explicit numeric offset (e.g. `+0000`)
pub const DATETIME_WITH_OFFSET_FORMAT: &str = "%Y-%m-%d %H:%M:%S %z";

/// Date-only layout for the Date column
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Key format for monthly volume buckets (zero-padded `YYYY-MM`)
pub const MONTH_KEY_FORMAT: &str = "%Y-%m";

/// Minutes per hour for duration conversion
pub const MINUTES_PER_HOUR: u64 = 60;

// =============================================================================
// Configuration and Reporting
// =============================================================================

/// Application directory name under the user's config directory
pub const CONFIG_DIR_NAME: &str = "workout-wrapped";

/// Configuration file name
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Width in characters of the longest bar in the monthly volume chart
pub const DEFAULT_CHART_WIDTH: usize = 40;

/// Path argument that selects standard input instead of a file
pub const STDIN_PATH: &str = "-";

/// Log level for different operation types
pub const LOG_LEVEL_INFO: &str = "info";
pub const LOG_LEVEL_WARN: &str = "warn";
