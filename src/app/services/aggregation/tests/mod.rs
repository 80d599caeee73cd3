//! Test utilities for the aggregation engine
//!
//! Helpers for building workout CSV text row by row.


/// Header with every recognized column
pub const HEADER: &str = "Date,Weight,Reps,Duration,Exercise Name,Distance,RPE";

/// Build a CSV document from the standard header and the given data lines
pub fn csv_with_rows<S: AsRef<str>>(rows: &[S]) -> String {
    let mut csv = HEADER.to_string();
    for row in rows {
        csv.push('\n');
        csv.push_str(row.as_ref());
    }
    csv
}

/// Format one data line in the standard header's column order
pub fn set_row(
    date: &str,
    weight: &str,
    reps: &str,
    duration: &str,
    exercise: &str,
    distance: &str,
    rpe: &str,
) -> String {
    format!(
        "{},{},{},{},{},{},{}",
        date, weight, reps, duration, exercise, distance, rpe
    )
}
