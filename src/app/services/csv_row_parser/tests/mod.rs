//! Test utilities for the workout CSV row parser
//!
//! Shared fixtures used across the parser test modules.

use csv::StringRecord;


/// Header with every recognized column, in the order a typical export uses
pub const FULL_HEADER: &str = "Date,Workout Name,Duration,Exercise Name,Set Order,Weight,Reps,Distance,Seconds,Notes,Workout Notes,RPE";

/// Build a header record from comma-separated column names
pub fn header_record(line: &str) -> StringRecord {
    line.split(',').collect()
}

/// Helper to create a complete workout CSV export
pub fn create_test_workout_csv() -> String {
    format!(
        "{}\n\
         2025-01-06 07:02:11,Push Day,1h 5m,Bench Press (Barbell),1,135,8,0,0,,,7\n\
         2025-01-06 07:02:11,Push Day,1h 5m,Bench Press (Barbell),2,155,6,0,0,,,8.5\n\
         2025-01-07 18:30:00,Cardio,32m,Running,1,0,0,5000,1920,,,\n\
         2025-01-09 06:45:00,Legs,1h,Squat (Barbell),1,225,5,0,0,,,9",
        FULL_HEADER
    )
}

/// Helper to create minimal CSV content with only the columns the engine needs
pub fn create_minimal_workout_csv() -> String {
    "Date,Weight,Reps,Duration,Exercise Name,Distance,RPE\n\
     2025-02-01,100,10,1h0m,Deadlift,0,8"
        .to_string()
}
