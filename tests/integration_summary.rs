//! Integration tests for the public summarization API
//!
//! These tests drive the library end to end with Strong-style exports:
//! configuration loading, aggregation, serialization and the story cards.

use std::io::Write;
use tempfile::NamedTempFile;
use workout_wrapped::{Config, Error, SummaryEngine, build_story, parse_rows, summarize_csv};

const STRONG_HEADER: &str = "Date,Workout Name,Duration,Exercise Name,Set Order,Weight,Reps,Distance,Seconds,Notes,Workout Notes,RPE";

/// A short Strong export mixing lifting, cardio, last year and a broken row
fn strong_export() -> String {
    [
        STRONG_HEADER,
        "2025-03-10 07:00:00,Leg Day,1h 5m,Squat,1,100,5,0,0,,,8",
        "2025-03-10 07:00:00,Leg Day,1h 5m,Squat,2,120,3,0,0,,,9",
        "2025-03-10 07:00:00,Leg Day,1h 5m,Bench,1,80,8,0,0,,,",
        "2025-03-11 18:00:00,Run,45m,Running,1,0,0,5000,1500,,,",
        "2024-12-31 10:00:00,Pull Day,2h,Deadlift,1,300,5,0,0,,,10",
        "not a date,Pull Day,2h,Deadlift,1,300,5,0,0,,,10",
    ]
    .join("\n")
}

/// Test the full year summary of a realistic export
///
/// Purpose: Validate every summary field against hand-computed values
/// Benefit: Catches regressions anywhere in parsing or aggregation
#[test]
fn test_strong_export_summary() {
    let report = SummaryEngine::default()
        .summarize(&strong_export())
        .expect("non-empty export should summarize");
    let summary = &report.summary;

    assert_eq!(summary.total_pounds, 1500.0);
    assert_eq!(summary.total_exercises, 4);
    assert_eq!(summary.total_minutes, 110);
    assert_eq!(summary.total_workout_days, 2);
    assert_eq!(summary.average_duration, 55.0);
    assert_eq!(summary.max_set_volume, 640.0);
    assert_eq!(summary.longest_streak, 2);
    assert_eq!(summary.average_reps_per_set, 4.0);
    assert_eq!(summary.most_frequent_exercise, "Squat");
    assert_eq!(summary.total_distance, 5000.0);
    assert_eq!(summary.average_rpe, 8.5);

    let top: Vec<_> = summary
        .top_exercises
        .iter()
        .map(|e| (e.exercise.as_str(), e.volume))
        .collect();
    assert_eq!(top, vec![("Squat", 860.0), ("Bench", 640.0), ("Running", 0.0)]);

    assert_eq!(summary.monthly_volume.len(), 1);
    assert_eq!(summary.monthly_volume["2025-03"], 1500.0);

    assert_eq!(report.stats.total_rows, 6);
    assert_eq!(report.stats.rows_included, 4);
    assert_eq!(report.stats.invalid_dates, 1);
    assert_eq!(report.stats.outside_target_year, 1);
    assert_eq!(report.stats.rpe_missing, 2);
}

/// Test the convenience entry point agrees with the engine
#[test]
fn test_summarize_csv_matches_engine() {
    let csv = strong_export();

    let direct = summarize_csv(&csv);
    let engine = SummaryEngine::default().summarize(&csv).unwrap().into_summary();

    assert_eq!(direct, engine);
}

/// Test that a configuration file changes the target year
///
/// Purpose: Verify TOML settings flow from disk into the engine
/// Benefit: Confirms the layered config reaches aggregation
#[test]
fn test_config_file_selects_year() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "[summary]\ntarget_year = 2024\ntop_exercise_count = 1").unwrap();

    let config = Config::load_layered(Some(file.path())).unwrap();
    config.validate().unwrap();
    let summary = SummaryEngine::from_config(&config)
        .summarize(&strong_export())
        .unwrap()
        .into_summary();

    assert_eq!(summary.total_pounds, 1500.0);
    assert_eq!(summary.total_workout_days, 1);
    assert_eq!(summary.top_exercises.len(), 1);
    assert_eq!(summary.top_exercises[0].exercise, "Deadlift");
    assert_eq!(summary.average_rpe, 10.0);
}

/// Test that the serialized summary uses the presentation field names
#[test]
fn test_summary_json_field_names() {
    let summary = summarize_csv(&strong_export());

    let value = serde_json::to_value(&summary).unwrap();
    let mut keys: Vec<_> = value.as_object().unwrap().keys().cloned().collect();
    keys.sort();

    assert_eq!(
        keys,
        vec![
            "averageDuration",
            "averageRPE",
            "averageRepsPerSet",
            "longestStreak",
            "maxSetVolume",
            "monthlyVolume",
            "mostFrequentExercise",
            "topExercises",
            "totalDistance",
            "totalExercises",
            "totalMinutes",
            "totalPounds",
            "totalWorkoutDays",
        ]
    );
    assert_eq!(value["topExercises"][0]["exercise"], "Squat");
    assert_eq!(value["monthlyVolume"]["2025-03"], 1500.0);
}

/// Test that row parsing exposes every recognized column
#[test]
fn test_parse_rows_public_api() {
    let csv = strong_export();
    let rows: Vec<_> = parse_rows(&csv).collect();

    assert_eq!(rows.len(), 6);
    assert_eq!(rows[0].line_number, 2);
    assert_eq!(rows[0].get(workout_wrapped::Column::ExerciseName), Some("Squat"));
    assert_eq!(rows[3].get(workout_wrapped::Column::Distance), Some("5000"));
    assert_eq!(rows[3].get(workout_wrapped::Column::Rpe), Some(""));
}

/// Test the story built from a real summary
#[test]
fn test_story_from_export() {
    let summary = summarize_csv(&strong_export());

    let cards = build_story(&summary, 2025);

    let intro = cards.iter().find(|c| c.key == "intro").unwrap();
    assert_eq!(intro.value.as_deref(), Some("2 days"));
    assert!(cards.iter().any(|c| c.key == "distance"));
    assert_eq!(cards.iter().filter(|c| c.key.starts_with("top-") && c.key != "top-title").count(), 3);
    assert_eq!(cards.last().unwrap().key, "badge");
}

/// Test that empty input is an error for the engine but not for the wrapper
#[test]
fn test_empty_input_handling() {
    assert!(matches!(
        SummaryEngine::default().summarize(" \n "),
        Err(Error::EmptyInput)
    ));

    let summary = summarize_csv("");
    assert_eq!(summary.total_exercises, 0);
    assert_eq!(summary.most_frequent_exercise, "N/A");
    assert!(summary.top_exercises.is_empty());
}
