//! Summarize command implementation
//!
//! Reads a workout export, aggregates the target year and prints the result
//! as a human-readable report, JSON or CSV.

use super::shared::{RunStats, load_configuration, setup_logging, summarize_input};
use crate::app::models::Summary;
use crate::app::services::aggregation::SummaryReport;
use crate::cli::args::{OutputFormat, SummarizeArgs};
use crate::config::Config;
use crate::constants::CSV_DELIMITER;
use crate::{Error, Result};
use colored::Colorize;
use indicatif::HumanDuration;
use tracing::info;

const BAR_CHAR: char = '█';

/// Run the summarize command
pub async fn run_summarize(args: SummarizeArgs) -> Result<RunStats> {
    setup_logging(&args.input)?;
    args.input.validate()?;

    info!("Starting workout summary");
    let config = load_configuration(&args.input)?;
    let (report, stats) = summarize_input(&args.input, &config).await?;

    let show_diagnostics = args.diagnostics || config.report.show_diagnostics;
    let output = match args.output_format {
        OutputFormat::Human => render_human(&report, &config, &stats, show_diagnostics),
        OutputFormat::Json => render_json(&report, &config, show_diagnostics)?,
        OutputFormat::Csv => render_csv(&report, show_diagnostics)?,
    };
    print!("{}", output);

    Ok(stats)
}

/// Render the human-readable year-in-review report
pub fn render_human(
    report: &SummaryReport,
    config: &Config,
    run_stats: &RunStats,
    show_diagnostics: bool,
) -> String {
    let summary = &report.summary;
    let year = config.summary.target_year;
    let mut out = Vec::new();

    out.push(String::new());
    out.push(format!("🏋️  Workout Wrapped {}", year).bold().to_string());
    out.push("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━".to_string());

    if !summary.has_workouts() {
        out.push(
            format!("No workouts logged in {}.", year)
                .yellow()
                .to_string(),
        );
    } else {
        out.push("📊 Volume:".cyan().to_string());
        out.push(format!("   • Total weight moved: {:.0} lbs", summary.total_pounds));
        out.push(format!("   • Heaviest set volume: {} lbs", summary.max_set_volume));
        out.push(format!("   • Sets logged: {}", summary.total_exercises));
        out.push(format!(
            "   • Avg reps per set: {:.1}",
            summary.average_reps_per_set
        ));
        out.push(format!("   • Avg RPE: {:.1}", summary.average_rpe));
        if summary.total_distance > 0.0 {
            out.push(format!(
                "   • Total distance: {:.0} meters",
                summary.total_distance
            ));
        }

        out.push(String::new());
        out.push("📅 Consistency:".cyan().to_string());
        out.push(format!("   • Workout days: {}", summary.total_workout_days));
        out.push(format!("   • Longest streak: {} days", summary.longest_streak));
        out.push(format!("   • Time trained: {} minutes", summary.total_minutes));
        out.push(format!(
            "   • Avg workout length: {:.1} min",
            summary.average_duration
        ));

        out.push(String::new());
        out.push("🏆 Top exercises:".cyan().to_string());
        for (rank, entry) in summary.top_exercises.iter().enumerate() {
            out.push(format!(
                "   {}. {}: {:.0} lbs",
                rank + 1,
                entry.exercise.green(),
                entry.volume
            ));
        }
        out.push(format!(
            "   Most frequent: {}",
            summary.most_frequent_exercise
        ));

        out.push(String::new());
        out.push("📈 Monthly volume:".cyan().to_string());
        for line in monthly_chart(summary, config.report.chart_width) {
            out.push(format!("   {}", line));
        }
        if let Some((month, volume)) = summary.peak_month() {
            out.push(format!("   Peak month: {} ({:.0} lbs)", month, volume));
        }
    }

    if show_diagnostics {
        let stats = &report.stats;
        out.push(String::new());
        out.push("🔍 Diagnostics:".cyan().to_string());
        out.push(format!("   • {}", stats.summary()));
        if stats.durations_overwritten > 0 {
            out.push(format!(
                "   • Session durations overwritten: {}",
                stats.durations_overwritten
            ));
        }
        if stats.unnamed_exercises > 0 {
            out.push(format!(
                "   • Sets without an exercise name: {}",
                stats.unnamed_exercises
            ));
        }
        out.push(format!(
            "   • Processing time: {}",
            HumanDuration(run_stats.processing_time)
        ));
    }

    out.push(String::new());
    out.join("\n")
}

/// Text bar chart of monthly volume, one line per month
///
/// Bars are scaled so the peak month spans `width` characters.
pub fn monthly_chart(summary: &Summary, width: usize) -> Vec<String> {
    let (labels, values) = summary.monthly_series();
    let peak = values.iter().fold(0.0_f64, |acc, &volume| acc.max(volume));

    labels
        .iter()
        .zip(values)
        .map(|(month, volume)| {
            let filled = if peak > 0.0 {
                ((volume.max(0.0) / peak) * width as f64).round() as usize
            } else {
                0
            };
            let bar: String = std::iter::repeat_n(BAR_CHAR, filled).collect();
            format!("{} {:<width$} {:.0}", month, bar, volume, width = width)
        })
        .collect()
}

/// Render the summary as pretty JSON
///
/// Without diagnostics the output is the summary object alone.
pub fn render_json(
    report: &SummaryReport,
    config: &Config,
    show_diagnostics: bool,
) -> Result<String> {
    let value = if show_diagnostics {
        serde_json::json!({
            "targetYear": config.summary.target_year,
            "summary": report.summary,
            "diagnostics": report.stats,
        })
    } else {
        serde_json::to_value(&report.summary)
            .map_err(|e| Error::data_validation(format!("Failed to serialize summary: {}", e)))?
    };

    let mut json = serde_json::to_string_pretty(&value)
        .map_err(|e| Error::data_validation(format!("Failed to serialize summary: {}", e)))?;
    json.push('\n');
    Ok(json)
}

/// Render the summary as `metric,value` CSV lines
pub fn render_csv(report: &SummaryReport, show_diagnostics: bool) -> Result<String> {
    let summary = &report.summary;
    let mut rows: Vec<(String, String)> = vec![
        ("total_pounds".into(), summary.total_pounds.to_string()),
        ("total_exercises".into(), summary.total_exercises.to_string()),
        ("total_minutes".into(), summary.total_minutes.to_string()),
        (
            "total_workout_days".into(),
            summary.total_workout_days.to_string(),
        ),
        ("average_duration".into(), summary.average_duration.to_string()),
        ("max_set_volume".into(), summary.max_set_volume.to_string()),
        ("longest_streak".into(), summary.longest_streak.to_string()),
        (
            "average_reps_per_set".into(),
            summary.average_reps_per_set.to_string(),
        ),
        (
            "most_frequent_exercise".into(),
            summary.most_frequent_exercise.clone(),
        ),
        ("total_distance".into(), summary.total_distance.to_string()),
        ("average_rpe".into(), summary.average_rpe.to_string()),
    ];

    for (rank, entry) in summary.top_exercises.iter().enumerate() {
        rows.push((format!("top_exercise_{}", rank + 1), entry.exercise.clone()));
        rows.push((
            format!("top_exercise_{}_volume", rank + 1),
            entry.volume.to_string(),
        ));
    }

    for (month, volume) in &summary.monthly_volume {
        rows.push((format!("monthly_volume_{}", month), volume.to_string()));
    }

    if show_diagnostics {
        let stats = &report.stats;
        rows.push(("rows_total".into(), stats.total_rows.to_string()));
        rows.push(("rows_included".into(), stats.rows_included.to_string()));
        rows.push(("rows_invalid_date".into(), stats.invalid_dates.to_string()));
        rows.push((
            "rows_outside_year".into(),
            stats.outside_target_year.to_string(),
        ));
    }

    let mut writer = csv::WriterBuilder::new()
        .delimiter(CSV_DELIMITER)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    writer.write_record(["metric", "value"]).map_err(csv_write_error)?;
    for (metric, value) in &rows {
        writer
            .write_record([metric.as_str(), value.as_str()])
            .map_err(csv_write_error)?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| Error::data_validation(format!("Failed to write CSV report: {}", e)))?;
    String::from_utf8(bytes)
        .map_err(|e| Error::data_validation(format!("CSV report is not valid UTF-8: {}", e)))
}

fn csv_write_error(e: csv::Error) -> Error {
    Error::data_validation(format!("Failed to write CSV report: {}", e))
}
