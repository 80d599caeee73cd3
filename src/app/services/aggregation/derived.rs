//! Second-order statistics computed after the accumulation pass

use std::collections::BTreeSet;

use chrono::NaiveDate;

use crate::app::services::csv_row_parser::field_parsers::parse_duration_minutes;

/// Longest run of consecutive calendar days
///
/// Days are walked in ascending order; a one-day gap extends the current run
/// and any other gap starts a new run of length one.
pub fn longest_streak(days: &BTreeSet<NaiveDate>) -> usize {
    let mut longest = 0;
    let mut current = 0;
    let mut previous: Option<NaiveDate> = None;

    for &day in days {
        current = match previous {
            Some(prev) if (day - prev).num_days() == 1 => current + 1,
            _ => 1,
        };
        longest = longest.max(current);
        previous = Some(day);
    }

    longest
}

/// Sum of parsed minutes over session durations
pub fn total_minutes<'a>(durations: impl IntoIterator<Item = &'a str>) -> u64 {
    durations
        .into_iter()
        .map(parse_duration_minutes)
        .fold(0u64, u64::saturating_add)
}

/// Division that yields zero instead of NaN when there is nothing to divide by
pub fn guarded_average(sum: f64, count: usize) -> f64 {
    if count == 0 { 0.0 } else { sum / count as f64 }
}
