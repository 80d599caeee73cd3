//! Field parsing utilities for workout CSV rows
//!
//! Every parser here is lenient and infallible: it returns `None` (or zero
//! for durations) instead of an error so the aggregation engine can apply
//! its default-to-zero policy.

use std::sync::LazyLock;

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};
use regex::Regex;

use crate::constants::{
    DATE_FORMAT, DATETIME_FORMATS, DATETIME_WITH_OFFSET_FORMAT, MINUTES_PER_HOUR,
};

static LEADING_FLOAT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?(?:[0-9]+(?:\.[0-9]*)?|\.[0-9]+)(?:[eE][+-]?[0-9]+)?")
        .expect("Invalid regex pattern")
});
static LEADING_INT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[+-]?[0-9]+").expect("Invalid regex pattern"));
static HOURS_COMPONENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([0-9]+)h").expect("Invalid regex pattern"));
static MINUTES_COMPONENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([0-9]+)m").expect("Invalid regex pattern"));

/// Parse the leading decimal number of a field
///
/// Leading whitespace is skipped and trailing text ignored, so `"62.5kg"`
/// yields `62.5`. Returns `None` when the field does not start with a number.
pub fn parse_leading_f64(value: &str) -> Option<f64> {
    LEADING_FLOAT
        .find(value.trim_start())
        .and_then(|m| m.as_str().parse::<f64>().ok())
        .filter(|v| v.is_finite())
}

/// Parse the leading integer of a field as a float (`"8.5"` yields `8.0`)
///
/// The digits are read as `f64`, so integers wider than 64 bits keep their
/// magnitude instead of failing.
pub fn parse_leading_integer(value: &str) -> Option<f64> {
    LEADING_INT
        .find(value.trim_start())
        .and_then(|m| m.as_str().parse::<f64>().ok())
        .filter(|v| v.is_finite())
}

/// Parse a Date column value into a wall-clock date-time
///
/// Accepts date-only values, space or `T` separated date-times with optional
/// seconds and fractions, and values carrying an offset. The calendar date is
/// taken as written; offsets are not applied.
pub fn parse_date_time(value: &str) -> Option<NaiveDateTime> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(dt.naive_local());
    }

    if let Ok(dt) = DateTime::parse_from_str(trimmed, DATETIME_WITH_OFFSET_FORMAT) {
        return Some(dt.naive_local());
    }

    for format in DATETIME_FORMATS {
        if let Ok(naive_dt) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Some(naive_dt);
        }
    }

    NaiveDate::parse_from_str(trimmed, DATE_FORMAT)
        .ok()
        .map(|date| date.and_time(NaiveTime::MIN))
}

/// Convert a free-text duration such as `"1h 25m"` into minutes
///
/// The first `<N>h` gives hours and the first `<N>m` gives minutes; either may
/// be absent and contributes zero.
pub fn parse_duration_minutes(value: &str) -> u64 {
    let component = |pattern: &Regex| {
        pattern
            .captures(value)
            .and_then(|caps| caps.get(1))
            .and_then(|m| m.as_str().parse::<u64>().ok())
            .unwrap_or(0)
    };

    let hours = component(&HOURS_COMPONENT);
    let minutes = component(&MINUTES_COMPONENT);

    hours
        .saturating_mul(MINUTES_PER_HOUR)
        .saturating_add(minutes)
}
