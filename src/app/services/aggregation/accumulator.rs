//! Running state for one summarization call
//!
//! [`YearAccumulator`] is created per call, fed every row once in input
//! order, and consumed by [`YearAccumulator::finish`]. Nothing here outlives
//! the call.

use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::ops::AddAssign;

use chrono::{Datelike, NaiveDate};
use tracing::trace;

use super::derived::{guarded_average, longest_streak, total_minutes};
use super::stats::AggregationStats;
use crate::app::models::{ExerciseVolume, Summary};
use crate::app::services::csv_row_parser::field_parsers::{
    parse_date_time, parse_leading_f64, parse_leading_integer,
};
use crate::app::services::csv_row_parser::{Column, RawRow};
use crate::config::SummaryConfig;
use crate::constants::MONTH_KEY_FORMAT;

/// Insertion-ordered tally keyed by name
///
/// Ranking sorts are stable, so equal values keep first-encountered order.
#[derive(Debug, Clone, Default)]
pub struct OrderedTally<V> {
    entries: Vec<(String, V)>,
    index: HashMap<String, usize>,
}

impl<V> OrderedTally<V>
where
    V: Copy + Default + AddAssign + PartialOrd,
{
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Add `amount` to `key`, inserting it at zero first if unseen
    pub fn add(&mut self, key: &str, amount: V) {
        let position = match self.index.get(key) {
            Some(&position) => position,
            None => {
                self.entries.push((key.to_string(), V::default()));
                self.index.insert(key.to_string(), self.entries.len() - 1);
                self.entries.len() - 1
            }
        };
        self.entries[position].1 += amount;
    }

    #[cfg(test)]
    pub fn get(&self, key: &str) -> Option<V> {
        self.index.get(key).map(|&position| self.entries[position].1)
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries sorted by value descending, ties in insertion order
    pub fn ranked(&self) -> Vec<(&str, V)> {
        let mut ranked: Vec<(&str, V)> = self
            .entries
            .iter()
            .map(|(key, value)| (key.as_str(), *value))
            .collect();
        ranked.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
        ranked
    }
}

/// Accumulator state for one target year
#[derive(Debug)]
pub struct YearAccumulator<'c> {
    config: &'c SummaryConfig,

    total_volume: f64,
    set_count: usize,
    total_reps: f64,
    total_distance: f64,
    rpe_sum: f64,
    rpe_count: usize,
    max_set_volume: f64,

    workout_days: BTreeSet<NaiveDate>,
    session_durations: HashMap<String, String>,
    exercise_volume: OrderedTally<f64>,
    exercise_sets: OrderedTally<usize>,
    monthly_volume: BTreeMap<String, f64>,

    stats: AggregationStats,
}

impl<'c> YearAccumulator<'c> {
    pub fn new(config: &'c SummaryConfig) -> Self {
        Self {
            config,
            total_volume: 0.0,
            set_count: 0,
            total_reps: 0.0,
            total_distance: 0.0,
            rpe_sum: 0.0,
            rpe_count: 0,
            max_set_volume: 0.0,
            workout_days: BTreeSet::new(),
            session_durations: HashMap::new(),
            exercise_volume: OrderedTally::new(),
            exercise_sets: OrderedTally::new(),
            monthly_volume: BTreeMap::new(),
            stats: AggregationStats::new(),
        }
    }

    /// Fold one row into the running state
    ///
    /// Rows with an unparseable date, or a date outside the target year,
    /// touch nothing but the diagnostics.
    pub fn add_row(&mut self, row: &RawRow) {
        self.stats.total_rows += 1;

        let raw_date = row.get_or_empty(Column::Date);
        let Some(date_time) = parse_date_time(raw_date) else {
            trace!("Line {}: unparseable date '{}'", row.line_number, raw_date);
            self.stats.invalid_dates += 1;
            return;
        };

        if date_time.year() != self.config.target_year {
            trace!(
                "Line {}: {} is outside target year {}",
                row.line_number,
                date_time.year(),
                self.config.target_year
            );
            self.stats.outside_target_year += 1;
            return;
        }
        self.stats.rows_included += 1;

        let weight = self.numeric_or_zero(row, Column::Weight, parse_leading_f64);
        let reps = self.numeric_or_zero(row, Column::Reps, parse_leading_integer);
        let volume = weight * reps;

        self.total_volume += volume;
        self.set_count += 1;
        self.total_reps += reps;
        self.max_set_volume = self.max_set_volume.max(volume);

        let date = date_time.date();
        self.workout_days.insert(date);

        let duration = row.get_or_empty(Column::Duration).to_string();
        if self
            .session_durations
            .insert(raw_date.to_string(), duration)
            .is_some()
        {
            self.stats.durations_overwritten += 1;
        }

        let exercise = match row.get(Column::ExerciseName).filter(|name| !name.is_empty()) {
            Some(name) => name,
            None => {
                self.stats.unnamed_exercises += 1;
                self.config.unknown_exercise_label.as_str()
            }
        };
        self.exercise_volume.add(exercise, volume);
        self.exercise_sets.add(exercise, 1);

        let month_key = date.format(MONTH_KEY_FORMAT).to_string();
        *self.monthly_volume.entry(month_key).or_insert(0.0) += volume;

        let distance = self.numeric_or_zero(row, Column::Distance, parse_leading_f64);
        self.total_distance += distance;

        match row.get(Column::Rpe).and_then(parse_leading_f64) {
            Some(rpe) => {
                self.rpe_sum += rpe;
                self.rpe_count += 1;
            }
            None => self.stats.rpe_missing += 1,
        }
    }

    fn numeric_or_zero(
        &mut self,
        row: &RawRow,
        column: Column,
        parse: fn(&str) -> Option<f64>,
    ) -> f64 {
        match row.get(column).and_then(parse) {
            Some(value) => value,
            None => {
                match column {
                    Column::Weight => self.stats.weight_defaulted += 1,
                    Column::Reps => self.stats.reps_defaulted += 1,
                    Column::Distance => self.stats.distance_defaulted += 1,
                    _ => {}
                }
                0.0
            }
        }
    }

    /// Derive second-order statistics and produce the final summary
    pub fn finish(self) -> (Summary, AggregationStats) {
        if self.set_count == 0 {
            return (Summary::empty(self.config.no_exercise_label.as_str()), self.stats);
        }

        let total_minutes = total_minutes(self.session_durations.values().map(String::as_str));
        let total_workout_days = self.workout_days.len();

        let top_exercises = self
            .exercise_volume
            .ranked()
            .into_iter()
            .take(self.config.top_exercise_count)
            .map(|(exercise, volume)| ExerciseVolume {
                exercise: exercise.to_string(),
                volume,
            })
            .collect();

        let most_frequent_exercise = self
            .exercise_sets
            .ranked()
            .first()
            .map(|(exercise, _)| exercise.to_string())
            .unwrap_or_else(|| self.config.no_exercise_label.clone());

        let summary = Summary {
            total_pounds: self.total_volume,
            total_exercises: self.set_count,
            total_minutes,
            total_workout_days,
            average_duration: guarded_average(total_minutes as f64, total_workout_days),
            max_set_volume: self.max_set_volume,
            top_exercises,
            longest_streak: longest_streak(&self.workout_days),
            monthly_volume: self.monthly_volume,
            average_reps_per_set: guarded_average(self.total_reps, self.set_count),
            most_frequent_exercise,
            total_distance: self.total_distance,
            average_rpe: guarded_average(self.rpe_sum, self.rpe_count),
        };

        (summary, self.stats)
    }
}
