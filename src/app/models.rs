//! Data models for workout summaries
//!
//! This module contains the immutable result of an aggregation run and the
//! narrative card type consumed by presentation layers.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// =============================================================================
// Summary Structure
// =============================================================================

/// Cumulative volume for one exercise in the top-exercise ranking
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExerciseVolume {
    /// Exercise name as logged
    pub exercise: String,

    /// Sum of weight x reps over the year
    pub volume: f64,
}

/// Year-in-review statistics for one target year
///
/// Serializes with the camelCase field names presentation layers expect
/// (`totalPounds`, `averageRPE`, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    /// Sum of weight x reps over included sets (lbs)
    pub total_pounds: f64,

    /// Number of included sets (one row per set)
    pub total_exercises: usize,

    /// Minutes over distinct session timestamps
    pub total_minutes: u64,

    /// Distinct calendar days with at least one set
    pub total_workout_days: usize,

    /// Minutes per workout day
    pub average_duration: f64,

    /// Largest single-set weight x reps
    pub max_set_volume: f64,

    /// Highest-volume exercises, descending
    pub top_exercises: Vec<ExerciseVolume>,

    /// Longest run of consecutive workout days
    pub longest_streak: usize,

    /// Volume per `YYYY-MM`, in chronological order
    pub monthly_volume: BTreeMap<String, f64>,

    pub average_reps_per_set: f64,

    /// Exercise with the most sets, or the no-exercise label
    pub most_frequent_exercise: String,

    pub total_distance: f64,

    /// Mean RPE over sets that recorded one
    #[serde(rename = "averageRPE")]
    pub average_rpe: f64,
}

impl Summary {
    /// Summary of a year with no included sets
    pub fn empty(no_exercise_label: impl Into<String>) -> Self {
        Self {
            total_pounds: 0.0,
            total_exercises: 0,
            total_minutes: 0,
            total_workout_days: 0,
            average_duration: 0.0,
            max_set_volume: 0.0,
            top_exercises: Vec::new(),
            longest_streak: 0,
            monthly_volume: BTreeMap::new(),
            average_reps_per_set: 0.0,
            most_frequent_exercise: no_exercise_label.into(),
            total_distance: 0.0,
            average_rpe: 0.0,
        }
    }

    /// Whether any set was included
    pub fn has_workouts(&self) -> bool {
        self.total_exercises > 0
    }

    /// Monthly volume as parallel label/value series for charting
    pub fn monthly_series(&self) -> (Vec<String>, Vec<f64>) {
        self.monthly_volume
            .iter()
            .map(|(month, volume)| (month.clone(), *volume))
            .unzip()
    }

    /// Month with the highest volume (earliest month on ties)
    pub fn peak_month(&self) -> Option<(&str, f64)> {
        let mut best: Option<(&str, f64)> = None;
        for (month, &volume) in &self.monthly_volume {
            if best.is_none_or(|(_, best_volume)| volume > best_volume) {
                best = Some((month.as_str(), volume));
            }
        }
        best
    }
}

// =============================================================================
// Story Cards
// =============================================================================

/// One narrative card of the year in review
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoryCard {
    /// Stable identifier for the card
    pub key: String,

    pub title: String,

    /// Headline figure, if the card has one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,

    /// Supporting line(s) under the headline
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtext: Option<String>,
}

impl StoryCard {
    /// Card with a title only (section headers)
    pub fn title(key: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            title: title.into(),
            value: None,
            subtext: None,
        }
    }

    /// Card with a headline value
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    /// Card with supporting text
    pub fn with_subtext(mut self, subtext: impl Into<String>) -> Self {
        self.subtext = Some(subtext.into());
        self
    }
}
