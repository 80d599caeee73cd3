//! Narrative story cards for the year in review
//!
//! Turns a finished [`Summary`] into the ordered cards a presentation layer
//! shows one at a time. Cards carry text only; layout and animation belong
//! to the renderer.

use crate::app::models::{StoryCard, Summary};

/// Build the ordered story cards for a summary of `year`
///
/// The distance card is only included when some distance was logged.
pub fn build_story(summary: &Summary, year: i32) -> Vec<StoryCard> {
    let mut cards = vec![
        // Opening hook
        StoryCard::title("intro", format!("You crushed it in {} 💪", year))
            .with_value(format!("{} days", summary.total_workout_days))
            .with_subtext(format!(
                "That's {} minutes of dedication.\nConsistency is 🔑",
                summary.total_minutes
            )),
        // Volume
        StoryCard::title("volume-title", "You moved some serious weight…"),
        StoryCard::title("total-pounds", "Total Weight Moved")
            .with_value(format!("{:.0} lbs", summary.total_pounds)),
        StoryCard::title("max-set", "Heaviest Set Volume")
            .with_value(format!("{} lbs", summary.max_set_volume)),
        // Effort and intensity
        StoryCard::title("effort-title", "How hard did you go?"),
        StoryCard::title("rpe", "Avg RPE").with_value(format!("{:.1}", summary.average_rpe)),
        StoryCard::title("reps", "Avg Reps per Set")
            .with_value(format!("{:.1}", summary.average_reps_per_set)),
        StoryCard::title("sets", "Total Exercises Logged")
            .with_value(summary.total_exercises.to_string()),
        // Favourites
        StoryCard::title("top-title", "Your favorite grind 💥"),
        StoryCard::title("most-used", "Most Frequent Exercise")
            .with_value(summary.most_frequent_exercise.clone()),
    ];

    cards.extend(summary.top_exercises.iter().enumerate().map(|(i, ex)| {
        StoryCard::title(
            format!("top-{}", i),
            format!("Top #{}: {}", i + 1, ex.exercise),
        )
        .with_subtext(format!("{:.0} lbs lifted", ex.volume))
    }));

    // Time commitment
    cards.push(StoryCard::title("time-title", "Your time investment paid off…"));
    cards.push(
        StoryCard::title("avg-duration", "Avg Workout Length")
            .with_value(format!("{:.1} min", summary.average_duration)),
    );
    cards.push(
        StoryCard::title("streak", "Longest Streak")
            .with_value(format!("{} days", summary.longest_streak)),
    );

    if summary.total_distance > 0.0 {
        cards.push(
            StoryCard::title("distance", "You went the extra mile 🏃")
                .with_value(format!("{:.0} meters", summary.total_distance)),
        );
    }

    cards.push(
        StoryCard::title("badge", "You've earned the badge of a beast 🏅")
            .with_subtext("Share it. Save it. Show it off."),
    );

    cards
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::models::ExerciseVolume;

    fn sample_summary() -> Summary {
        let mut summary = Summary::empty("N/A");
        summary.total_pounds = 123_456.7;
        summary.total_exercises = 812;
        summary.total_minutes = 5400;
        summary.total_workout_days = 90;
        summary.average_duration = 60.0;
        summary.max_set_volume = 2250.0;
        summary.longest_streak = 6;
        summary.average_reps_per_set = 8.26;
        summary.average_rpe = 7.84;
        summary.most_frequent_exercise = "Squat".to_string();
        summary.top_exercises = vec![
            ExerciseVolume {
                exercise: "Deadlift".to_string(),
                volume: 40_000.4,
            },
            ExerciseVolume {
                exercise: "Squat".to_string(),
                volume: 35_000.0,
            },
        ];
        summary
    }

    fn card<'a>(cards: &'a [StoryCard], key: &str) -> &'a StoryCard {
        cards
            .iter()
            .find(|c| c.key == key)
            .unwrap_or_else(|| panic!("missing card {}", key))
    }

    #[test]
    fn test_story_card_order() {
        let cards = build_story(&sample_summary(), 2025);
        let keys: Vec<_> = cards.iter().map(|c| c.key.as_str()).collect();

        assert_eq!(
            keys,
            vec![
                "intro",
                "volume-title",
                "total-pounds",
                "max-set",
                "effort-title",
                "rpe",
                "reps",
                "sets",
                "top-title",
                "most-used",
                "top-0",
                "top-1",
                "time-title",
                "avg-duration",
                "streak",
                "badge",
            ]
        );
    }

    #[test]
    fn test_story_card_values() {
        let cards = build_story(&sample_summary(), 2025);

        let intro = card(&cards, "intro");
        assert_eq!(intro.title, "You crushed it in 2025 💪");
        assert_eq!(intro.value.as_deref(), Some("90 days"));
        assert!(intro.subtext.as_deref().unwrap().contains("5400 minutes"));

        assert_eq!(card(&cards, "total-pounds").value.as_deref(), Some("123457 lbs"));
        assert_eq!(card(&cards, "max-set").value.as_deref(), Some("2250 lbs"));
        assert_eq!(card(&cards, "rpe").value.as_deref(), Some("7.8"));
        assert_eq!(card(&cards, "reps").value.as_deref(), Some("8.3"));
        assert_eq!(card(&cards, "sets").value.as_deref(), Some("812"));
        assert_eq!(card(&cards, "most-used").value.as_deref(), Some("Squat"));
        assert_eq!(card(&cards, "avg-duration").value.as_deref(), Some("60.0 min"));
        assert_eq!(card(&cards, "streak").value.as_deref(), Some("6 days"));

        let top = card(&cards, "top-0");
        assert_eq!(top.title, "Top #1: Deadlift");
        assert_eq!(top.subtext.as_deref(), Some("40000 lbs lifted"));
    }

    #[test]
    fn test_distance_card_only_with_distance() {
        let mut summary = sample_summary();
        assert!(build_story(&summary, 2025).iter().all(|c| c.key != "distance"));

        summary.total_distance = 42_195.0;
        let cards = build_story(&summary, 2025);
        let distance = card(&cards, "distance");
        assert_eq!(distance.value.as_deref(), Some("42195 meters"));

        // Distance sits just before the closing badge
        assert_eq!(cards[cards.len() - 2].key, "distance");
        assert_eq!(cards[cards.len() - 1].key, "badge");
    }

    #[test]
    fn test_story_for_empty_summary() {
        let cards = build_story(&Summary::empty("N/A"), 2024);

        assert_eq!(card(&cards, "intro").title, "You crushed it in 2024 💪");
        assert_eq!(card(&cards, "most-used").value.as_deref(), Some("N/A"));
        assert!(cards.iter().all(|c| !c.key.starts_with("top-") || c.key == "top-title"));
    }
}
