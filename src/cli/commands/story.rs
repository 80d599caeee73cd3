//! Story command implementation
//!
//! Prints the year-in-review as a sequence of narrative cards.

use super::shared::{RunStats, load_configuration, setup_logging, summarize_input};
use crate::app::models::StoryCard;
use crate::app::services::story::build_story;
use crate::cli::args::StoryArgs;
use crate::{Error, Result};
use colored::Colorize;
use tracing::info;

/// Run the story command
pub async fn run_story(args: StoryArgs) -> Result<RunStats> {
    setup_logging(&args.input)?;
    args.input.validate()?;

    let config = load_configuration(&args.input)?;
    let (report, stats) = summarize_input(&args.input, &config).await?;

    let cards = build_story(&report.summary, config.summary.target_year);
    info!("Built {} story cards", cards.len());

    let output = if args.json {
        let mut json = serde_json::to_string_pretty(&cards)
            .map_err(|e| Error::data_validation(format!("Failed to serialize story: {}", e)))?;
        json.push('\n');
        json
    } else {
        render_cards(&cards)
    };
    print!("{}", output);

    Ok(stats)
}

/// Render cards as text blocks separated by blank lines
pub fn render_cards(cards: &[StoryCard]) -> String {
    let mut out = String::new();

    for card in cards {
        out.push_str(&card.title.bold().to_string());
        out.push('\n');
        if let Some(value) = &card.value {
            out.push_str(&format!("  {}\n", value.green().bold()));
        }
        if let Some(subtext) = &card.subtext {
            for line in subtext.lines() {
                out.push_str(&format!("  {}\n", line.dimmed()));
            }
        }
        out.push('\n');
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_cards_includes_every_part() {
        let cards = vec![
            StoryCard::title("intro", "Opening")
                .with_value("12 days")
                .with_subtext("first line\nsecond line"),
            StoryCard::title("badge", "Closing"),
        ];

        let output = render_cards(&cards);

        assert!(output.contains("Opening"));
        assert!(output.contains("12 days"));
        assert!(output.contains("first line"));
        assert!(output.contains("second line"));
        assert!(output.contains("Closing"));
        assert!(output.ends_with("\n\n"));
    }

    #[test]
    fn test_render_no_cards() {
        assert_eq!(render_cards(&[]), "");
    }
}
