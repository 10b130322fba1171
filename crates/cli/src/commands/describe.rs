//! `describe` command implementation.

use anyhow::{Context, Result};
use contracts::UndoDescriptionEvent;
use describer::{type_label, ContentDescriber, ContentUndoDescriptionListener};
use observability::{DescribeOutcome, OutcomeAggregator};
use serde::Serialize;
use tracing::{info, warn};

use super::load_config;
use crate::cli::DescribeArgs;
use crate::error::CliError;
use crate::input;

/// Per-event result for JSON output
#[derive(Debug, Serialize)]
struct DescribeResult {
    index: usize,
    table: String,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    content_type: Option<String>,
    outcome: String,
    description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

/// Execute the `describe` command
pub fn run_describe(args: &DescribeArgs) -> Result<()> {
    let config = load_config(args.config.as_deref())?;
    let listener = ContentUndoDescriptionListener::new(ContentDescriber::from_config(&config));

    let content = input::read_input(&args.input)?;
    let events = input::parse_events(&content, args.table.as_deref())?;

    info!(
        events = events.len(),
        table = %config.content.table,
        input = %args.input.display(),
        "Describing undo events"
    );

    let mut aggregator = OutcomeAggregator::new();
    let results = describe_all(&listener, events, &mut aggregator);

    if args.json {
        let json =
            serde_json::to_string_pretty(&results).context("Failed to serialize results")?;
        println!("{}", json);
    } else {
        for result in &results {
            println!("{}", result.description.as_deref().unwrap_or("-"));
        }
    }

    let summary = aggregator.summary();
    if !args.no_summary {
        eprint!("{}", summary);
    }

    info!(
        total = summary.total,
        described = summary.described,
        failed = summary.failed,
        "Describe finished"
    );

    if summary.failed > 0 {
        return Err(CliError::DescribeFailed {
            failed: summary.failed,
            total: summary.total,
        }
        .into());
    }

    Ok(())
}

fn describe_all(
    listener: &ContentUndoDescriptionListener,
    events: Vec<UndoDescriptionEvent>,
    aggregator: &mut OutcomeAggregator,
) -> Vec<DescribeResult> {
    events
        .into_iter()
        .enumerate()
        .map(|(index, mut event)| {
            let content_type = type_label(event.data());

            let (outcome, error) = match listener.handle(&mut event) {
                Ok(outcome) => (outcome, None),
                Err(e) => {
                    warn!(index, error = %e, "Event could not be described");
                    (DescribeOutcome::Failed, Some(e.to_string()))
                }
            };

            let description = match outcome {
                DescribeOutcome::Failed => None,
                _ => event.description().map(str::to_string),
            };
            aggregator.update(content_type, outcome, description.as_deref());

            DescribeResult {
                index,
                table: event.table().to_string(),
                content_type: event.data().type_key().map(str::to_string),
                outcome: outcome.to_string(),
                description,
                error,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::Record;

    fn run(events: Vec<UndoDescriptionEvent>) -> (Vec<DescribeResult>, OutcomeAggregator) {
        let listener = ContentUndoDescriptionListener::new(ContentDescriber::new());
        let mut aggregator = OutcomeAggregator::new();
        let results = describe_all(&listener, events, &mut aggregator);
        (results, aggregator)
    }

    #[test]
    fn test_describe_all_mixed_outcomes() {
        let events = vec![
            UndoDescriptionEvent::new(
                "content",
                Record::new().with("type", "toplink").with("id", 42),
            ),
            UndoDescriptionEvent::new("page", Record::new().with("title", "Home")),
            UndoDescriptionEvent::new("content", Record::new().with("type", "gallery")),
            UndoDescriptionEvent::new("content", Record::new().with("type", "hyperlink")),
        ];

        let (results, aggregator) = run(events);

        assert_eq!(results[0].description.as_deref(), Some("ID 42"));
        assert_eq!(results[0].outcome, "described");
        assert_eq!(results[1].outcome, "unsupported_table");
        assert_eq!(results[2].outcome, "no_formatter");
        assert_eq!(results[2].description, None);
        assert_eq!(results[3].outcome, "failed");
        assert!(results[3].error.as_deref().unwrap().contains("url"));

        let summary = aggregator.summary();
        assert_eq!(summary.total, 4);
        assert_eq!(summary.described, 1);
        assert_eq!(summary.failed, 1);
        assert_eq!(summary.described_types.get("toplink"), Some(&1));
    }

    #[test]
    fn test_summary_uses_canonical_type_names() {
        let events = vec![
            UndoDescriptionEvent::new(
                "content",
                Record::new().with("type", "TOPLINK").with("id", 1),
            ),
            UndoDescriptionEvent::new(
                "content",
                Record::new().with("type", "toplink").with("id", 2),
            ),
        ];
        let (results, aggregator) = run(events);

        assert_eq!(results[0].content_type.as_deref(), Some("TOPLINK"));
        let summary = aggregator.summary();
        assert_eq!(summary.described_types.get("toplink"), Some(&2));
        assert_eq!(summary.described_types.len(), 1);
    }

    #[test]
    fn test_result_json_shape() {
        let events = vec![UndoDescriptionEvent::new(
            "content",
            Record::new().with("type", "code").with("code", "<b>"),
        )];
        let (results, _) = run(events);

        let json = serde_json::to_value(&results).unwrap();
        assert_eq!(json[0]["type"], "code");
        assert_eq!(json[0]["description"], "&lt;b&gt;");
        assert!(json[0].get("error").is_none());
    }
}
