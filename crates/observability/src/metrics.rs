//! Description outcome metrics
//!
//! Counters go through the `metrics` facade (no-ops until a recorder is
//! installed); `OutcomeAggregator` keeps an in-process summary for reports.

use std::collections::BTreeMap;

use metrics::{counter, histogram};

/// What happened to one undo description event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DescribeOutcome {
    /// A description was produced
    Described,
    /// The event belongs to a table the listener does not handle
    UnsupportedTable,
    /// The content type has no description
    NoFormatter,
    /// The record could not be described
    Failed,
}

impl DescribeOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Described => "described",
            Self::UnsupportedTable => "unsupported_table",
            Self::NoFormatter => "no_formatter",
            Self::Failed => "failed",
        }
    }
}

impl std::fmt::Display for DescribeOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Record one handled event
///
/// `content_type` should come from a closed set so label cardinality stays
/// bounded.
///
/// # Example
///
/// ```ignore
/// use observability::metrics::{record_outcome, DescribeOutcome};
///
/// record_outcome("tl_content", "text", DescribeOutcome::Described);
/// ```
pub fn record_outcome(table: &str, content_type: &str, outcome: DescribeOutcome) {
    counter!(
        "undo_describe_events_total",
        "table" => table.to_string(),
        "type" => content_type.to_string(),
        "outcome" => outcome.as_str()
    )
    .increment(1);
}

/// Record the character length of a produced description
pub fn record_description_length(content_type: &str, chars: usize) {
    histogram!(
        "undo_describe_description_chars",
        "type" => content_type.to_string()
    )
    .record(chars as f64);
}

/// In-memory outcome aggregation for run summaries
#[derive(Debug, Clone, Default)]
pub struct OutcomeAggregator {
    /// Events per outcome
    pub outcomes: BTreeMap<DescribeOutcome, u64>,

    /// Descriptions per content type
    pub described_types: BTreeMap<String, u64>,

    /// Description length statistics
    pub length_stats: RunningStats,
}

impl OutcomeAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count an outcome; `description` is the produced text, if any
    pub fn update(
        &mut self,
        content_type: &str,
        outcome: DescribeOutcome,
        description: Option<&str>,
    ) {
        *self.outcomes.entry(outcome).or_insert(0) += 1;

        if outcome == DescribeOutcome::Described {
            *self
                .described_types
                .entry(content_type.to_string())
                .or_insert(0) += 1;
        }

        if let Some(text) = description {
            self.length_stats.push(text.chars().count() as f64);
        }
    }

    pub fn count(&self, outcome: DescribeOutcome) -> u64 {
        self.outcomes.get(&outcome).copied().unwrap_or(0)
    }

    pub fn total(&self) -> u64 {
        self.outcomes.values().sum()
    }

    pub fn summary(&self) -> OutcomeSummary {
        let total = self.total();
        let failed = self.count(DescribeOutcome::Failed);
        OutcomeSummary {
            total,
            described: self.count(DescribeOutcome::Described),
            unsupported_table: self.count(DescribeOutcome::UnsupportedTable),
            no_formatter: self.count(DescribeOutcome::NoFormatter),
            failed,
            failure_rate: if total > 0 {
                failed as f64 / total as f64 * 100.0
            } else {
                0.0
            },
            description_chars: StatsSummary::from(&self.length_stats),
            described_types: self.described_types.clone(),
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Outcome summary
#[derive(Debug, Clone, Default)]
pub struct OutcomeSummary {
    pub total: u64,
    pub described: u64,
    pub unsupported_table: u64,
    pub no_formatter: u64,
    pub failed: u64,
    pub failure_rate: f64,
    pub description_chars: StatsSummary,
    pub described_types: BTreeMap<String, u64>,
}

impl std::fmt::Display for OutcomeSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "=== Undo Description Summary ===")?;
        writeln!(f, "Events: {}", self.total)?;
        writeln!(f, "Described: {}", self.described)?;
        writeln!(f, "Unsupported table: {}", self.unsupported_table)?;
        writeln!(f, "No formatter: {}", self.no_formatter)?;
        writeln!(f, "Failed: {} ({:.2}%)", self.failed, self.failure_rate)?;
        writeln!(f, "Description length: {}", self.description_chars)?;

        if !self.described_types.is_empty() {
            writeln!(f, "Described types:")?;
            for (content_type, count) in &self.described_types {
                writeln!(f, "  {}: {}", content_type, count)?;
            }
        }

        Ok(())
    }
}

/// Statistics summary
#[derive(Debug, Clone, Default)]
pub struct StatsSummary {
    pub count: u64,
    pub min: f64,
    pub max: f64,
    pub mean: f64,
}

impl From<&RunningStats> for StatsSummary {
    fn from(stats: &RunningStats) -> Self {
        Self {
            count: stats.count,
            min: stats.min,
            max: stats.max,
            mean: stats.mean(),
        }
    }
}

impl std::fmt::Display for StatsSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.count == 0 {
            write!(f, "N/A")
        } else {
            write!(
                f,
                "min={:.0}, max={:.0}, mean={:.1} (n={})",
                self.min, self.max, self.mean, self.count
            )
        }
    }
}

/// Online min/max/mean
#[derive(Debug, Clone, Default)]
pub struct RunningStats {
    count: u64,
    mean: f64,
    min: f64,
    max: f64,
}

impl RunningStats {
    pub fn push(&mut self, value: f64) {
        self.count += 1;

        if self.count == 1 {
            self.min = value;
            self.max = value;
            self.mean = value;
        } else {
            self.min = self.min.min(value);
            self.max = self.max.max(value);
            self.mean += (value - self.mean) / self.count as f64;
        }
    }

    pub fn count(&self) -> u64 {
        self.count
    }

    pub fn mean(&self) -> f64 {
        if self.count == 0 {
            0.0
        } else {
            self.mean
        }
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_running_stats() {
        let mut stats = RunningStats::default();
        for value in [4.0, 8.0, 6.0] {
            stats.push(value);
        }

        assert_eq!(stats.count(), 3);
        assert!((stats.mean() - 6.0).abs() < 1e-10);
        assert!((stats.min() - 4.0).abs() < 1e-10);
        assert!((stats.max() - 8.0).abs() < 1e-10);
    }

    #[test]
    fn test_aggregator_update() {
        let mut aggregator = OutcomeAggregator::new();
        aggregator.update("text", DescribeOutcome::Described, Some("Hello"));
        aggregator.update("text", DescribeOutcome::Described, Some("Hi"));
        aggregator.update("image", DescribeOutcome::NoFormatter, None);
        aggregator.update("unknown", DescribeOutcome::UnsupportedTable, None);
        aggregator.update("list", DescribeOutcome::Failed, None);

        let summary = aggregator.summary();
        assert_eq!(summary.total, 5);
        assert_eq!(summary.described, 2);
        assert_eq!(summary.no_formatter, 1);
        assert_eq!(summary.unsupported_table, 1);
        assert_eq!(summary.failed, 1);
        assert!((summary.failure_rate - 20.0).abs() < 1e-10);
        assert_eq!(summary.described_types.get("text"), Some(&2));
        assert_eq!(summary.description_chars.count, 2);
        assert!((summary.description_chars.mean - 3.5).abs() < 1e-10);
    }

    #[test]
    fn test_summary_display() {
        let mut aggregator = OutcomeAggregator::new();
        aggregator.update("toplink", DescribeOutcome::Described, Some("ID 42"));

        let output = aggregator.summary().to_string();
        assert!(output.contains("Events: 1"));
        assert!(output.contains("Failed: 0 (0.00%)"));
        assert!(output.contains("toplink: 1"));
    }

    #[test]
    fn test_reset() {
        let mut aggregator = OutcomeAggregator::new();
        aggregator.update("text", DescribeOutcome::Failed, None);
        aggregator.reset();
        assert_eq!(aggregator.total(), 0);
    }

    #[test]
    fn test_record_without_recorder_is_noop() {
        record_outcome("content", "text", DescribeOutcome::Described);
        record_description_length("text", 12);
    }
}
