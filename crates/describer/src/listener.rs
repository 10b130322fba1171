//! Undo listener for content records

use codec::{HtmlSpecialChars, PhpUnserializer};
use contracts::{
    ContentType, DescribeError, HtmlEscaper, Record, UndoDescriptionEvent,
    UndoDescriptionListener, ValueDecoder,
};
use observability::metrics::{record_description_length, record_outcome, DescribeOutcome};
use tracing::{debug, instrument, warn};

use crate::ContentDescriber;

/// Sets the description of undo events raised for the content table
///
/// Events of other tables are left untouched. For content events the
/// description is replaced by the describer's result, which is `None` for
/// types without a description.
#[derive(Debug, Clone)]
pub struct ContentUndoDescriptionListener<D = PhpUnserializer, E = HtmlSpecialChars> {
    describer: ContentDescriber<D, E>,
}

impl<D: ValueDecoder, E: HtmlEscaper> ContentUndoDescriptionListener<D, E> {
    pub fn new(describer: ContentDescriber<D, E>) -> Self {
        Self { describer }
    }

    /// Handle one event and report what happened
    ///
    /// # Errors
    /// Propagates describer errors; the event is not modified then.
    #[instrument(
        name = "content_undo_description",
        skip(self, event),
        fields(table = %event.table())
    )]
    pub fn handle(&self, event: &mut UndoDescriptionEvent) -> Result<DescribeOutcome, DescribeError> {
        let content_type = type_label(event.data());

        if !self.describer.supports(event.table()) {
            record_outcome(event.table(), content_type, DescribeOutcome::UnsupportedTable);
            return Ok(DescribeOutcome::UnsupportedTable);
        }

        let description = match self.describer.describe(event.table(), event.data()) {
            Ok(description) => description,
            Err(e) => {
                warn!(content_type, error = %e, "Undo description failed");
                record_outcome(event.table(), content_type, DescribeOutcome::Failed);
                return Err(e);
            }
        };

        let outcome = match &description {
            Some(text) => {
                debug!(content_type, chars = text.chars().count(), "Undo description set");
                record_description_length(content_type, text.chars().count());
                DescribeOutcome::Described
            }
            None => {
                debug!(content_type, "No description for content type");
                DescribeOutcome::NoFormatter
            }
        };

        record_outcome(event.table(), content_type, outcome);
        event.set_description(description);
        Ok(outcome)
    }
}

impl<D: ValueDecoder, E: HtmlEscaper> UndoDescriptionListener
    for ContentUndoDescriptionListener<D, E>
{
    fn on_undo_description(&self, event: &mut UndoDescriptionEvent) -> Result<(), DescribeError> {
        self.handle(event).map(|_| ())
    }
}

/// Canonical type name of a record, or "unknown" for free-form input
///
/// Used as a metrics label, so the value set stays closed.
pub fn type_label(data: &Record) -> &'static str {
    data.type_key()
        .and_then(ContentType::from_type_key)
        .map_or("unknown", |t| t.as_str())
}
