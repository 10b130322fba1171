//! Undo description event and the listener seam

use serde::{Deserialize, Serialize};

use crate::{DescribeError, Record};

/// Raised when an undo entry needs a human readable description
///
/// Listeners read `table` and `data` and may set `description`; the event
/// owner decides what to persist.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UndoDescriptionEvent {
    table: String,
    data: Record,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    description: Option<String>,
}

impl UndoDescriptionEvent {
    pub fn new(table: impl Into<String>, data: Record) -> Self {
        Self {
            table: table.into(),
            data,
            description: None,
        }
    }

    pub fn table(&self) -> &str {
        &self.table
    }

    pub fn data(&self) -> &Record {
        &self.data
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn set_description(&mut self, description: Option<String>) {
        self.description = description;
    }
}

/// Handler for undo description events
///
/// Implementations decide for themselves whether an event concerns them.
pub trait UndoDescriptionListener: Send + Sync {
    /// # Errors
    /// Propagates description failures; the event is left unchanged then.
    fn on_undo_description(&self, event: &mut UndoDescriptionEvent) -> Result<(), DescribeError>;
}
