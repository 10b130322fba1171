//! # Contracts
//!
//! Frozen interface contracts shared by every crate of the undo description
//! workspace: the record model, the closed set of content elements, the
//! collaborator traits and the layered error type.
//! All business crates can only depend on this crate, reverse dependencies are prohibited.
//!
//! ## Data flow
//! - `UndoDescriptionEvent` carries `(table, Record)` from the caller
//! - `ContentElement::from_record` narrows a `Record` to a typed element
//! - a describer turns the element into a short summary string

mod collaborators;
mod config;
mod content;
mod error;
mod event;
mod record;
mod value;

pub use collaborators::{HtmlEscaper, ValueDecoder};
pub use config::*;
pub use content::{ContentElement, ContentType, Serialized};
pub use error::*;
pub use event::{UndoDescriptionEvent, UndoDescriptionListener};
pub use record::Record;
pub use value::{PhpKey, PhpValue};
