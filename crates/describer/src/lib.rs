//! # Describer
//!
//! Turns content records into short undo descriptions.
//!
//! Responsibilities:
//! - Dispatch on the content element type
//! - Apply the per-type formatting rule (escape, truncate, join)
//! - Answer undo description events for the content table
//!
//! # Example
//!
//! ```
//! use contracts::Record;
//! use describer::ContentDescriber;
//!
//! let describer = ContentDescriber::new();
//! let record = Record::from_iter([("type", "toplink"), ("linkTitle", ""), ("id", "42")]);
//! assert_eq!(
//!     describer.describe("content", &record).unwrap().as_deref(),
//!     Some("ID 42")
//! );
//! ```

mod describer;
mod listener;
pub mod text;

pub use describer::ContentDescriber;
pub use listener::{type_label, ContentUndoDescriptionListener};
