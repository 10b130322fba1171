//! # Codec
//!
//! Default collaborators for describers.
//!
//! - `PhpUnserializer`: decodes the `serialize()` text stored in
//!   structured content columns (headlines, list and table items)
//! - `HtmlSpecialChars`: escapes the five HTML special characters
//!
//! # Example
//!
//! ```
//! use codec::PhpUnserializer;
//! use contracts::{PhpValue, ValueDecoder};
//!
//! let items = PhpUnserializer.decode(r#"a:2:{i:0;s:1:"a";i:1;s:1:"b";}"#).unwrap();
//! assert_eq!(items, PhpValue::list(["a", "b"]));
//! ```

mod escape;
mod unserialize;

pub use escape::HtmlSpecialChars;
pub use unserialize::PhpUnserializer;
