//! Collaborator traits injected into describers

use crate::{DecodeError, PhpValue};

/// Decodes a serialized field into a structured value
pub trait ValueDecoder: Send + Sync {
    /// # Errors
    /// Returns `DecodeError` for malformed input; no partial result.
    fn decode(&self, raw: &str) -> Result<PhpValue, DecodeError>;
}

/// Escapes text for inclusion in HTML
pub trait HtmlEscaper: Send + Sync {
    fn escape(&self, raw: &str) -> String;
}

impl<T: ValueDecoder + ?Sized> ValueDecoder for &T {
    fn decode(&self, raw: &str) -> Result<PhpValue, DecodeError> {
        (**self).decode(raw)
    }
}

impl<T: HtmlEscaper + ?Sized> HtmlEscaper for &T {
    fn escape(&self, raw: &str) -> String {
        (**self).escape(raw)
    }
}
