//! Layered error definitions
//!
//! Categorized by source: decode / record / config

use thiserror::Error;

/// Malformed serialized value
///
/// `offset` is the byte position in the encoded input where decoding stopped.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("decode error at byte {offset}: {message}")]
pub struct DecodeError {
    pub offset: usize,
    pub message: String,
}

impl DecodeError {
    pub fn new(offset: usize, message: impl Into<String>) -> Self {
        Self {
            offset,
            message: message.into(),
        }
    }
}

/// Unified error type
#[derive(Debug, Error)]
pub enum DescribeError {
    // ===== Record Errors =====
    /// Record has no `type` discriminant
    #[error("record has no 'type' field")]
    MissingType,

    /// Field required by the content type is absent
    #[error("missing field '{field}' for content type '{content_type}'")]
    MissingField {
        content_type: String,
        field: String,
    },

    /// Field is present but has an unusable shape
    #[error("invalid field '{field}' for content type '{content_type}': {message}")]
    InvalidField {
        content_type: String,
        field: String,
        message: String,
    },

    // ===== Decode Errors =====
    /// Serialized field could not be decoded
    #[error("cannot decode field '{field}' for content type '{content_type}': {source}")]
    Decode {
        content_type: String,
        field: String,
        #[source]
        source: DecodeError,
    },

    // ===== Configuration Errors =====
    /// Configuration parse error
    #[error("config parse error: {message}")]
    ConfigParse {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Configuration validation error
    #[error("config validation error at '{field}': {message}")]
    ConfigValidation { field: String, message: String },

    // ===== General Errors =====
    /// IO error
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl DescribeError {
    /// Create missing field error
    pub fn missing_field(content_type: impl Into<String>, field: impl Into<String>) -> Self {
        Self::MissingField {
            content_type: content_type.into(),
            field: field.into(),
        }
    }

    /// Create invalid field error
    pub fn invalid_field(
        content_type: impl Into<String>,
        field: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::InvalidField {
            content_type: content_type.into(),
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create decode error for a field
    pub fn decode(
        content_type: impl Into<String>,
        field: impl Into<String>,
        source: DecodeError,
    ) -> Self {
        Self::Decode {
            content_type: content_type.into(),
            field: field.into(),
            source,
        }
    }

    /// Create configuration parse error
    pub fn config_parse(message: impl Into<String>) -> Self {
        Self::ConfigParse {
            message: message.into(),
            source: None,
        }
    }

    /// Create configuration validation error
    pub fn config_validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ConfigValidation {
            field: field.into(),
            message: message.into(),
        }
    }
}
