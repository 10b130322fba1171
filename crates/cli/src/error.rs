//! Error types for CLI operations.

use thiserror::Error;

/// CLI-specific error types
#[derive(Error, Debug)]
pub enum CliError {
    /// Input could not be read
    #[error("Failed to read input {path}: {source}")]
    InputRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Input is not valid JSON
    #[error("Invalid JSON input at line {line}, column {column}: {message}")]
    InputSyntax {
        line: usize,
        column: usize,
        message: String,
    },

    /// Input entry is not a valid event or record
    #[error("Invalid input at entry {entry}: {message}")]
    InputParse { entry: usize, message: String },

    /// One or more events could not be described
    #[error("{failed} of {total} events could not be described")]
    DescribeFailed { failed: u64, total: u64 },
}

impl CliError {
    pub fn input_read(path: impl Into<String>, source: std::io::Error) -> Self {
        Self::InputRead {
            path: path.into(),
            source,
        }
    }

    pub fn input_syntax(e: &serde_json::Error) -> Self {
        Self::InputSyntax {
            line: e.line(),
            column: e.column(),
            message: e.to_string(),
        }
    }

    pub fn input_parse(entry: usize, message: impl Into<String>) -> Self {
        Self::InputParse {
            entry,
            message: message.into(),
        }
    }
}

/// Result type alias for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;
