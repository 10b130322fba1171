//! DescriberConfig - Config Loader output
//!
//! Supported table name and truncation limits for descriptions.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Configuration version
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ConfigVersion {
    #[default]
    V1,
}

/// Complete describer configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
pub struct DescriberConfig {
    /// Configuration version
    #[serde(default)]
    pub version: ConfigVersion,

    /// Which records are described
    #[serde(default)]
    #[validate(nested)]
    pub content: ContentConfig,

    /// Length limits
    #[serde(default)]
    #[validate(nested)]
    pub truncation: TruncationConfig,
}

/// Content table selection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct ContentConfig {
    /// Table whose records are described (e.g. "tl_content")
    #[serde(default = "default_table")]
    #[validate(length(min = 1, max = 64))]
    pub table: String,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            table: default_table(),
        }
    }
}

fn default_table() -> String {
    "content".to_string()
}

/// Truncation limits
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct TruncationConfig {
    /// Visible characters kept for `text` elements (word-safe)
    #[serde(default = "default_max_chars")]
    #[validate(range(min = 1, max = 10000))]
    pub text_max_chars: usize,

    /// Characters kept for `html` elements after escaping
    #[serde(default = "default_max_chars")]
    #[validate(range(min = 1, max = 10000))]
    pub html_max_chars: usize,

    /// Appended when content was cut
    #[serde(default = "default_indicator")]
    #[validate(length(max = 16))]
    pub indicator: String,
}

impl Default for TruncationConfig {
    fn default() -> Self {
        Self {
            text_max_chars: default_max_chars(),
            html_max_chars: default_max_chars(),
            indicator: default_indicator(),
        }
    }
}

fn default_max_chars() -> usize {
    100
}

fn default_indicator() -> String {
    " …".to_string()
}
