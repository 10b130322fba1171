//! # Config Loader
//!
//! Configuration loading and parsing module.
//!
//! Responsibilities:
//! - Parse TOML/JSON configuration files
//! - Validate configuration limits
//! - Produce `DescriberConfig`
//!
//! # Example
//!
//! ```no_run
//! use config_loader::ConfigLoader;
//! use std::path::Path;
//!
//! let config = ConfigLoader::load_from_path(Path::new("describer.toml")).unwrap();
//! println!("Table: {}", config.content.table);
//! ```

mod parser;
mod validator;

pub use contracts::DescriberConfig;
pub use parser::ConfigFormat;

use contracts::DescribeError;
use std::path::Path;

/// Configuration loader
///
/// Provides static methods to load configuration from files or strings.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from file path
    ///
    /// Automatically detects format from file extension (.toml / .json).
    ///
    /// # Errors
    /// - File read failure
    /// - Unsupported format
    /// - Parse failure
    /// - Validation failure
    pub fn load_from_path(path: &Path) -> Result<DescriberConfig, DescribeError> {
        let format = Self::detect_format(path)?;
        let content = Self::read_file(path)?;
        Self::load_from_str(&content, format)
    }

    /// Load configuration from string
    ///
    /// # Errors
    /// - Parse failure
    /// - Validation failure
    pub fn load_from_str(
        content: &str,
        format: ConfigFormat,
    ) -> Result<DescriberConfig, DescribeError> {
        Self::parse_and_validate(content, format)
    }

    /// Validate an already built configuration
    pub fn validate(config: &DescriberConfig) -> Result<(), DescribeError> {
        validator::validate(config)
    }

    /// Serialize DescriberConfig to TOML string
    pub fn to_toml(config: &DescriberConfig) -> Result<String, DescribeError> {
        toml::to_string_pretty(config)
            .map_err(|e| DescribeError::config_parse(format!("TOML serialize error: {e}")))
    }

    /// Serialize DescriberConfig to JSON string
    pub fn to_json(config: &DescriberConfig) -> Result<String, DescribeError> {
        serde_json::to_string_pretty(config)
            .map_err(|e| DescribeError::config_parse(format!("JSON serialize error: {e}")))
    }
}

impl ConfigLoader {
    /// Infer configuration format from file extension
    fn detect_format(path: &Path) -> Result<ConfigFormat, DescribeError> {
        let ext = path.extension().and_then(|e| e.to_str()).ok_or_else(|| {
            DescribeError::config_parse("cannot determine file format from extension")
        })?;

        ConfigFormat::from_extension(ext).ok_or_else(|| {
            DescribeError::config_parse(format!("unsupported config format: .{ext}"))
        })
    }

    fn read_file(path: &Path) -> Result<String, DescribeError> {
        Ok(std::fs::read_to_string(path)?)
    }

    fn parse_and_validate(
        content: &str,
        format: ConfigFormat,
    ) -> Result<DescriberConfig, DescribeError> {
        let config = parser::parse(content, format)?;
        validator::validate(&config)?;
        Ok(config)
    }
}
