//! Configuration validation
//!
//! Rules:
//! - field limits declared on the config types (`validator` derive)
//! - table name is a single identifier (no whitespace)
//! - indicator has no line breaks

use std::collections::BTreeMap;

use contracts::{DescribeError, DescriberConfig};
use validator::{Validate, ValidationErrors, ValidationErrorsKind};

/// Validate a parsed configuration
///
/// Returns the first error by field path, or Ok(()).
pub fn validate(config: &DescriberConfig) -> Result<(), DescribeError> {
    if let Err(errors) = config.validate() {
        let mut found = BTreeMap::new();
        collect(&errors, "", &mut found);
        if let Some((field, message)) = found.into_iter().next() {
            return Err(DescribeError::config_validation(field, message));
        }
    }

    validate_table(config)?;
    validate_indicator(config)?;
    Ok(())
}

/// Flatten nested validation errors into `path -> message`
fn collect(errors: &ValidationErrors, prefix: &str, out: &mut BTreeMap<String, String>) {
    for (name, kind) in errors.errors() {
        let path = if prefix.is_empty() {
            name.to_string()
        } else {
            format!("{prefix}.{name}")
        };

        match kind {
            ValidationErrorsKind::Struct(inner) => collect(inner, &path, out),
            ValidationErrorsKind::List(items) => {
                for (idx, inner) in items {
                    collect(inner, &format!("{path}[{idx}]"), out);
                }
            }
            ValidationErrorsKind::Field(field_errors) => {
                if let Some(error) = field_errors.first() {
                    let mut message = format!("failed '{}' check", error.code);
                    let bounds: Vec<String> = ["min", "max"]
                        .iter()
                        .filter_map(|key| error.params.get(*key).map(|v| format!("{key}={v}")))
                        .collect();
                    if !bounds.is_empty() {
                        message.push_str(&format!(" ({})", bounds.join(", ")));
                    }
                    out.insert(path, message);
                }
            }
        }
    }
}

fn validate_table(config: &DescriberConfig) -> Result<(), DescribeError> {
    let table = &config.content.table;
    if table.chars().any(char::is_whitespace) {
        return Err(DescribeError::config_validation(
            "content.table",
            format!("table name must not contain whitespace, got '{table}'"),
        ));
    }
    Ok(())
}

fn validate_indicator(config: &DescriberConfig) -> Result<(), DescribeError> {
    if config.truncation.indicator.contains(['\n', '\r']) {
        return Err(DescribeError::config_validation(
            "truncation.indicator",
            "indicator must be a single line",
        ));
    }
    Ok(())
}
