//! Command implementations.

mod describe;
mod info;
mod validate;

pub use describe::run_describe;
pub use info::run_info;
pub use validate::run_validate;

use std::path::Path;

use anyhow::{Context, Result};
use config_loader::{ConfigLoader, DescriberConfig};

/// Load a configuration file, or the defaults when no path is given
fn load_config(path: Option<&Path>) -> Result<DescriberConfig> {
    match path {
        Some(path) => ConfigLoader::load_from_path(path)
            .with_context(|| format!("Failed to load config from {}", path.display())),
        None => Ok(DescriberConfig::default()),
    }
}
