//! # Undo Describe CLI
//!
//! Command-line entry point.
//!
//! Provides:
//! - Undo event description from files or stdin
//! - Configuration validation
//! - Content type and configuration overview

mod cli;
mod commands;
mod error;
mod input;

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};
use observability::ObservabilityConfig;
use commands::{run_describe, run_info, run_validate};

fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    init_logging(&cli)?;

    info!(
        version = env!("CARGO_PKG_VERSION"),
        "Undo Describe CLI starting"
    );

    let result = match &cli.command {
        Commands::Describe(args) => run_describe(args),
        Commands::Validate(args) => run_validate(args),
        Commands::Info(args) => run_info(args),
    };

    if let Err(ref e) = result {
        tracing::error!(error = %e, "Command failed");
    }

    result
}

/// Initialize logging based on CLI options
fn init_logging(cli: &Cli) -> Result<()> {
    let log_format = cli.log_format.into();

    // --quiet wins over RUST_LOG
    if cli.quiet {
        return observability::init_with_filter(EnvFilter::new("error"), log_format);
    }

    let default_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    observability::init_with_config(ObservabilityConfig {
        log_format,
        default_log_level: default_level.to_string(),
    })
}
