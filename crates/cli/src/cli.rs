//! CLI argument definitions using clap.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Undo Describe - short descriptions for undone content elements
#[derive(Parser, Debug)]
#[command(
    name = "undo-describe",
    author,
    version,
    about = "Describe content element records for an undo history",
    long_about = "Reads undo events (table + record data) and prints the short, \n\
                  escaped description an undo list would show for each of them.\n\n\
                  Input is a JSON array or JSON Lines; use `-` for stdin."
)]
pub struct Cli {
    /// Increase logging verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true, env = "UNDO_DESCRIBE_VERBOSE")]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Log output format
    #[arg(
        long,
        value_enum,
        default_value = "pretty",
        global = true,
        env = "UNDO_DESCRIBE_LOG_FORMAT"
    )]
    pub log_format: LogFormat,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Describe undo events
    Describe(DescribeArgs),

    /// Validate configuration file
    Validate(ValidateArgs),

    /// Display content types and effective configuration
    Info(InfoArgs),
}

/// Arguments for the `describe` command
#[derive(Parser, Debug, Clone)]
pub struct DescribeArgs {
    /// Events file (JSON array or JSON Lines), `-` for stdin
    #[arg(short, long, default_value = "-", env = "UNDO_DESCRIBE_INPUT")]
    pub input: PathBuf,

    /// Path to configuration file (TOML or JSON)
    #[arg(short, long, env = "UNDO_DESCRIBE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Treat every input entry as bare record data of this table
    #[arg(short, long)]
    pub table: Option<String>,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,

    /// Do not print the outcome summary to stderr
    #[arg(long)]
    pub no_summary: bool,
}

/// Arguments for the `validate` command
#[derive(Parser, Debug)]
pub struct ValidateArgs {
    /// Path to configuration file to validate
    #[arg(short, long, default_value = "describer.toml", env = "UNDO_DESCRIBE_CONFIG")]
    pub config: PathBuf,

    /// Output validation result as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `info` command
#[derive(Parser, Debug)]
pub struct InfoArgs {
    /// Path to configuration file; built-in defaults when omitted
    #[arg(short, long, env = "UNDO_DESCRIBE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Log output format
#[derive(ValueEnum, Clone, Copy, Debug, Default)]
pub enum LogFormat {
    /// JSON structured logging
    Json,
    /// Human-readable pretty format
    #[default]
    Pretty,
    /// Compact single-line format
    Compact,
}

impl From<LogFormat> for observability::LogFormat {
    fn from(format: LogFormat) -> Self {
        match format {
            LogFormat::Json => Self::Json,
            LogFormat::Pretty => Self::Pretty,
            LogFormat::Compact => Self::Compact,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_describe_defaults() {
        let cli = Cli::try_parse_from(["undo-describe", "describe"]).unwrap();
        match cli.command {
            Commands::Describe(args) => {
                assert_eq!(args.input, PathBuf::from("-"));
                assert!(args.config.is_none());
                assert!(args.table.is_none());
                assert!(!args.json);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "undo-describe",
            "describe",
            "--input",
            "events.jsonl",
            "--table",
            "tl_content",
            "-vv",
            "--log-format",
            "json",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 2);
        assert!(matches!(cli.log_format, LogFormat::Json));
    }

    #[test]
    fn test_quiet_conflicts_with_verbose() {
        assert!(Cli::try_parse_from(["undo-describe", "-q", "-v", "info"]).is_err());
    }
}
