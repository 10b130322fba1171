//! `info` command implementation.

use anyhow::{Context, Result};
use config_loader::DescriberConfig;
use contracts::ContentType;
use serde::Serialize;
use tracing::info;

use super::load_config;
use crate::cli::InfoArgs;

/// Configuration info for JSON output
#[derive(Serialize)]
struct DescriberInfo {
    version: String,
    table: String,
    truncation: TruncationInfo,
    describable_types: Vec<&'static str>,
    disabled_types: Vec<&'static str>,
}

#[derive(Serialize)]
struct TruncationInfo {
    text_max_chars: usize,
    html_max_chars: usize,
    indicator: String,
}

/// Execute the `info` command
pub fn run_info(args: &InfoArgs) -> Result<()> {
    match &args.config {
        Some(path) => info!(config = %path.display(), "Loading configuration info"),
        None => info!("Using built-in configuration"),
    }

    let config = load_config(args.config.as_deref())?;
    let info = build_info(&config);

    if args.json {
        let json = serde_json::to_string_pretty(&info).context("Failed to serialize info")?;
        println!("{}", json);
    } else {
        print_info(&info);
    }

    Ok(())
}

fn build_info(config: &DescriberConfig) -> DescriberInfo {
    let (describable, disabled): (Vec<ContentType>, Vec<ContentType>) = ContentType::ALL
        .into_iter()
        .partition(ContentType::is_describable);

    DescriberInfo {
        version: format!("{:?}", config.version),
        table: config.content.table.clone(),
        truncation: TruncationInfo {
            text_max_chars: config.truncation.text_max_chars,
            html_max_chars: config.truncation.html_max_chars,
            indicator: config.truncation.indicator.clone(),
        },
        describable_types: describable.iter().map(ContentType::as_str).collect(),
        disabled_types: disabled.iter().map(ContentType::as_str).collect(),
    }
}

fn print_info(info: &DescriberInfo) {
    println!("╔══════════════════════════════════════════════════════════════╗");
    println!("║               Undo Describe Configuration                    ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("📋 Records");
    println!("   ├─ Version: {}", info.version);
    println!("   └─ Table: {}", info.table);

    println!("\n✂️  Truncation");
    println!("   ├─ Text: {} visible chars, word-safe", info.truncation.text_max_chars);
    println!("   ├─ HTML: {} chars after escaping", info.truncation.html_max_chars);
    println!("   └─ Indicator: {:?}", info.truncation.indicator);

    println!("\n📝 Content Types ({})", info.describable_types.len());
    for (i, name) in info.describable_types.iter().enumerate() {
        let prefix = if i == info.describable_types.len() - 1 {
            "└─"
        } else {
            "├─"
        };
        println!("   {} {}", prefix, name);
    }

    if !info.disabled_types.is_empty() {
        println!("\n🚫 Without description: {}", info.disabled_types.join(", "));
    }

    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_info_partitions_types() {
        let info = build_info(&DescriberConfig::default());
        assert_eq!(info.table, "content");
        assert_eq!(info.describable_types.len(), 16);
        assert_eq!(info.disabled_types, vec!["image", "gallery"]);
        assert!(info.describable_types.contains(&"accordionStart"));
    }
}
