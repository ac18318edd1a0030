//! Blocks Command
//!
//! Implements `readmecraft blocks`: lists every block with its localized
//! title, enabled flag and order.

use std::path::PathBuf;

use anyhow::Result;
use console::style;

use super::{build_registry, load_document, resolve_language};
use crate::config::Config;
use crate::document::CliOverrides;
use crate::i18n::Language;

/// Options for the blocks command
#[derive(Debug, Clone, Default)]
pub struct BlocksOptions {
    /// Profile document (defaults to the project config's `profile`)
    pub profile: Option<PathBuf>,
    /// Output as JSON
    pub json: bool,
    /// Title language
    pub lang: Option<Language>,
    /// Preference store location (defaults to the user config dir)
    pub preferences: Option<PathBuf>,
}

/// Execute the blocks command
pub fn execute_blocks(options: BlocksOptions, config: &Config) -> Result<()> {
    let profile = options.profile.clone().unwrap_or_else(|| config.profile.clone());
    let document = load_document(&profile)?;
    let registry = build_registry(&document, &CliOverrides::default())?;
    let language = resolve_language(
        options.lang,
        &document,
        config,
        options.preferences.as_deref(),
    );

    let mut blocks = registry.localized_blocks(language);
    blocks.sort_by_key(|b| b.order);

    if options.json {
        println!("{}", serde_json::to_string_pretty(&blocks)?);
        return Ok(());
    }

    println!("{} Blocks ({})\n", style("→").cyan(), language);
    for block in &blocks {
        let marker = if block.enabled {
            style("✓").green()
        } else {
            style("✗").dim()
        };
        println!(
            "  {} {:>2}  {:<10} {}",
            marker,
            block.order,
            block.id,
            style(block.title).bold()
        );
    }

    let enabled = blocks.iter().filter(|b| b.enabled).count();
    println!("\n  {} of {} enabled", enabled, blocks.len());
    Ok(())
}
