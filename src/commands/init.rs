//! Init Command
//!
//! Implements `readmecraft init`: writes a starter profile document and the
//! project config file.

use std::path::PathBuf;

use anyhow::Result;
use console::style;
use dialoguer::{theme::ColorfulTheme, Input};

use crate::blocks::ProfileIdentity;
use crate::config::{Config, CONFIG_FILE};
use crate::document::ProfileDocument;

/// Options for the init command
#[derive(Debug, Clone, Default)]
pub struct InitOptions {
    /// Force overwrite existing files
    pub force: bool,
    /// Skip interactive prompts
    pub yes: bool,
    /// Profile document path (defaults to `profile.yaml`)
    pub profile: Option<PathBuf>,
    /// Project config path (defaults to `.readmecraft.json`)
    pub config_path: Option<PathBuf>,
}

/// Execute the init command
pub fn execute_init(options: InitOptions) -> Result<()> {
    let config_path = options
        .config_path
        .clone()
        .unwrap_or_else(|| PathBuf::from(CONFIG_FILE));

    let mut config = Config::default();
    if let Some(ref profile) = options.profile {
        config.profile = profile.clone();
    }

    for path in [&config_path, &config.profile] {
        if path.exists() && !options.force {
            eprintln!(
                "{} {} already exists. Use --force to overwrite.",
                style("✗").red(),
                path.display()
            );
            std::process::exit(1);
        }
    }

    let identity = if options.yes {
        ProfileIdentity::default()
    } else {
        prompt_identity()?
    };

    let document = ProfileDocument::starter(identity);
    document.save(&config.profile)?;
    println!("{} Created {}", style("✓").green(), config.profile.display());

    config.save(&config_path)?;
    println!("{} Created {}", style("✓").green(), config_path.display());

    println!("\n{}", style("Next steps:").bold());
    println!(
        "  1. Edit {} to fill in your profile",
        style(config.profile.display()).cyan()
    );
    println!(
        "  2. Run {} to write {}",
        style("readmecraft generate").cyan(),
        config.output.display()
    );

    Ok(())
}

fn prompt_identity() -> Result<ProfileIdentity> {
    println!("{} Profile Setup\n", style("→").cyan());
    let theme = ColorfulTheme::default();

    let name: String = Input::with_theme(&theme)
        .with_prompt("Display name")
        .allow_empty(true)
        .interact_text()?;
    let username: String = Input::with_theme(&theme)
        .with_prompt("GitHub username")
        .allow_empty(true)
        .interact_text()?;
    let title: String = Input::with_theme(&theme)
        .with_prompt("Title")
        .allow_empty(true)
        .interact_text()?;

    Ok(ProfileIdentity {
        name: non_empty(name),
        username: non_empty(username),
        title: non_empty(title),
        ..Default::default()
    })
}

fn non_empty(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
