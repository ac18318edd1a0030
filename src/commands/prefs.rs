//! Prefs Command
//!
//! Implements `readmecraft prefs`: show, set or toggle stored preferences.

use std::path::PathBuf;

use anyhow::{Context, Result};
use console::style;

use crate::preferences::{PreferenceKey, PreferenceStore};

/// Subcommand types for the prefs command
#[derive(Debug, Clone)]
pub enum PrefsSubcommand {
    Show,
    Set { key: String, value: String },
    Toggle { key: String },
}

/// Options for the prefs command
#[derive(Debug, Clone)]
pub struct PrefsOptions {
    pub subcommand: PrefsSubcommand,
    /// Preference store location (defaults to the user config dir)
    pub path: Option<PathBuf>,
}

/// Execute the prefs command
pub fn execute_prefs(options: PrefsOptions) -> Result<()> {
    let path = options.path.unwrap_or_else(PreferenceStore::default_path);
    let mut store = PreferenceStore::open(&path)
        .with_context(|| format!("Failed to read preferences at {}", path.display()))?;

    match options.subcommand {
        PrefsSubcommand::Show => {
            println!("{} Preferences ({})\n", style("→").cyan(), store.path().display());
            let mut empty = true;
            for (key, value) in store.entries() {
                println!("  {} = {}", style(key).bold(), value);
                empty = false;
            }
            if empty {
                println!("  {}", style("(none set)").dim());
            }
            println!("\n  theme in effect: {}", store.theme());
        }
        PrefsSubcommand::Set { key, value } => {
            let key: PreferenceKey = key.parse()?;
            store.set(key, &value)?;
            store.save()?;
            println!(
                "{} {} = {}",
                style("✓").green(),
                key.as_str(),
                store.get(key).unwrap_or_default()
            );
        }
        PrefsSubcommand::Toggle { key } => {
            let key: PreferenceKey = key.parse()?;
            let value = store.toggle(key)?;
            println!("{} {} = {}", style("✓").green(), key.as_str(), value);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Language;

    #[test]
    fn test_set_then_toggle_language() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.json");

        execute_prefs(PrefsOptions {
            subcommand: PrefsSubcommand::Set {
                key: "language".to_string(),
                value: "en".to_string(),
            },
            path: Some(path.clone()),
        })
        .unwrap();
        execute_prefs(PrefsOptions {
            subcommand: PrefsSubcommand::Toggle {
                key: "language".to_string(),
            },
            path: Some(path.clone()),
        })
        .unwrap();

        let store = PreferenceStore::open(&path).unwrap();
        assert_eq!(store.language(), Some(Language::Zh));
    }

    #[test]
    fn test_unknown_key_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = execute_prefs(PrefsOptions {
            subcommand: PrefsSubcommand::Toggle {
                key: "font".to_string(),
            },
            path: Some(dir.path().join("prefs.json")),
        });
        assert!(result.is_err());
    }
}
