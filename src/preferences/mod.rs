//! Preferences
//!
//! A small persisted key-value store for user preferences. Only two keys
//! exist: `"language"` (`zh` / `en`) and `"theme"` (`light` / `dark`). The
//! composer never reads this store itself; callers resolve a language from
//! it and pass that in.

use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{ReadmeError, Result};
use crate::i18n::Language;

pub const LANGUAGE_KEY: &str = "language";
pub const THEME_KEY: &str = "theme";

/// UI color theme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggle(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = ReadmeError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            _ => Err(ReadmeError::UnknownTheme(s.to_string())),
        }
    }
}

/// Preference keys
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreferenceKey {
    Language,
    Theme,
}

impl PreferenceKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            PreferenceKey::Language => LANGUAGE_KEY,
            PreferenceKey::Theme => THEME_KEY,
        }
    }
}

impl FromStr for PreferenceKey {
    type Err = ReadmeError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim() {
            LANGUAGE_KEY => Ok(PreferenceKey::Language),
            THEME_KEY => Ok(PreferenceKey::Theme),
            other => Err(ReadmeError::Other(format!("Unknown preference key: {}", other))),
        }
    }
}

/// File-backed preference store
#[derive(Debug, Clone)]
pub struct PreferenceStore {
    path: PathBuf,
    values: BTreeMap<String, String>,
}

impl PreferenceStore {
    /// Default store location under the user config directory
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .map(|d| d.join("readmecraft").join("preferences.json"))
            .unwrap_or_else(|| PathBuf::from(".readmecraft.preferences.json"))
    }

    /// Open the store at `path`; a missing file is an empty store
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let values = if path.exists() {
            let content = std::fs::read_to_string(&path)?;
            serde_json::from_str(&content)?
        } else {
            debug!("no preference file at {:?}", path);
            BTreeMap::new()
        };
        Ok(Self { path, values })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn get(&self, key: PreferenceKey) -> Option<&str> {
        self.values.get(key.as_str()).map(String::as_str)
    }

    /// Stored language; unreadable values are treated as unset
    pub fn language(&self) -> Option<Language> {
        self.get(PreferenceKey::Language)?.parse().ok()
    }

    /// Stored theme, `light` when unset or unreadable
    pub fn theme(&self) -> Theme {
        self.get(PreferenceKey::Theme)
            .and_then(|t| t.parse().ok())
            .unwrap_or_default()
    }

    /// Validate and set a value (not yet persisted)
    pub fn set(&mut self, key: PreferenceKey, value: &str) -> Result<()> {
        let normalized = match key {
            PreferenceKey::Language => value.parse::<Language>()?.to_string(),
            PreferenceKey::Theme => value.parse::<Theme>()?.to_string(),
        };
        self.values.insert(key.as_str().to_string(), normalized);
        Ok(())
    }

    /// Flip a preference to its other value and persist it
    pub fn toggle(&mut self, key: PreferenceKey) -> Result<String> {
        let next = match key {
            PreferenceKey::Language => {
                let current = self
                    .language()
                    .or_else(Language::from_env)
                    .unwrap_or_default();
                current.toggle().to_string()
            }
            PreferenceKey::Theme => self.theme().toggle().to_string(),
        };
        self.set(key, &next)?;
        self.save()?;
        Ok(next)
    }

    pub fn save(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(&self.path, serde_json::to_string_pretty(&self.values)?)?;
        Ok(())
    }

    /// All stored entries, sorted by key
    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}
