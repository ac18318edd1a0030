//! Configuration
//!
//! Project configuration loaded from `.readmecraft.json`, plus the rule for
//! deciding which language a run composes in.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::i18n::Language;

/// Default project config file name
pub const CONFIG_FILE: &str = ".readmecraft.json";

fn default_profile() -> PathBuf {
    PathBuf::from("profile.yaml")
}

fn default_output() -> PathBuf {
    PathBuf::from(crate::export::EXPORT_FILE_NAME)
}

/// Project configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Profile document to read
    #[serde(default = "default_profile")]
    pub profile: PathBuf,

    /// Where the generated README is written
    #[serde(default = "default_output")]
    pub output: PathBuf,

    /// Project default language; overrides the user preference
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<Language>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            profile: default_profile(),
            output: default_output(),
            language: None,
        }
    }
}

impl Config {
    /// Load config from a JSON file
    pub fn load<P: AsRef<Path>>(path: P) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Save config to a file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> crate::Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Load `path` if it exists, otherwise use defaults
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> crate::Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }
}

/// Candidate language sources, highest priority first
#[derive(Debug, Clone, Copy, Default)]
pub struct LanguageSources {
    pub cli: Option<Language>,
    pub document: Option<Language>,
    pub project: Option<Language>,
    pub preference: Option<Language>,
    pub locale: Option<Language>,
}

impl LanguageSources {
    /// First language set, falling back to the primary language
    pub fn resolve(&self) -> Language {
        self.cli
            .or(self.document)
            .or(self.project)
            .or(self.preference)
            .or(self.locale)
            .unwrap_or_default()
    }
}
