//! Commands
//!
//! CLI command implementations. Each command lives in its own submodule with
//! an `XOptions` struct and an `execute_x` entry point.

pub mod blocks;
pub mod generate;
pub mod init;
pub mod prefs;
pub mod watch;

pub use blocks::{execute_blocks, BlocksOptions};
pub use generate::{execute_generate, render_profile, GenerateOptions};
pub use init::{execute_init, InitOptions};
pub use prefs::{execute_prefs, PrefsOptions, PrefsSubcommand};
pub use watch::{execute_watch, WatchOptions};

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{debug, warn};

use crate::blocks::BlockRegistry;
use crate::config::{Config, LanguageSources};
use crate::document::{CliOverrides, ProfileDocument};
use crate::i18n::Language;
use crate::preferences::PreferenceStore;

/// Load the profile document, or start from the bare catalog when it is missing
pub(crate) fn load_document(path: &Path) -> Result<ProfileDocument> {
    if !path.exists() {
        debug!("profile {:?} not found, using catalog defaults", path);
        return Ok(ProfileDocument::default());
    }
    ProfileDocument::load(path).with_context(|| format!("Failed to load profile {}", path.display()))
}

/// Build the registry for a document plus command-line overrides
pub(crate) fn build_registry(document: &ProfileDocument, cli: &CliOverrides) -> Result<BlockRegistry> {
    document
        .build_registry(cli)
        .context("Failed to apply profile document")
}

/// Pick the output language for this invocation
pub(crate) fn resolve_language(
    cli: Option<Language>,
    document: &ProfileDocument,
    config: &Config,
    preferences: Option<&Path>,
) -> Language {
    let preference = open_preferences(preferences).and_then(|store| store.language());

    LanguageSources {
        cli,
        document: document.language,
        project: config.language,
        preference,
        locale: Language::from_env(),
    }
    .resolve()
}

/// Open the preference store; an unreadable store counts as empty
pub(crate) fn open_preferences(path: Option<&Path>) -> Option<PreferenceStore> {
    let path = path
        .map(Path::to_path_buf)
        .unwrap_or_else(PreferenceStore::default_path);
    match PreferenceStore::open(&path) {
        Ok(store) => Some(store),
        Err(e) => {
            warn!("Ignoring unreadable preferences at {:?}: {}", path, e);
            None
        }
    }
}

/// Output path from the command line, else from the project config
pub(crate) fn output_path(config: &Config, override_path: Option<PathBuf>) -> PathBuf {
    override_path.unwrap_or_else(|| config.output.clone())
}
