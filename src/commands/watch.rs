//! Watch Command
//!
//! Implements `readmecraft watch`: regenerates the README every time the
//! profile document changes. Each change is a full recomputation.

use std::path::{Path, PathBuf};
use std::sync::mpsc;

use anyhow::{Context, Result};
use console::style;
use notify::{Event, EventKind, RecursiveMode, Watcher};
use tracing::{debug, warn};

use super::generate::{execute_generate, GenerateOptions};
use crate::config::Config;
use crate::error::ReadmeError;

/// Options for the watch command
#[derive(Debug, Clone, Default)]
pub struct WatchOptions {
    /// Generation settings reused for every rebuild
    pub generate: GenerateOptions,
}

/// Execute the watch command; blocks until the watcher shuts down
pub fn execute_watch(options: WatchOptions, config: &Config) -> Result<()> {
    let profile = options
        .generate
        .profile
        .clone()
        .unwrap_or_else(|| config.profile.clone());
    if !profile.exists() {
        anyhow::bail!(
            "Profile {} not found. Run `readmecraft init` first.",
            profile.display()
        );
    }

    let generate = GenerateOptions {
        profile: Some(profile.clone()),
        stdout: false,
        diff: false,
        check: false,
        ..options.generate
    };

    regenerate(&generate, config);

    let (tx, rx) = mpsc::channel::<notify::Result<Event>>();
    let mut watcher = notify::recommended_watcher(tx).map_err(ReadmeError::from)?;

    // Editors often replace the file, so watch its directory
    let dir = watch_dir(&profile);
    watcher
        .watch(&dir, RecursiveMode::NonRecursive)
        .map_err(ReadmeError::from)
        .with_context(|| format!("Failed to watch {}", dir.display()))?;

    println!(
        "{} Watching {} (Ctrl+C to stop)",
        style("→").cyan(),
        profile.display()
    );

    for result in rx {
        match result {
            Ok(event) => {
                if is_profile_change(&event, &profile) {
                    debug!("profile changed: {:?}", event.kind);
                    regenerate(&generate, config);
                }
            }
            Err(e) => warn!("watch error: {}", e),
        }
    }

    Ok(())
}

fn regenerate(options: &GenerateOptions, config: &Config) {
    if let Err(e) = execute_generate(options.clone(), config) {
        eprintln!("{} {:#}", style("✗").red(), e);
    }
}

fn watch_dir(profile: &Path) -> PathBuf {
    match profile.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

fn is_profile_change(event: &Event, profile: &Path) -> bool {
    if matches!(event.kind, EventKind::Access(_)) {
        return false;
    }
    let Some(name) = profile.file_name() else {
        return false;
    };
    event.paths.iter().any(|p| p.file_name() == Some(name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use notify::event::{AccessKind, ModifyKind};

    #[test]
    fn test_watch_dir() {
        assert_eq!(watch_dir(Path::new("profile.yaml")), PathBuf::from("."));
        assert_eq!(watch_dir(Path::new("cfg/profile.yaml")), PathBuf::from("cfg"));
    }

    #[test]
    fn test_profile_change_filter() {
        let profile = Path::new("cfg/profile.yaml");

        let modified = Event::new(EventKind::Modify(ModifyKind::Any))
            .add_path(PathBuf::from("/abs/cfg/profile.yaml"));
        assert!(is_profile_change(&modified, profile));

        let other = Event::new(EventKind::Modify(ModifyKind::Any))
            .add_path(PathBuf::from("/abs/cfg/README.md"));
        assert!(!is_profile_change(&other, profile));

        let read = Event::new(EventKind::Access(AccessKind::Any))
            .add_path(PathBuf::from("/abs/cfg/profile.yaml"));
        assert!(!is_profile_change(&read, profile));
    }
}
