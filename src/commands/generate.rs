//! Generate Command
//!
//! Implements `readmecraft generate`: load the profile, compose the README
//! and hand it to an exporter. `--diff` and `--check` compare against the
//! file already on disk instead of writing.

use std::path::{Path, PathBuf};

use anyhow::Result;
use console::style;
use similar::TextDiff;
use tracing::info;

use super::{build_registry, load_document, output_path, resolve_language};
use crate::config::Config;
use crate::document::CliOverrides;
use crate::export::{Artifact, Exporter, FileExporter, StdoutExporter};
use crate::i18n::Language;

/// Options for the generate command
#[derive(Debug, Clone, Default)]
pub struct GenerateOptions {
    /// Profile document (defaults to the project config's `profile`)
    pub profile: Option<PathBuf>,
    /// Output file (defaults to the project config's `output`)
    pub output: Option<PathBuf>,
    /// Print to stdout instead of writing a file
    pub stdout: bool,
    /// Show a unified diff against the existing output
    pub diff: bool,
    /// Fail when the existing output is out of date
    pub check: bool,
    /// Output language
    pub lang: Option<Language>,
    /// Block ids to force on
    pub enable: Vec<String>,
    /// Block ids to force off
    pub disable: Vec<String>,
    /// Preference store location (defaults to the user config dir)
    pub preferences: Option<PathBuf>,
}

/// Compose the README for a profile document
pub fn render_profile(options: &GenerateOptions, config: &Config) -> Result<String> {
    let profile = options.profile.clone().unwrap_or_else(|| config.profile.clone());
    let document = load_document(&profile)?;

    let cli = CliOverrides {
        enable: options.enable.clone(),
        disable: options.disable.clone(),
    };
    let registry = build_registry(&document, &cli)?;
    let language = resolve_language(
        options.lang,
        &document,
        config,
        options.preferences.as_deref(),
    );

    info!(
        "composing {} enabled blocks in {}",
        registry.enabled_ordered().len(),
        language
    );
    Ok(registry.compose(language))
}

/// Execute the generate command
pub fn execute_generate(options: GenerateOptions, config: &Config) -> Result<()> {
    let body = render_profile(&options, config)?;
    let artifact = Artifact::readme(body);

    if options.stdout {
        StdoutExporter.export(&artifact)?;
        return Ok(());
    }

    let output = output_path(config, options.output.clone());
    let existing = read_existing(&output)?;

    if options.diff || options.check {
        let current = existing.as_deref().unwrap_or("");
        let up_to_date = current == artifact.body;

        if options.diff {
            print_diff(&output, current, &artifact.body);
        }

        if options.check {
            if up_to_date {
                println!("{} {} is up to date", style("✓").green(), output.display());
            } else {
                eprintln!(
                    "{} {} is out of date. Run `readmecraft generate` to update it.",
                    style("✗").red(),
                    output.display()
                );
                std::process::exit(1);
            }
        }
        return Ok(());
    }

    if existing.as_deref() == Some(artifact.body.as_str()) {
        println!("{} {} unchanged", style("•").dim(), output.display());
        return Ok(());
    }

    FileExporter::to_path(&output).export(&artifact)?;
    println!(
        "{} Wrote {} ({} bytes)",
        style("✓").green(),
        output.display(),
        artifact.body.len()
    );
    Ok(())
}

fn read_existing(path: &Path) -> Result<Option<String>> {
    if path.exists() {
        Ok(Some(std::fs::read_to_string(path)?))
    } else {
        Ok(None)
    }
}

fn print_diff(path: &Path, old: &str, new: &str) {
    if old == new {
        println!("{} No changes", style("•").dim());
        return;
    }

    let label = path.display().to_string();
    let old_header = format!("a/{}", label);
    let new_header = format!("b/{}", label);
    let diff = TextDiff::from_lines(old, new);
    let rendered = diff
        .unified_diff()
        .context_radius(3)
        .header(&old_header, &new_header)
        .to_string();

    for line in rendered.lines() {
        if line.starts_with("+++") || line.starts_with("---") {
            println!("{}", style(line).bold());
        } else if line.starts_with('+') {
            println!("{}", style(line).green());
        } else if line.starts_with('-') {
            println!("{}", style(line).red());
        } else if line.starts_with("@@") {
            println!("{}", style(line).cyan());
        } else {
            println!("{}", line);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options_in(dir: &Path) -> GenerateOptions {
        GenerateOptions {
            profile: Some(dir.join("profile.yaml")),
            output: Some(dir.join("README.md")),
            lang: Some(Language::En),
            preferences: Some(dir.join("prefs.json")),
            ..Default::default()
        }
    }

    #[test]
    fn test_render_profile_uses_document() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("profile.yaml"),
            "identity:\n  name: Ada\n  username: ada\n",
        )
        .unwrap();

        let out = render_profile(&options_in(dir.path()), &Config::default()).unwrap();
        assert!(out.starts_with("# Hi 👋, I'm Ada"));
        assert!(out.contains("username=ada"));
    }

    #[test]
    fn test_missing_profile_uses_catalog() {
        let dir = tempfile::tempdir().unwrap();
        let out = render_profile(&options_in(dir.path()), &Config::default()).unwrap();
        assert!(out.contains("<!-- Please set your GitHub username -->"));
    }

    #[test]
    fn test_generate_writes_output() {
        let dir = tempfile::tempdir().unwrap();
        let options = options_in(dir.path());
        execute_generate(options.clone(), &Config::default()).unwrap();

        let written = std::fs::read_to_string(dir.path().join("README.md")).unwrap();
        assert_eq!(written, render_profile(&options, &Config::default()).unwrap());
    }
}
