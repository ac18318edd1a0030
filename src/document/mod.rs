//! Profile Document
//!
//! The on-disk description of a profile: identity, per-block overrides and
//! block order, in YAML or JSON. Loading builds a registry with three layers:
//! 1. The seeded catalog defaults
//! 2. The document (identity patch, block overrides, order)
//! 3. Command-line overrides (`--enable` / `--disable`)

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::blocks::{BlockRegistry, ProfileIdentity};
use crate::error::{ReadmeError, Result};
use crate::i18n::Language;

/// Serialized form of a profile
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfileDocument {
    /// Preferred output language
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<Language>,

    /// Partial identity, merged over the empty default
    #[serde(default)]
    pub identity: ProfileIdentity,

    /// Per-block overrides, applied in file order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub blocks: Vec<BlockOverride>,

    /// Desired order of block ids; unlisted blocks keep their catalog order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub order: Vec<String>,
}

/// Override for one catalog block
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BlockOverride {
    pub id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,

    /// Partial config, shallow-merged into the block's defaults
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config: Option<serde_json::Value>,
}

/// Document serialization format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Yaml,
    Json,
}

impl DocumentFormat {
    /// `.json` is JSON; everything else is treated as YAML
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => DocumentFormat::Json,
            _ => DocumentFormat::Yaml,
        }
    }
}

/// Command-line overrides applied after the document
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub enable: Vec<String>,
    pub disable: Vec<String>,
}

impl ProfileDocument {
    pub fn parse(content: &str, format: DocumentFormat) -> Result<Self> {
        match format {
            DocumentFormat::Yaml => Ok(serde_yaml::from_str(content)?),
            DocumentFormat::Json => Ok(serde_json::from_str(content)?),
        }
    }

    /// Load a document, picking the format from the file extension
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content, DocumentFormat::from_path(path))
    }

    pub fn serialize_as(&self, format: DocumentFormat) -> Result<String> {
        match format {
            DocumentFormat::Yaml => Ok(serde_yaml::to_string(self)?),
            DocumentFormat::Json => Ok(serde_json::to_string_pretty(self)?),
        }
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let content = self.serialize_as(DocumentFormat::from_path(path))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// A filled-in example used by `init`
    pub fn starter(identity: ProfileIdentity) -> Self {
        let username = identity.username.clone().unwrap_or_default();
        Self {
            language: None,
            identity,
            blocks: vec![
                BlockOverride {
                    id: "about".to_string(),
                    enabled: Some(true),
                    config: Some(serde_json::json!({
                        "content": "🔭 I'm currently working on ...\n\n🌱 I'm currently learning ..."
                    })),
                },
                BlockOverride {
                    id: "skills".to_string(),
                    enabled: Some(true),
                    config: Some(serde_json::json!({
                        "skills": ["Rust", "TypeScript", "Docker"],
                        "layout": "badges"
                    })),
                },
                BlockOverride {
                    id: "social".to_string(),
                    enabled: Some(false),
                    config: Some(serde_json::json!({
                        "platforms": { "github": username }
                    })),
                },
            ],
            order: Vec::new(),
        }
    }

    /// Build a registry from catalog defaults, this document and CLI overrides
    pub fn build_registry(&self, cli: &CliOverrides) -> Result<BlockRegistry> {
        let mut registry = BlockRegistry::new();
        self.apply_to(&mut registry)?;
        apply_cli_overrides(&mut registry, cli);
        Ok(registry)
    }

    /// Apply this document on top of an existing registry
    pub fn apply_to(&self, registry: &mut BlockRegistry) -> Result<()> {
        registry.update_profile_identity(self.identity.clone());

        for block in &self.blocks {
            if registry.block(&block.id).is_none() {
                warn!("Document references unknown block: {}", block.id);
                continue;
            }
            if let Some(enabled) = block.enabled {
                registry.set_enabled(&block.id, enabled);
            }
            if let Some(ref config) = block.config {
                registry.update_block_config_json(&block.id, config)?;
            }
        }

        for id in &self.order {
            if registry.block(id).is_none() {
                warn!("Unknown block id in order: {}", id);
            }
        }
        if !self.order.is_empty() {
            registry.reorder_blocks(&self.order);
        }

        debug!("document applied, registry version {}", registry.version());
        Ok(())
    }
}

fn apply_cli_overrides(registry: &mut BlockRegistry, cli: &CliOverrides) {
    for id in &cli.enable {
        if !registry.set_enabled(id, true) {
            warn!("Unknown block id in --enable: {}", id);
        }
    }
    for id in &cli.disable {
        if !registry.set_enabled(id, false) {
            warn!("Unknown block id in --disable: {}", id);
        }
    }
}

impl std::str::FromStr for ProfileDocument {
    type Err = ReadmeError;

    /// Parse YAML (a superset of JSON)
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::parse(s, DocumentFormat::Yaml)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blocks::BlockConfig;

    const SAMPLE: &str = r#"
language: en
identity:
  name: Ada
  username: ada
blocks:
  - id: skills
    enabled: true
    config:
      skills: [Go, Rust]
  - id: custom
    enabled: true
order: [skills, header]
"#;

    #[test]
    fn test_parse_yaml() {
        let doc: ProfileDocument = SAMPLE.parse().unwrap();
        assert_eq!(doc.language, Some(Language::En));
        assert_eq!(doc.identity.name.as_deref(), Some("Ada"));
        assert_eq!(doc.blocks.len(), 2);
        assert_eq!(doc.order, vec!["skills", "header"]);
    }

    #[test]
    fn test_build_registry_layers() {
        let doc: ProfileDocument = SAMPLE.parse().unwrap();
        let cli = CliOverrides {
            disable: vec!["stats".to_string()],
            ..Default::default()
        };
        let registry = doc.build_registry(&cli).unwrap();

        let ids: Vec<&str> = registry
            .enabled_ordered()
            .iter()
            .map(|b| b.id.as_str())
            .collect();
        // about keeps its catalog order (2), which ties with header's new order
        assert_eq!(ids, vec!["skills", "header", "about"]);

        match &registry.block("skills").unwrap().config {
            BlockConfig::Skills(config) => assert_eq!(config.skills, vec!["Go", "Rust"]),
            other => panic!("unexpected config: {:?}", other),
        }
    }

    #[test]
    fn test_bad_config_is_an_error() {
        let doc: ProfileDocument = "blocks:\n  - id: stats\n    config:\n      showStreak: maybe\n"
            .parse()
            .unwrap();
        assert!(doc.build_registry(&CliOverrides::default()).is_err());
    }

    #[test]
    fn test_format_from_path() {
        assert_eq!(DocumentFormat::from_path(Path::new("p.json")), DocumentFormat::Json);
        assert_eq!(DocumentFormat::from_path(Path::new("p.yaml")), DocumentFormat::Yaml);
        assert_eq!(DocumentFormat::from_path(Path::new("profile")), DocumentFormat::Yaml);
    }

    #[test]
    fn test_starter_round_trips_through_yaml() {
        let identity = ProfileIdentity {
            username: Some("ada".to_string()),
            ..Default::default()
        };
        let doc = ProfileDocument::starter(identity);
        let yaml = doc.serialize_as(DocumentFormat::Yaml).unwrap();
        let parsed = ProfileDocument::parse(&yaml, DocumentFormat::Yaml).unwrap();
        let registry = parsed.build_registry(&CliOverrides::default()).unwrap();
        assert_eq!(registry.social_platforms().github, "ada");
    }
}
