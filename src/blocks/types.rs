//! Block Types
//!
//! The closed set of block variants and the block record itself. A block's
//! type is carried by its configuration variant, so a block can never hold a
//! configuration shape that does not match its type.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::config::*;
use crate::error::{ReadmeError, Result};

/// Supported block types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockType {
    Header,
    About,
    Stats,
    Skills,
    Projects,
    Social,
    Blog,
    Activity,
}

impl BlockType {
    /// All block types, in catalog order
    pub fn all() -> &'static [BlockType] {
        &[
            BlockType::Header,
            BlockType::About,
            BlockType::Stats,
            BlockType::Skills,
            BlockType::Projects,
            BlockType::Social,
            BlockType::Blog,
            BlockType::Activity,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BlockType::Header => "header",
            BlockType::About => "about",
            BlockType::Stats => "stats",
            BlockType::Skills => "skills",
            BlockType::Projects => "projects",
            BlockType::Social => "social",
            BlockType::Blog => "blog",
            BlockType::Activity => "activity",
        }
    }
}

impl fmt::Display for BlockType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BlockType {
    type Err = ReadmeError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        BlockType::all()
            .iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(s.trim()))
            .copied()
            .ok_or_else(|| ReadmeError::UnknownBlockType(s.to_string()))
    }
}

/// Type-specific configuration, tagged by block type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "config", rename_all = "lowercase")]
pub enum BlockConfig {
    Header(HeaderConfig),
    About(AboutConfig),
    Stats(StatsConfig),
    Skills(SkillsConfig),
    Projects(ProjectsConfig),
    Social(SocialConfig),
    Blog(BlogConfig),
    Activity(ActivityConfig),
}

impl BlockConfig {
    /// Default configuration for a block type
    pub fn default_for(block_type: BlockType) -> Self {
        match block_type {
            BlockType::Header => BlockConfig::Header(HeaderConfig::default()),
            BlockType::About => BlockConfig::About(AboutConfig::default()),
            BlockType::Stats => BlockConfig::Stats(StatsConfig::default()),
            BlockType::Skills => BlockConfig::Skills(SkillsConfig::default()),
            BlockType::Projects => BlockConfig::Projects(ProjectsConfig::default()),
            BlockType::Social => BlockConfig::Social(SocialConfig::default()),
            BlockType::Blog => BlockConfig::Blog(BlogConfig::default()),
            BlockType::Activity => BlockConfig::Activity(ActivityConfig::default()),
        }
    }

    pub fn block_type(&self) -> BlockType {
        match self {
            BlockConfig::Header(_) => BlockType::Header,
            BlockConfig::About(_) => BlockType::About,
            BlockConfig::Stats(_) => BlockType::Stats,
            BlockConfig::Skills(_) => BlockType::Skills,
            BlockConfig::Projects(_) => BlockType::Projects,
            BlockConfig::Social(_) => BlockType::Social,
            BlockConfig::Blog(_) => BlockType::Blog,
            BlockConfig::Activity(_) => BlockType::Activity,
        }
    }

    /// Merge a patch into this configuration.
    ///
    /// Returns `false` without touching anything when the patch was built for
    /// a different block type.
    pub fn apply(&mut self, patch: ConfigPatch) -> bool {
        match (self, patch) {
            (BlockConfig::Header(c), ConfigPatch::Header(p)) => c.merge(p),
            (BlockConfig::About(c), ConfigPatch::About(p)) => c.merge(p),
            (BlockConfig::Stats(c), ConfigPatch::Stats(p)) => c.merge(p),
            (BlockConfig::Skills(c), ConfigPatch::Skills(p)) => c.merge(p),
            (BlockConfig::Projects(c), ConfigPatch::Projects(p)) => c.merge(p),
            (BlockConfig::Social(c), ConfigPatch::Social(p)) => c.merge(p),
            (BlockConfig::Blog(c), ConfigPatch::Blog(p)) => c.merge(p),
            (BlockConfig::Activity(c), ConfigPatch::Activity(p)) => c.merge(p),
            _ => return false,
        }
        true
    }
}

/// Partial configuration update for one block type
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigPatch {
    Header(HeaderPatch),
    About(AboutPatch),
    Stats(StatsPatch),
    Skills(SkillsPatch),
    Projects(ProjectsPatch),
    Social(SocialPatch),
    Blog(BlogPatch),
    Activity(ActivityPatch),
}

impl ConfigPatch {
    /// Decode a JSON object into the patch shape of `block_type`.
    ///
    /// Unknown keys are ignored; a key with the wrong value type is an error.
    pub fn from_json(block_type: BlockType, value: &serde_json::Value) -> Result<Self> {
        if !value.is_object() {
            return Err(ReadmeError::InvalidConfig {
                id: block_type.to_string(),
                message: "config patch must be an object".to_string(),
            });
        }
        let value = value.clone();
        let patch = match block_type {
            BlockType::Header => ConfigPatch::Header(serde_json::from_value(value)?),
            BlockType::About => ConfigPatch::About(serde_json::from_value(value)?),
            BlockType::Stats => ConfigPatch::Stats(serde_json::from_value(value)?),
            BlockType::Skills => ConfigPatch::Skills(serde_json::from_value(value)?),
            BlockType::Projects => ConfigPatch::Projects(serde_json::from_value(value)?),
            BlockType::Social => ConfigPatch::Social(serde_json::from_value(value)?),
            BlockType::Blog => ConfigPatch::Blog(serde_json::from_value(value)?),
            BlockType::Activity => ConfigPatch::Activity(serde_json::from_value(value)?),
        };
        Ok(patch)
    }

    pub fn block_type(&self) -> BlockType {
        match self {
            ConfigPatch::Header(_) => BlockType::Header,
            ConfigPatch::About(_) => BlockType::About,
            ConfigPatch::Stats(_) => BlockType::Stats,
            ConfigPatch::Skills(_) => BlockType::Skills,
            ConfigPatch::Projects(_) => BlockType::Projects,
            ConfigPatch::Social(_) => BlockType::Social,
            ConfigPatch::Blog(_) => BlockType::Blog,
            ConfigPatch::Activity(_) => BlockType::Activity,
        }
    }
}

/// A renderable, toggleable section of the generated document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Block {
    /// Stable identity, fixed at creation
    pub id: String,
    pub enabled: bool,
    /// Rank among enabled blocks; ties keep catalog order
    pub order: i32,
    #[serde(flatten)]
    pub config: BlockConfig,
}

impl Block {
    pub fn new(id: impl Into<String>, config: BlockConfig, enabled: bool, order: i32) -> Self {
        Self {
            id: id.into(),
            enabled,
            order,
            config,
        }
    }

    pub fn block_type(&self) -> BlockType {
        self.config.block_type()
    }
}
