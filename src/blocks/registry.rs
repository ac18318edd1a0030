//! Block Registry
//!
//! Owns the profile identity and the block collection. Mutations are limited
//! to identity updates, toggling, config merges and reordering; the catalog
//! itself never grows or shrinks. Derived views are recomputed on every read.
//!
//! Unknown block ids are silently ignored by every mutation (the call returns
//! `false`), since callers only ever hold ids from the fixed catalog.

use serde::Serialize;
use tracing::{debug, warn};

use super::catalog::default_blocks;
use super::config::{Platforms, SocialConfig};
use super::identity::ProfileIdentity;
use super::types::{Block, BlockConfig, BlockType, ConfigPatch};
use crate::error::{ReadmeError, Result};
use crate::i18n::{block_title, Language};
use crate::render;

/// Read-only view of a block with its title resolved for one language
#[derive(Debug, Clone, Serialize)]
pub struct LocalizedBlock<'a> {
    pub id: &'a str,
    #[serde(rename = "type")]
    pub block_type: BlockType,
    pub title: &'static str,
    pub enabled: bool,
    pub order: i32,
    #[serde(skip)]
    pub block: &'a Block,
}

/// Holder of the block collection and the shared profile identity
#[derive(Debug, Clone)]
pub struct BlockRegistry {
    identity: ProfileIdentity,
    blocks: Vec<Block>,
    version: u64,
}

impl Default for BlockRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl BlockRegistry {
    /// Registry seeded with the default catalog and an empty identity
    pub fn new() -> Self {
        Self::with_identity(ProfileIdentity::default())
    }

    pub fn with_identity(identity: ProfileIdentity) -> Self {
        Self {
            identity,
            blocks: default_blocks(),
            version: 0,
        }
    }

    pub fn identity(&self) -> &ProfileIdentity {
        &self.identity
    }

    /// All blocks in catalog order
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn block(&self, id: &str) -> Option<&Block> {
        self.blocks.iter().find(|b| b.id == id)
    }

    /// Incremented by every mutation that changed state
    pub fn version(&self) -> u64 {
        self.version
    }

    fn block_mut(&mut self, id: &str) -> Option<&mut Block> {
        self.blocks.iter_mut().find(|b| b.id == id)
    }

    fn bump(&mut self) {
        self.version += 1;
    }

    /// Merge a partial identity into the current one
    pub fn update_profile_identity(&mut self, patch: ProfileIdentity) {
        self.identity.merge(patch);
        self.bump();
    }

    /// Flip a block's enabled flag
    pub fn toggle_block(&mut self, id: &str) -> bool {
        let Some(block) = self.block_mut(id) else {
            debug!("toggle ignored for unknown block: {}", id);
            return false;
        };
        block.enabled = !block.enabled;
        debug!("block {} enabled={}", id, block.enabled);
        self.bump();
        true
    }

    /// Set a block's enabled flag explicitly
    pub fn set_enabled(&mut self, id: &str, enabled: bool) -> bool {
        let Some(block) = self.block_mut(id) else {
            debug!("set_enabled ignored for unknown block: {}", id);
            return false;
        };
        if block.enabled != enabled {
            block.enabled = enabled;
            self.bump();
        }
        true
    }

    /// Shallow-merge a typed patch into a block's configuration.
    ///
    /// A patch built for another block type is ignored with a warning.
    pub fn update_block_config(&mut self, id: &str, patch: ConfigPatch) -> bool {
        let Some(block) = self.block_mut(id) else {
            debug!("config update ignored for unknown block: {}", id);
            return false;
        };
        let patch_type = patch.block_type();
        if !block.config.apply(patch) {
            warn!(
                "config patch for {} does not fit block {} ({})",
                patch_type,
                id,
                block.block_type()
            );
            return false;
        }
        self.bump();
        true
    }

    /// Shallow-merge a JSON object into a block's configuration.
    ///
    /// The object is decoded against the block's own config shape. Returns
    /// `Ok(false)` for unknown ids.
    pub fn update_block_config_json(&mut self, id: &str, value: &serde_json::Value) -> Result<bool> {
        let Some(block_type) = self.block(id).map(Block::block_type) else {
            debug!("config update ignored for unknown block: {}", id);
            return Ok(false);
        };
        let patch = ConfigPatch::from_json(block_type, value).map_err(|e| match e {
            ReadmeError::Json(err) => ReadmeError::InvalidConfig {
                id: id.to_string(),
                message: err.to_string(),
            },
            other => other,
        })?;
        Ok(self.update_block_config(id, patch))
    }

    /// Assign `order = index + 1` to each listed block, in sequence.
    ///
    /// Blocks not listed keep their previous order; unknown ids are skipped.
    pub fn reorder_blocks<S: AsRef<str>>(&mut self, ordered_ids: &[S]) {
        let mut changed = false;
        for (index, id) in ordered_ids.iter().enumerate() {
            let id = id.as_ref();
            match self.block_mut(id) {
                Some(block) => {
                    block.order = index as i32 + 1;
                    changed = true;
                }
                None => debug!("reorder skipped unknown block: {}", id),
            }
        }
        if changed {
            self.bump();
        }
    }

    /// Enabled blocks sorted by `order`; ties keep catalog position
    pub fn enabled_ordered(&self) -> Vec<&Block> {
        let mut enabled: Vec<&Block> = self.blocks.iter().filter(|b| b.enabled).collect();
        // sort_by_key is stable
        enabled.sort_by_key(|b| b.order);
        enabled
    }

    /// Every block with its title resolved for `language`
    pub fn localized_blocks(&self, language: Language) -> Vec<LocalizedBlock<'_>> {
        self.blocks
            .iter()
            .map(|block| LocalizedBlock {
                id: &block.id,
                block_type: block.block_type(),
                title: block_title(language, block.block_type()),
                enabled: block.enabled,
                order: block.order,
                block,
            })
            .collect()
    }

    /// The social block's platforms, whether or not that block is enabled
    pub fn social_platforms(&self) -> &Platforms {
        self.blocks
            .iter()
            .find_map(|b| match &b.config {
                BlockConfig::Social(SocialConfig { platforms }) => Some(platforms),
                _ => None,
            })
            .unwrap_or(&EMPTY_PLATFORMS)
    }

    /// Compose the document from the current state
    pub fn compose(&self, language: Language) -> String {
        render::compose(
            &self.identity,
            &self.enabled_ordered(),
            self.social_platforms(),
            language,
        )
    }
}

static EMPTY_PLATFORMS: Platforms = Platforms {
    wechat: String::new(),
    weibo: String::new(),
    bilibili: String::new(),
    zhihu: String::new(),
    juejin: String::new(),
    twitter: String::new(),
    linkedin: String::new(),
    github: String::new(),
    discord: String::new(),
    youtube: String::new(),
    instagram: String::new(),
};
