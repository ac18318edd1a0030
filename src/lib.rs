#![forbid(unsafe_code)]

//! # readmecraft
//!
//! Compose a GitHub profile README from a fixed catalog of ordered,
//! toggleable and localized content blocks.
//!
//! ## Features
//!
//! - **Block registry**: eight block types, each with typed configuration
//! - **Deterministic composer**: same inputs, byte-identical markdown
//! - **Bilingual**: Simplified Chinese and English titles and strings
//! - **Profile documents**: YAML or JSON, layered over catalog defaults
//!
//! ## Example
//!
//! ```rust
//! use readmecraft::{BlockRegistry, Language, ProfileIdentity};
//!
//! let mut registry = BlockRegistry::new();
//! registry.update_profile_identity(ProfileIdentity {
//!     name: Some("Ada".to_string()),
//!     username: Some("ada".to_string()),
//!     ..Default::default()
//! });
//! registry.reorder_blocks(&["stats", "header"]);
//!
//! let readme = registry.compose(Language::En);
//! assert!(readme.contains("# Hi 👋, I'm Ada"));
//! ```

pub mod blocks;
pub mod commands;
pub mod config;
pub mod document;
pub mod error;
pub mod export;
pub mod i18n;
pub mod preferences;
pub mod render;

// Re-exports
pub use blocks::{
    Block, BlockConfig, BlockRegistry, BlockType, ConfigPatch, LocalizedBlock, Platform,
    Platforms, ProfileIdentity,
};
pub use config::{Config, LanguageSources};
pub use document::{CliOverrides, DocumentFormat, ProfileDocument};
pub use error::{ReadmeError, Result};
pub use export::{Artifact, Exporter, FileExporter, StdoutExporter};
pub use i18n::{block_title, resolve, Language, Text};
pub use preferences::{PreferenceKey, PreferenceStore, Theme};
pub use render::{compose, SEPARATOR};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
