//! Blocks
//!
//! Block data model and registry: the fixed catalog of toggleable,
//! configurable content blocks plus the shared profile identity.

pub mod catalog;
pub mod config;
pub mod identity;
pub mod registry;
pub mod types;

pub use config::{
    AboutConfig, AboutPatch, ActivityConfig, ActivityPatch, BlogConfig, BlogPatch, HeaderConfig,
    HeaderPatch, Merge, Platform, Platforms, Project, ProjectsConfig, ProjectsPatch, SkillsConfig,
    SkillsLayout, SkillsPatch, SocialConfig, SocialPatch, StatsConfig, StatsPatch,
};
pub use identity::ProfileIdentity;
pub use registry::{BlockRegistry, LocalizedBlock};
pub use types::{Block, BlockConfig, BlockType, ConfigPatch};
