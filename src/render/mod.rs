//! Markdown Composer
//!
//! Turns the enabled, ordered blocks plus the profile identity into one
//! markdown document. Each block type has its own renderer; the composer
//! trims every fragment, drops the empty ones and joins the rest with
//! [`SEPARATOR`].
//!
//! Composition is a pure function of its inputs: same identity, blocks and
//! language always give byte-identical output.

mod about;
mod activity;
mod blog;
mod header;
mod markup;
mod projects;
mod skills;
mod social;
mod stats;

use crate::blocks::{Block, BlockConfig, Platforms, ProfileIdentity};
use crate::i18n::Language;

pub use blog::{BLOG_END_MARKER, BLOG_START_MARKER};
pub use social::social_links;

/// Placed between rendered blocks: a hard line break, a blank line, a
/// horizontal rule and another blank line.
pub const SEPARATOR: &str = "  \n\n---\n\n";

/// Shared, read-only inputs for every renderer
#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'a> {
    pub identity: &'a ProfileIdentity,
    /// Social platforms, read by the header even when the social block is off
    pub platforms: &'a Platforms,
    pub language: Language,
}

/// Compose the document from blocks already filtered and sorted for output
pub fn compose(
    identity: &ProfileIdentity,
    blocks: &[&Block],
    platforms: &Platforms,
    language: Language,
) -> String {
    let ctx = RenderContext {
        identity,
        platforms,
        language,
    };

    join_sections(blocks.iter().map(|block| render_block(block, &ctx)))
}

/// Render a single block with its type's renderer
pub fn render_block(block: &Block, ctx: &RenderContext<'_>) -> String {
    match &block.config {
        BlockConfig::Header(config) => header::render(config, ctx),
        BlockConfig::About(config) => about::render(config, ctx),
        BlockConfig::Stats(config) => stats::render(config, ctx),
        BlockConfig::Skills(config) => skills::render(config, ctx),
        BlockConfig::Projects(config) => projects::render(config, ctx),
        BlockConfig::Social(config) => social::render(config, ctx),
        BlockConfig::Blog(config) => blog::render(config, ctx),
        BlockConfig::Activity(config) => activity::render(config, ctx),
    }
}

/// Trim each fragment, skip empty ones, join the rest with [`SEPARATOR`]
pub fn join_sections<I>(sections: I) -> String
where
    I: IntoIterator<Item = String>,
{
    sections
        .into_iter()
        .map(|section| section.trim().to_string())
        .filter(|section| !section.is_empty())
        .collect::<Vec<_>>()
        .join(SEPARATOR)
}
