//! About renderer

use super::markup::section_heading;
use super::RenderContext;
use crate::blocks::{AboutConfig, BlockType};
use crate::i18n::{resolve, Text};

pub(super) fn render(config: &AboutConfig, ctx: &RenderContext<'_>) -> String {
    let content = if config.content.trim().is_empty() {
        resolve(ctx.language, Text::AboutPlaceholder)
    } else {
        config.content.as_str()
    };

    format!(
        "{}\n\n{}",
        section_heading("👨‍💻", BlockType::About, ctx.language),
        content
    )
}
