//! Small markdown/HTML building helpers shared by the renderers

use crate::blocks::BlockType;
use crate::i18n::{block_title, Language};

/// `## <emoji> <localized title>`
pub(super) fn section_heading(emoji: &str, block_type: BlockType, language: Language) -> String {
    format!("## {} {}", emoji, block_title(language, block_type))
}

pub(super) fn html_comment(text: &str) -> String {
    format!("<!-- {} -->", text)
}

/// An image centered with a wrapping `div`
pub(super) fn centered_image(src: &str, alt: &str) -> String {
    format!(
        "<div align=\"center\">\n  <img src=\"{}\" alt=\"{}\" />\n</div>",
        src, alt
    )
}

/// Escape text for a shields.io static badge path segment.
///
/// Dashes and underscores are doubled (shields treats single ones as
/// separators / spaces), then the result is percent-encoded.
pub(super) fn shields_text(text: &str) -> String {
    let escaped = text.replace('-', "--").replace('_', "__");
    urlencoding::encode(&escaped).into_owned()
}
