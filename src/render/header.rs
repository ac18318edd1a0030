//! Header renderer
//!
//! Elements are emitted in a fixed order, each one optional except the name
//! heading: avatar, name, title, typing banner, description, detail line,
//! visitor badge, social row.

use super::social::social_links;
use super::RenderContext;
use crate::blocks::HeaderConfig;
use crate::i18n::{resolve, Text};

const TYPING_SVG_ENDPOINT: &str = "https://readme-typing-svg.demolab.com";

pub(super) fn render(config: &HeaderConfig, ctx: &RenderContext<'_>) -> String {
    let identity = ctx.identity;
    let language = ctx.language;
    let mut header = String::new();

    if config.show_avatar {
        if let Some(avatar) = identity.avatar() {
            header.push_str(&format!(
                "<div align=\"center\">\n  <img src=\"{}\" alt=\"{}\" width=\"200\" height=\"200\" style=\"border-radius: 50%;\" />\n</div>\n\n",
                avatar,
                identity.display_name()
            ));
        }
    }

    header.push_str(&format!(
        "# {}{}\n",
        resolve(language, Text::Greeting),
        identity.display_name()
    ));

    if config.show_title {
        if let Some(title) = identity.title() {
            header.push_str(&format!("## {}\n", title));
        }
    }

    if config.show_typing_svg {
        if let Some(url) = typing_svg_url(&config.typing_texts) {
            header.push_str(&format!(
                "\n<p align=\"center\">\n  <img src=\"{}\" alt=\"Typing SVG\" />\n</p>\n",
                url
            ));
        }
    }

    if let Some(description) = identity.description() {
        header.push_str(&format!("\n{}\n", description));
    }

    let mut details = Vec::new();
    if config.show_location {
        if let Some(location) = identity.location() {
            details.push(format!("📍 {}", location));
        }
    }
    if config.show_website {
        if let Some(website) = identity.website() {
            details.push(format!("🌐 [{}]({})", website, website));
        }
    }
    if let Some(email) = identity.email() {
        details.push(format!("📧 [{}](mailto:{})", email, email));
    }
    if !details.is_empty() {
        header.push_str(&format!("\n{}\n", details.join(" | ")));
    }

    if config.show_visitor_badge {
        if let Some(username) = identity.username() {
            header.push_str(&format!(
                "\n<p align=\"left\">\n  <img src=\"https://komarev.com/ghpvc/?username={}&label={}&color=0e75b6&style=flat\" alt=\"{}\" />\n</p>\n",
                username,
                urlencoding::encode(resolve(language, Text::ProfileViews)),
                username
            ));
        }
    }

    if config.show_social_links {
        let links = social_links(ctx.platforms, language);
        if !links.is_empty() {
            header.push_str(&format!(
                "\n### 🤝 {}\n\n<div align=\"center\">\n\n{}\n\n</div>\n",
                resolve(language, Text::ConnectWithMe),
                links.join(" • ")
            ));
        }
    }

    header
}

/// Typing banner URL; `None` when there is no non-blank phrase
fn typing_svg_url(texts: &[String]) -> Option<String> {
    let lines: Vec<String> = texts
        .iter()
        .map(|t| t.trim())
        .filter(|t| !t.is_empty())
        .map(|t| urlencoding::encode(t).into_owned())
        .collect();

    if lines.is_empty() {
        return None;
    }

    Some(format!(
        "{}?font=Fira+Code&pause=1000&center=true&vCenter=true&width=435&lines={}",
        TYPING_SVG_ENDPOINT,
        lines.join(";")
    ))
}
