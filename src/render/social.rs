//! Social links renderer
//!
//! Each platform has a fixed icon and link rule. Platforms without a
//! canonical profile URL (WeChat, Discord) render as plain `label: value`.

use super::markup::section_heading;
use super::RenderContext;
use crate::blocks::{BlockType, Platform, Platforms, SocialConfig};
use crate::i18n::{resolve, Language, Text};

pub(super) fn render(config: &SocialConfig, ctx: &RenderContext<'_>) -> String {
    let heading = section_heading("🤝", BlockType::Social, ctx.language);
    let links = social_links(&config.platforms, ctx.language);

    if links.is_empty() {
        return format!("{}\n\n{}", heading, resolve(ctx.language, Text::NoSocialLinks));
    }

    format!(
        "{}\n\n<div align=\"center\">\n\n{}\n\n</div>",
        heading,
        links.join(" • ")
    )
}

/// One markdown fragment per platform with a value, in display order
pub fn social_links(platforms: &Platforms, language: Language) -> Vec<String> {
    platforms
        .filled()
        .map(|(platform, value)| platform_link(platform, value, language))
        .collect()
}

fn platform_link(platform: Platform, value: &str, language: Language) -> String {
    let label = platform_label(platform, language);
    match platform {
        Platform::Wechat => format!("📱 {}: {}", label, value),
        Platform::Discord => format!("💬 {}: {}", label, value),
        Platform::Weibo => format!("[🚀 {}](https://weibo.com/{})", label, value),
        Platform::Bilibili => format!("[📺 {}]({})", label, value),
        Platform::Zhihu => format!("[🧠 {}]({})", label, value),
        Platform::Juejin => format!("[💎 {}]({})", label, value),
        Platform::Github => format!("[💻 {}](https://github.com/{})", label, value),
        Platform::Twitter => format!(
            "[🐦 {}](https://twitter.com/{})",
            label,
            strip_at(value)
        ),
        Platform::Linkedin => format!("[💼 {}]({})", label, value),
        Platform::Youtube => format!("[🎬 {}]({})", label, value),
        Platform::Instagram => format!(
            "[📸 {}](https://instagram.com/{})",
            label,
            strip_at(value)
        ),
    }
}

fn strip_at(handle: &str) -> &str {
    handle.strip_prefix('@').unwrap_or(handle)
}

fn platform_label(platform: Platform, language: Language) -> &'static str {
    match (platform, language) {
        (Platform::Wechat, Language::Zh) => "微信",
        (Platform::Weibo, Language::Zh) => "微博",
        (Platform::Bilibili, Language::Zh) => "B站",
        (Platform::Zhihu, Language::Zh) => "知乎",
        (Platform::Juejin, Language::Zh) => "掘金",
        (Platform::Wechat, Language::En) => "WeChat",
        (Platform::Weibo, Language::En) => "Weibo",
        (Platform::Bilibili, Language::En) => "Bilibili",
        (Platform::Zhihu, Language::En) => "Zhihu",
        (Platform::Juejin, Language::En) => "Juejin",
        (Platform::Github, _) => "GitHub",
        (Platform::Twitter, _) => "Twitter",
        (Platform::Linkedin, _) => "LinkedIn",
        (Platform::Discord, _) => "Discord",
        (Platform::Youtube, _) => "YouTube",
        (Platform::Instagram, _) => "Instagram",
    }
}
