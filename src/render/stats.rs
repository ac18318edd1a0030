//! GitHub and third-party statistics renderer

use super::markup::{centered_image, html_comment, section_heading, shields_text};
use super::RenderContext;
use crate::blocks::{BlockType, StatsConfig};
use crate::i18n::{resolve, Text};

const STATS_ENDPOINT: &str = "https://github-readme-stats.vercel.app/api";
const STREAK_ENDPOINT: &str = "https://github-readme-streak-stats.herokuapp.com/";

pub(super) fn render(config: &StatsConfig, ctx: &RenderContext<'_>) -> String {
    let Some(username) = ctx.identity.username() else {
        return html_comment(resolve(ctx.language, Text::UsernameMissing));
    };
    let theme = &config.theme;

    let mut parts = vec![section_heading("📊", BlockType::Stats, ctx.language)];

    if config.show_overview {
        parts.push(centered_image(
            &format!(
                "{}?username={}&show_icons=true&theme={}&hide_border=true",
                STATS_ENDPOINT, username, theme
            ),
            "GitHub Stats",
        ));
    }

    if config.show_languages {
        parts.push(centered_image(
            &format!(
                "{}/top-langs/?username={}&layout=compact&theme={}&hide_border=true",
                STATS_ENDPOINT, username, theme
            ),
            "Top Languages",
        ));
    }

    if config.show_streak {
        parts.push(centered_image(
            &format!("{}?user={}&theme={}&hide_border=true", STREAK_ENDPOINT, username, theme),
            "GitHub Streak",
        ));
    }

    let third_party = third_party_images(config);
    if !third_party.is_empty() {
        parts.push(format!("### 🌐 {}", resolve(ctx.language, Text::ThirdPartyStats)));
        parts.extend(third_party);
    }

    parts.join("\n\n")
}

/// One image per third-party platform whose toggle and identifier are both set
fn third_party_images(config: &StatsConfig) -> Vec<String> {
    let mut images = Vec::new();

    if let Some(user) = enabled_id(config.show_leetcode, &config.leetcode_username) {
        images.push(centered_image(
            &format!(
                "https://leetcard.jacoblin.cool/{}?theme={}&ext=heatmap",
                user, config.theme
            ),
            "LeetCode Stats",
        ));
    }

    if let Some(id) = enabled_id(config.show_zhihu, &config.zhihu_id) {
        let api = format!(
            "https://www.zhihu.com/api/v4/members/{}?include=follower_count",
            id
        );
        images.push(centered_image(
            &format!(
                "https://img.shields.io/badge/dynamic/json?label=Zhihu&query=%24.follower_count&url={}&logo=zhihu&color=0084FF",
                urlencoding::encode(&api)
            ),
            "Zhihu Followers",
        ));
    }

    if let Some(uid) = enabled_id(config.show_bilibili, &config.bilibili_uid) {
        let api = format!("https://api.bilibili.com/x/relation/stat?vmid={}", uid);
        images.push(centered_image(
            &format!(
                "https://img.shields.io/badge/dynamic/json?label=Bilibili&query=%24.data.follower&url={}&logo=bilibili&color=00A1D6",
                urlencoding::encode(&api)
            ),
            "Bilibili Followers",
        ));
    }

    if let Some(id) = enabled_id(config.show_csdn, &config.csdn_id) {
        images.push(centered_image(
            &format!(
                "https://img.shields.io/badge/CSDN-{}-FC5531?style=flat&logo=csdn&logoColor=white",
                shields_text(id)
            ),
            "CSDN",
        ));
    }

    if let Some(id) = enabled_id(config.show_nowcoder, &config.nowcoder_id) {
        images.push(centered_image(
            &format!(
                "https://img.shields.io/badge/Nowcoder-{}-25BB9B?style=flat",
                shields_text(id)
            ),
            "Nowcoder",
        ));
    }

    images
}

fn enabled_id(toggle: bool, id: &str) -> Option<&str> {
    let id = id.trim();
    (toggle && !id.is_empty()).then_some(id)
}
