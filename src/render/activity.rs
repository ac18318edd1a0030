//! Activity renderer

use super::markup::{html_comment, section_heading};
use super::RenderContext;
use crate::blocks::{ActivityConfig, BlockType};
use crate::i18n::{resolve, Text};

const ACTIVITY_GRAPH_ENDPOINT: &str = "https://github-readme-activity-graph.vercel.app/graph";

pub(super) fn render(config: &ActivityConfig, ctx: &RenderContext<'_>) -> String {
    let Some(username) = ctx.identity.username() else {
        return html_comment(resolve(ctx.language, Text::UsernameMissing));
    };

    let mut activity = section_heading("📈", BlockType::Activity, ctx.language);

    if config.show_contributions {
        // The fallback paragraph is revealed by the image's onerror handler
        activity.push_str(&format!(
            "\n\n<div align=\"center\">\n  <img src=\"{}?username={}&theme=github-compact&width=600&height=300\" alt=\"Activity Graph\" onerror=\"this.style.display='none'; this.nextElementSibling.style.display='block';\" />\n  <p style=\"display: none;\">{}</p>\n</div>",
            ACTIVITY_GRAPH_ENDPOINT,
            username,
            resolve(ctx.language, Text::ActivityFallback)
        ));
    }

    activity
}
