//! Blog renderer
//!
//! Emits only scaffolding: an empty marker pair that an external workflow
//! (blog-post-workflow) fills with posts, plus a comment describing how to
//! set that workflow up. No feed is ever fetched here.

use super::markup::section_heading;
use super::RenderContext;
use crate::blocks::{BlockType, BlogConfig};
use crate::i18n::{resolve, Text};

pub const BLOG_START_MARKER: &str = "<!-- BLOG-POST-LIST:START -->";
pub const BLOG_END_MARKER: &str = "<!-- BLOG-POST-LIST:END -->";

pub(super) fn render(config: &BlogConfig, ctx: &RenderContext<'_>) -> String {
    let language = ctx.language;
    let feed = match config.blog_rss_url.trim() {
        "" => resolve(language, Text::BlogFeedPlaceholder),
        url => url,
    };

    format!(
        "{heading}\n\n{start}\n{end}\n\n<!--\n{intro}\n{setup}\n\n  - name: Pull in blog posts\n    uses: gautamkrishnar/blog-post-workflow@v1\n    with:\n      feed_list: \"{feed}\"\n      max_post_count: {count}\n-->",
        heading = section_heading("✍️", BlockType::Blog, language),
        start = BLOG_START_MARKER,
        end = BLOG_END_MARKER,
        intro = resolve(language, Text::BlogWorkflowIntro),
        setup = resolve(language, Text::BlogWorkflowSetup),
        feed = feed,
        count = config.blog_post_count,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blocks::{Platforms, ProfileIdentity};
    use crate::i18n::Language;

    fn render_blog(config: &BlogConfig, language: Language) -> String {
        let identity = ProfileIdentity::default();
        let platforms = Platforms::default();
        let ctx = RenderContext {
            identity: &identity,
            platforms: &platforms,
            language,
        };
        render(config, &ctx)
    }

    #[test]
    fn test_markers_are_adjacent() {
        let out = render_blog(&BlogConfig::default(), Language::En);
        assert!(out.contains(&format!("{}\n{}", BLOG_START_MARKER, BLOG_END_MARKER)));
    }

    #[test]
    fn test_feed_url_and_count_documented() {
        let config = BlogConfig {
            blog_rss_url: "https://blog.example.com/rss.xml".to_string(),
            blog_post_count: 3,
        };
        let out = render_blog(&config, Language::En);
        assert!(out.contains("feed_list: \"https://blog.example.com/rss.xml\""));
        assert!(out.contains("max_post_count: 3"));
    }

    #[test]
    fn test_missing_feed_uses_placeholder() {
        let out = render_blog(&BlogConfig::default(), Language::Zh);
        assert!(out.starts_with("## ✍️ 最新博客"));
        assert!(out.contains("feed_list: \"<你的RSS订阅地址>\""));
    }
}
