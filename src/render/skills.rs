//! Skills renderer

use super::markup::{section_heading, shields_text};
use super::RenderContext;
use crate::blocks::{BlockType, SkillsConfig, SkillsLayout};

pub(super) fn render(config: &SkillsConfig, ctx: &RenderContext<'_>) -> String {
    let skills: Vec<&str> = config
        .skills
        .iter()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .collect();

    let body = match config.layout {
        SkillsLayout::Badges => skills
            .iter()
            .map(|skill| {
                format!(
                    "![{}](https://img.shields.io/badge/-{}-05122A?style=flat&logo={})",
                    skill,
                    shields_text(skill),
                    badge_slug(skill)
                )
            })
            .collect::<Vec<_>>()
            .join("\n"),
        SkillsLayout::Icons if skills.is_empty() => String::new(),
        SkillsLayout::Icons => {
            let icons: Vec<String> = skills
                .iter()
                .map(|skill| {
                    format!(
                        "  <img src=\"https://cdn.simpleicons.org/{}\" alt=\"{}\" width=\"40\" height=\"40\" />",
                        icon_slug(skill),
                        skill
                    )
                })
                .collect();
            format!("<p align=\"left\">\n{}\n</p>", icons.join("\n"))
        }
        SkillsLayout::List => skills
            .iter()
            .map(|skill| format!("- {}", skill))
            .collect::<Vec<_>>()
            .join("\n"),
    };

    format!(
        "{}\n\n{}",
        section_heading("🛠️", BlockType::Skills, ctx.language),
        body
    )
}

/// shields.io logo slug: lowercase, dots and spaces removed
fn badge_slug(skill: &str) -> String {
    skill
        .to_lowercase()
        .chars()
        .filter(|c| *c != '.' && *c != ' ')
        .collect()
}

/// Simple Icons slug: alphanumerics only, lowercase
fn icon_slug(skill: &str) -> String {
    skill
        .chars()
        .filter(|c| c.is_alphanumeric())
        .collect::<String>()
        .to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blocks::{Platforms, ProfileIdentity};
    use crate::i18n::Language;

    fn render_skills(skills: &[&str], layout: SkillsLayout) -> String {
        let identity = ProfileIdentity::default();
        let platforms = Platforms::default();
        let ctx = RenderContext {
            identity: &identity,
            platforms: &platforms,
            language: Language::En,
        };
        let config = SkillsConfig {
            skills: skills.iter().map(|s| s.to_string()).collect(),
            layout,
        };
        render(&config, &ctx)
    }

    #[test]
    fn test_slugs() {
        assert_eq!(badge_slug("Vue.js"), "vuejs");
        assert_eq!(badge_slug("Spring Boot"), "springboot");
        assert_eq!(badge_slug("Node.js.x"), "nodejsx");
        assert_eq!(icon_slug("C++"), "c");
        assert_eq!(icon_slug("Vue.js"), "vuejs");
    }

    #[test]
    fn test_badges_one_per_skill() {
        let out = render_skills(&["Go", "Rust"], SkillsLayout::Badges);
        let badges: Vec<&str> = out.lines().filter(|l| l.starts_with("![")).collect();
        assert_eq!(badges.len(), 2);
        assert!(badges[0].ends_with("logo=go)"));
        assert!(badges[1].ends_with("logo=rust)"));
    }

    #[test]
    fn test_icons_row() {
        let out = render_skills(&["TypeScript", "Vue.js"], SkillsLayout::Icons);
        assert!(out.contains("<p align=\"left\">"));
        assert!(out.contains("cdn.simpleicons.org/typescript"));
        assert!(out.contains("cdn.simpleicons.org/vuejs"));
    }

    #[test]
    fn test_plain_list() {
        let out = render_skills(&["Go", "Rust"], SkillsLayout::List);
        assert_eq!(out, "## 🛠️ Skills & Tools\n\n- Go\n- Rust");
    }

    #[test]
    fn test_empty_list_leaves_heading_only() {
        let out = render_skills(&[], SkillsLayout::Icons);
        assert_eq!(out.trim(), "## 🛠️ Skills & Tools");
    }
}
