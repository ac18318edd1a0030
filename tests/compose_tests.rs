//! Composer integration tests
//!
//! Composition laws and per-block scenarios through the public API.

use readmecraft::blocks::{AboutPatch, SkillsLayout, SkillsPatch, SocialPatch};
use readmecraft::render::join_sections;
use readmecraft::{
    block_title, compose, Block, BlockConfig, BlockRegistry, BlockType, ConfigPatch, Language,
    Platforms, ProfileIdentity, SEPARATOR,
};

fn identity(username: &str) -> ProfileIdentity {
    ProfileIdentity {
        name: Some("Ada".to_string()),
        username: Some(username.to_string()),
        ..Default::default()
    }
}

fn only(registry: &mut BlockRegistry, ids: &[&str]) {
    for block_type in BlockType::all() {
        registry.set_enabled(block_type.as_str(), false);
    }
    for id in ids {
        registry.set_enabled(id, true);
    }
}

// =============================================================================
// Localization
// =============================================================================

mod localization_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_titles_exist_and_differ() {
        for block_type in BlockType::all() {
            let zh = block_title(Language::Zh, *block_type);
            let en = block_title(Language::En, *block_type);
            assert!(!zh.is_empty());
            assert!(!en.is_empty());
            assert_ne!(zh, en, "{} is not localized", block_type);
        }
    }

    #[test]
    fn test_language_changes_headings() {
        let mut registry = BlockRegistry::with_identity(identity("ada"));
        only(&mut registry, &["about"]);
        assert!(registry.compose(Language::Zh).starts_with("## 👨‍💻 关于我"));
        assert!(registry.compose(Language::En).starts_with("## 👨‍💻 About Me"));
    }
}

// =============================================================================
// Composition laws
// =============================================================================

mod law_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_compose_is_idempotent() {
        let mut registry = BlockRegistry::with_identity(identity("ada"));
        for block_type in BlockType::all() {
            registry.set_enabled(block_type.as_str(), true);
        }
        let first = registry.compose(Language::En);
        let second = registry.compose(Language::En);
        assert_eq!(first, second);
    }

    #[test]
    fn test_two_blocks_one_separator() {
        let mut registry = BlockRegistry::with_identity(identity("ada"));
        only(&mut registry, &["header", "about"]);
        let out = registry.compose(Language::En);

        assert_eq!(out.matches(SEPARATOR).count(), 1);
        assert!(!out.starts_with(SEPARATOR.trim_start()));
        assert!(!out.ends_with(SEPARATOR.trim_end()));
        assert_eq!(out, out.trim());

        let (first, second) = out.split_once(SEPARATOR).unwrap();
        assert_eq!(first, first.trim());
        assert_eq!(second, second.trim());
    }

    #[test]
    fn test_blank_fragment_after_composed_block_adds_no_separator() {
        let identity = identity("ada");
        let platforms = Platforms::default();
        let about = Block::new(
            "about",
            BlockConfig::default_for(BlockType::About),
            true,
            1,
        );
        let alone = compose(&identity, &[&about], &platforms, Language::En);
        let joined = join_sections(vec![alone.clone(), "  \n ".to_string()]);
        assert_eq!(alone, joined);
        assert!(!joined.contains(SEPARATOR));
    }

    #[test]
    fn test_no_blocks_no_output() {
        let out = compose(&identity("ada"), &[], &Platforms::default(), Language::En);
        assert_eq!(out, "");
    }
}

// =============================================================================
// Block scenarios
// =============================================================================

mod scenario_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_stats_without_username_is_placeholder() {
        let mut registry = BlockRegistry::with_identity(ProfileIdentity {
            username: Some(String::new()),
            ..Default::default()
        });
        only(&mut registry, &["stats"]);

        assert_eq!(registry.compose(Language::Zh), "<!-- 请设置GitHub用户名 -->");
        assert_eq!(
            registry.compose(Language::En),
            "<!-- Please set your GitHub username -->"
        );
    }

    #[test]
    fn test_social_with_only_github() {
        let mut registry = BlockRegistry::with_identity(identity("ada"));
        only(&mut registry, &["social"]);
        registry.update_block_config(
            "social",
            ConfigPatch::Social(SocialPatch {
                platforms: Some(Platforms {
                    github: "octocat".to_string(),
                    ..Default::default()
                }),
            }),
        );

        let out = registry.compose(Language::En);
        assert_eq!(out.matches("github.com/octocat").count(), 1);
        assert!(!out.contains(" • "));
        assert_eq!(registry.social_platforms().filled().count(), 1);
    }

    #[test]
    fn test_skills_badges() {
        let mut registry = BlockRegistry::with_identity(identity("ada"));
        only(&mut registry, &["skills"]);
        registry.update_block_config(
            "skills",
            ConfigPatch::Skills(SkillsPatch {
                skills: Some(vec!["Go".to_string(), "Rust".to_string()]),
                layout: Some(SkillsLayout::Badges),
            }),
        );

        let out = registry.compose(Language::En);
        let badges: Vec<&str> = out
            .lines()
            .filter(|l| l.starts_with("![") && l.contains("img.shields.io/badge/"))
            .collect();
        assert_eq!(badges.len(), 2);
        assert!(badges[0].ends_with("logo=go)"));
        assert!(badges[1].ends_with("logo=rust)"));
    }

    #[test]
    fn test_header_reads_disabled_social_block() {
        let mut registry = BlockRegistry::with_identity(identity("ada"));
        only(&mut registry, &["header"]);
        registry.update_block_config(
            "social",
            ConfigPatch::Social(SocialPatch {
                platforms: Some(Platforms {
                    twitter: "@ada".to_string(),
                    ..Default::default()
                }),
            }),
        );

        let out = registry.compose(Language::En);
        assert!(out.contains("https://twitter.com/ada"));
        assert!(!out.contains(block_title(Language::En, BlockType::Social)));
    }

    #[test]
    fn test_about_content_survives_empty_patch() {
        let mut registry = BlockRegistry::with_identity(identity("ada"));
        only(&mut registry, &["about"]);
        registry.update_block_config(
            "about",
            ConfigPatch::About(AboutPatch {
                content: Some("X".to_string()),
            }),
        );
        registry.update_block_config("about", ConfigPatch::About(AboutPatch::default()));

        assert_eq!(registry.compose(Language::En), "## 👨‍💻 About Me\n\nX");
    }
}
