//! Featured projects renderer

use super::markup::{html_comment, section_heading};
use super::RenderContext;
use crate::blocks::{BlockType, Project, ProjectsConfig};
use crate::i18n::{resolve, Language, Text};

const GITHUB_HOST: &str = "github.com/";

pub(super) fn render(config: &ProjectsConfig, ctx: &RenderContext<'_>) -> String {
    let heading = section_heading("🚀", BlockType::Projects, ctx.language);

    let sections: Vec<String> = config
        .projects
        .iter()
        .filter_map(|project| render_project(project, config, ctx.language))
        .collect();

    if sections.is_empty() {
        return format!(
            "{}\n\n{}",
            heading,
            html_comment(resolve(ctx.language, Text::ProjectsPlaceholder))
        );
    }

    format!("{}\n\n{}", heading, sections.join("\n"))
}

/// One subsection; `None` for a project with neither name nor URL
fn render_project(project: &Project, config: &ProjectsConfig, language: Language) -> Option<String> {
    let name = project.name.trim();
    let url = project.url.trim();
    if name.is_empty() && url.is_empty() {
        return None;
    }

    let mut lines = Vec::new();
    let label = if name.is_empty() { url } else { name };
    if url.is_empty() {
        lines.push(format!("### {}", label));
    } else {
        lines.push(format!("### [{}]({})", label, url));
    }

    let description = project.description.trim();
    if config.show_description && !description.is_empty() {
        lines.push(description.to_string());
    }

    let tech: Vec<&str> = project
        .tech
        .iter()
        .map(|t| t.trim())
        .filter(|t| !t.is_empty())
        .collect();
    if config.show_language && !tech.is_empty() {
        lines.push(format!(
            "**{}:** {}",
            resolve(language, Text::TechStack),
            tech.join(", ")
        ));
    }

    if config.show_stats {
        if let Some(repo) = github_repo_path(url) {
            lines.push(format!(
                "![Stars](https://img.shields.io/github/stars/{}?style=social) ![Forks](https://img.shields.io/github/forks/{}?style=social)",
                repo, repo
            ));
        }
    }

    Some(format!("{}\n", lines.join("\n")))
}

/// `owner/repo` part of a GitHub URL
fn github_repo_path(url: &str) -> Option<&str> {
    let start = url.find(GITHUB_HOST)? + GITHUB_HOST.len();
    let path = &url[start..];
    let path = path.split(['?', '#']).next().unwrap_or(path);
    let path = path.trim_end_matches('/');
    let path = path.strip_suffix(".git").unwrap_or(path);
    (!path.is_empty()).then_some(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blocks::{Platforms, ProfileIdentity};

    fn render_projects(config: &ProjectsConfig) -> String {
        let identity = ProfileIdentity::default();
        let platforms = Platforms::default();
        let ctx = RenderContext {
            identity: &identity,
            platforms: &platforms,
            language: Language::En,
        };
        render(config, &ctx)
    }

    fn project(name: &str, url: &str) -> Project {
        Project {
            name: name.to_string(),
            url: url.to_string(),
            description: "A tool".to_string(),
            tech: vec!["Rust".to_string(), "SQLite".to_string()],
        }
    }

    #[test]
    fn test_placeholder_when_empty() {
        assert_eq!(
            render_projects(&ProjectsConfig::default()),
            "## 🚀 Featured Projects\n\n<!-- Add your projects -->"
        );
    }

    #[test]
    fn test_github_project_gets_badges() {
        let config = ProjectsConfig {
            projects: vec![project("ripgrep", "https://github.com/BurntSushi/ripgrep")],
            ..Default::default()
        };
        let out = render_projects(&config);
        assert!(out.contains("### [ripgrep](https://github.com/BurntSushi/ripgrep)"));
        assert!(out.contains("A tool"));
        assert!(out.contains("**Tech Stack:** Rust, SQLite"));
        assert!(out.contains("github/stars/BurntSushi/ripgrep?style=social"));
        assert!(out.contains("github/forks/BurntSushi/ripgrep?style=social"));
    }

    #[test]
    fn test_non_github_project_has_no_badges() {
        let config = ProjectsConfig {
            projects: vec![project("site", "https://gitlab.com/me/site")],
            ..Default::default()
        };
        let out = render_projects(&config);
        assert!(!out.contains("img.shields.io"));
    }

    #[test]
    fn test_optional_lines_respect_toggles() {
        let config = ProjectsConfig {
            projects: vec![project("ripgrep", "https://github.com/BurntSushi/ripgrep")],
            show_description: false,
            show_language: false,
            show_stats: false,
        };
        let out = render_projects(&config);
        assert_eq!(
            out.trim(),
            "## 🚀 Featured Projects\n\n### [ripgrep](https://github.com/BurntSushi/ripgrep)"
        );
    }

    #[test]
    fn test_repo_path() {
        assert_eq!(github_repo_path("https://github.com/a/b/"), Some("a/b"));
        assert_eq!(github_repo_path("github.com/a/b.git"), Some("a/b"));
        assert_eq!(github_repo_path("https://github.com/"), None);
        assert_eq!(github_repo_path("https://example.com/a/b"), None);
    }

    #[test]
    fn test_repo_path_drops_query_and_fragment() {
        assert_eq!(github_repo_path("https://github.com/a/b?tab=readme"), Some("a/b"));
        assert_eq!(github_repo_path("https://github.com/a/b/#install"), Some("a/b"));
        assert_eq!(github_repo_path("https://github.com/a/b.git?x=1"), Some("a/b"));
        assert_eq!(github_repo_path("https://github.com/?tab=repos"), None);

        let config = ProjectsConfig {
            projects: vec![Project {
                name: "b".to_string(),
                url: "https://github.com/a/b?tab=readme".to_string(),
                description: String::new(),
                tech: Vec::new(),
            }],
            ..Default::default()
        };
        let out = render_projects(&config);
        assert!(out.contains("github/stars/a/b?style=social"));
        assert!(out.contains("github/forks/a/b?style=social"));
    }
}
