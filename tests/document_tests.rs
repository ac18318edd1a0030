//! Profile document and export integration tests

use readmecraft::{
    Artifact, BlockConfig, CliOverrides, Config, DocumentFormat, Exporter, FileExporter,
    Language, LanguageSources, ProfileDocument, ReadmeError,
};

const PROFILE_YAML: &str = r#"
language: en
identity:
  name: Ada Lovelace
  username: ada
  location: London
blocks:
  - id: skills
    enabled: true
    config:
      skills: [Go, Rust]
      layout: icons
  - id: social
    config:
      platforms:
        github: ada
order: [header, skills, about, stats]
"#;

const PROFILE_JSON: &str = r#"{
  "identity": { "name": "Ada Lovelace", "username": "ada" },
  "blocks": [ { "id": "about", "config": { "content": "Analyst" } } ]
}"#;

// =============================================================================
// Loading
// =============================================================================

mod loading_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_yaml_document_layers_over_catalog() {
        let doc = ProfileDocument::parse(PROFILE_YAML, DocumentFormat::Yaml).unwrap();
        let registry = doc.build_registry(&CliOverrides::default()).unwrap();

        let ids: Vec<&str> = registry
            .enabled_ordered()
            .iter()
            .map(|b| b.id.as_str())
            .collect();
        assert_eq!(ids, vec!["header", "skills", "about", "stats"]);
        assert_eq!(registry.identity().location(), Some("London"));
        assert_eq!(registry.social_platforms().github, "ada");
    }

    #[test]
    fn test_json_document_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("profile.json");
        std::fs::write(&path, PROFILE_JSON).unwrap();

        let doc = ProfileDocument::load(&path).unwrap();
        let registry = doc.build_registry(&CliOverrides::default()).unwrap();
        match &registry.block("about").unwrap().config {
            BlockConfig::About(config) => assert_eq!(config.content, "Analyst"),
            other => panic!("unexpected config: {:?}", other),
        }
    }

    #[test]
    fn test_cli_overrides_win() {
        let doc = ProfileDocument::parse(PROFILE_YAML, DocumentFormat::Yaml).unwrap();
        let cli = CliOverrides {
            enable: vec!["blog".to_string(), "nope".to_string()],
            disable: vec!["skills".to_string()],
        };
        let registry = doc.build_registry(&cli).unwrap();

        assert!(registry.block("blog").unwrap().enabled);
        assert!(!registry.block("skills").unwrap().enabled);
    }

    #[test]
    fn test_invalid_config_reports_block_id() {
        let doc = ProfileDocument::parse(
            "blocks:\n  - id: blog\n    config:\n      blogPostCount: many\n",
            DocumentFormat::Yaml,
        )
        .unwrap();

        match doc.build_registry(&CliOverrides::default()) {
            Err(ReadmeError::InvalidConfig { id, .. }) => assert_eq!(id, "blog"),
            other => panic!("expected InvalidConfig, got {:?}", other.map(|r| r.version())),
        }
    }

    #[test]
    fn test_save_then_load_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("profile.json");
        let doc = ProfileDocument::parse(PROFILE_YAML, DocumentFormat::Yaml).unwrap();

        doc.save(&path).unwrap();
        assert_eq!(ProfileDocument::load(&path).unwrap(), doc);
    }
}

// =============================================================================
// Language resolution
// =============================================================================

mod language_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_document_language_beats_project_config() {
        let doc = ProfileDocument::parse(PROFILE_YAML, DocumentFormat::Yaml).unwrap();
        let config = Config {
            language: Some(Language::Zh),
            ..Default::default()
        };
        let sources = LanguageSources {
            document: doc.language,
            project: config.language,
            ..Default::default()
        };
        assert_eq!(sources.resolve(), Language::En);
    }

    #[test]
    fn test_locale_detection() {
        assert_eq!(Language::from_locale("zh_CN.UTF-8"), Language::Zh);
        assert_eq!(Language::from_locale("en_GB.UTF-8"), Language::En);
        assert_eq!(Language::from_locale("fr_FR"), Language::En);
    }
}

// =============================================================================
// Export
// =============================================================================

mod export_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_composed_document_exported_as_readme() {
        let dir = tempfile::tempdir().unwrap();
        let doc = ProfileDocument::parse(PROFILE_YAML, DocumentFormat::Yaml).unwrap();
        let registry = doc.build_registry(&CliOverrides::default()).unwrap();
        let body = registry.compose(Language::En);

        FileExporter::into_dir(dir.path())
            .export(&Artifact::readme(body.clone()))
            .unwrap();

        let written = std::fs::read_to_string(dir.path().join("README.md")).unwrap();
        assert_eq!(written, body);
        assert!(written.starts_with("# Hi 👋, I'm Ada Lovelace"));
        assert!(written.contains("cdn.simpleicons.org/go"));
    }
}
