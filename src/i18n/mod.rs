//! Localization
//!
//! Maps a [`Language`] to block titles and standalone UI strings. Every
//! lookup is a total, stateless function over a fixed table, so renderers can
//! call it as often as they like during composition.

mod strings;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::blocks::BlockType;
use crate::error::ReadmeError;

pub use strings::Text;

/// Supported output languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// Simplified Chinese (primary)
    #[default]
    Zh,
    /// English (secondary)
    En,
}

impl Language {
    /// Short code used on the command line and in the preference store
    pub fn code(&self) -> &'static str {
        match self {
            Language::Zh => "zh",
            Language::En => "en",
        }
    }

    /// The other language
    pub fn toggle(self) -> Self {
        match self {
            Language::Zh => Language::En,
            Language::En => Language::Zh,
        }
    }

    /// Pick a language from a system locale string such as `zh_CN.UTF-8`.
    ///
    /// Anything that does not start with `zh` falls back to English.
    pub fn from_locale(locale: &str) -> Self {
        if locale.trim().to_lowercase().starts_with("zh") {
            Language::Zh
        } else {
            Language::En
        }
    }

    /// Detect the language from `LC_ALL` / `LANG`, if either is set
    pub fn from_env() -> Option<Self> {
        ["LC_ALL", "LANG"]
            .iter()
            .filter_map(|var| std::env::var(var).ok())
            .find(|value| !value.trim().is_empty())
            .map(|value| Language::from_locale(&value))
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = ReadmeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "zh" | "zh-cn" | "zh_cn" | "cn" | "chinese" => Ok(Language::Zh),
            "en" | "en-us" | "en_us" | "english" => Ok(Language::En),
            _ => Err(ReadmeError::UnknownLanguage(s.to_string())),
        }
    }
}

/// Resolve a standalone UI string
pub fn resolve(language: Language, key: Text) -> &'static str {
    strings::lookup(language, key)
}

/// Localized display title for a block type
pub fn block_title(language: Language, block_type: BlockType) -> &'static str {
    match (language, block_type) {
        (Language::Zh, BlockType::Header) => "个人信息头部",
        (Language::Zh, BlockType::About) => "关于我",
        (Language::Zh, BlockType::Stats) => "GitHub统计",
        (Language::Zh, BlockType::Skills) => "技能 & 工具",
        (Language::Zh, BlockType::Projects) => "精选项目",
        (Language::Zh, BlockType::Social) => "社交媒体",
        (Language::Zh, BlockType::Blog) => "最新博客",
        (Language::Zh, BlockType::Activity) => "最近活动",
        (Language::En, BlockType::Header) => "Profile Header",
        (Language::En, BlockType::About) => "About Me",
        (Language::En, BlockType::Stats) => "GitHub Stats",
        (Language::En, BlockType::Skills) => "Skills & Tools",
        (Language::En, BlockType::Projects) => "Featured Projects",
        (Language::En, BlockType::Social) => "Social Media",
        (Language::En, BlockType::Blog) => "Latest Blog Posts",
        (Language::En, BlockType::Activity) => "Recent Activity",
    }
}
