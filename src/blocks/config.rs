//! Block Configuration
//!
//! Strongly typed configuration for each block type, plus a matching patch
//! type whose fields are all optional. Applying a patch is a shallow merge:
//! provided keys overwrite, omitted keys keep their current value. Nested
//! values (`platforms`, `projects`, `skills`) are replaced as a whole.

use serde::{Deserialize, Serialize};

/// Shallow merge of a partial update into a configuration value
pub trait Merge {
    type Patch;

    fn merge(&mut self, patch: Self::Patch);
}

fn default_true() -> bool {
    true
}

// =============================================================================
// Header
// =============================================================================

fn default_typing_texts() -> Vec<String> {
    vec![
        "Welcome to my GitHub profile!".to_string(),
        "Always learning, always building.".to_string(),
    ]
}

/// Header block configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeaderConfig {
    #[serde(default = "default_true")]
    pub show_avatar: bool,
    #[serde(default = "default_true")]
    pub show_title: bool,
    #[serde(default = "default_true")]
    pub show_location: bool,
    #[serde(default = "default_true")]
    pub show_website: bool,
    #[serde(default)]
    pub show_typing_svg: bool,
    #[serde(default = "default_typing_texts")]
    pub typing_texts: Vec<String>,
    #[serde(default)]
    pub show_visitor_badge: bool,
    #[serde(default = "default_true")]
    pub show_social_links: bool,
}

impl Default for HeaderConfig {
    fn default() -> Self {
        Self {
            show_avatar: true,
            show_title: true,
            show_location: true,
            show_website: true,
            show_typing_svg: false,
            typing_texts: default_typing_texts(),
            show_visitor_badge: false,
            show_social_links: true,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeaderPatch {
    pub show_avatar: Option<bool>,
    pub show_title: Option<bool>,
    pub show_location: Option<bool>,
    pub show_website: Option<bool>,
    pub show_typing_svg: Option<bool>,
    pub typing_texts: Option<Vec<String>>,
    pub show_visitor_badge: Option<bool>,
    pub show_social_links: Option<bool>,
}

impl Merge for HeaderConfig {
    type Patch = HeaderPatch;

    fn merge(&mut self, patch: HeaderPatch) {
        if let Some(v) = patch.show_avatar {
            self.show_avatar = v;
        }
        if let Some(v) = patch.show_title {
            self.show_title = v;
        }
        if let Some(v) = patch.show_location {
            self.show_location = v;
        }
        if let Some(v) = patch.show_website {
            self.show_website = v;
        }
        if let Some(v) = patch.show_typing_svg {
            self.show_typing_svg = v;
        }
        if let Some(v) = patch.typing_texts {
            self.typing_texts = v;
        }
        if let Some(v) = patch.show_visitor_badge {
            self.show_visitor_badge = v;
        }
        if let Some(v) = patch.show_social_links {
            self.show_social_links = v;
        }
    }
}

// =============================================================================
// About
// =============================================================================

/// About block configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AboutConfig {
    /// Free-form markdown, emitted verbatim
    #[serde(default)]
    pub content: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct AboutPatch {
    pub content: Option<String>,
}

impl Merge for AboutConfig {
    type Patch = AboutPatch;

    fn merge(&mut self, patch: AboutPatch) {
        if let Some(v) = patch.content {
            self.content = v;
        }
    }
}

// =============================================================================
// Stats
// =============================================================================

fn default_stats_theme() -> String {
    "dark".to_string()
}

/// Stats block configuration
///
/// The third-party toggles only take effect when their companion identifier
/// is also set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsConfig {
    #[serde(default = "default_true")]
    pub show_overview: bool,
    #[serde(default = "default_true")]
    pub show_languages: bool,
    #[serde(default = "default_true")]
    pub show_streak: bool,
    #[serde(default = "default_stats_theme")]
    pub theme: String,

    #[serde(default)]
    pub show_leetcode: bool,
    #[serde(default)]
    pub leetcode_username: String,
    #[serde(default)]
    pub show_zhihu: bool,
    #[serde(default)]
    pub zhihu_id: String,
    #[serde(default)]
    pub show_bilibili: bool,
    #[serde(default)]
    pub bilibili_uid: String,
    #[serde(default)]
    pub show_csdn: bool,
    #[serde(default)]
    pub csdn_id: String,
    #[serde(default)]
    pub show_nowcoder: bool,
    #[serde(default)]
    pub nowcoder_id: String,
}

impl Default for StatsConfig {
    fn default() -> Self {
        Self {
            show_overview: true,
            show_languages: true,
            show_streak: true,
            theme: default_stats_theme(),
            show_leetcode: false,
            leetcode_username: String::new(),
            show_zhihu: false,
            zhihu_id: String::new(),
            show_bilibili: false,
            bilibili_uid: String::new(),
            show_csdn: false,
            csdn_id: String::new(),
            show_nowcoder: false,
            nowcoder_id: String::new(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsPatch {
    pub show_overview: Option<bool>,
    pub show_languages: Option<bool>,
    pub show_streak: Option<bool>,
    pub theme: Option<String>,
    pub show_leetcode: Option<bool>,
    pub leetcode_username: Option<String>,
    pub show_zhihu: Option<bool>,
    pub zhihu_id: Option<String>,
    pub show_bilibili: Option<bool>,
    pub bilibili_uid: Option<String>,
    pub show_csdn: Option<bool>,
    pub csdn_id: Option<String>,
    pub show_nowcoder: Option<bool>,
    pub nowcoder_id: Option<String>,
}

impl Merge for StatsConfig {
    type Patch = StatsPatch;

    fn merge(&mut self, patch: StatsPatch) {
        if let Some(v) = patch.show_overview {
            self.show_overview = v;
        }
        if let Some(v) = patch.show_languages {
            self.show_languages = v;
        }
        if let Some(v) = patch.show_streak {
            self.show_streak = v;
        }
        if let Some(v) = patch.theme {
            self.theme = v;
        }
        if let Some(v) = patch.show_leetcode {
            self.show_leetcode = v;
        }
        if let Some(v) = patch.leetcode_username {
            self.leetcode_username = v;
        }
        if let Some(v) = patch.show_zhihu {
            self.show_zhihu = v;
        }
        if let Some(v) = patch.zhihu_id {
            self.zhihu_id = v;
        }
        if let Some(v) = patch.show_bilibili {
            self.show_bilibili = v;
        }
        if let Some(v) = patch.bilibili_uid {
            self.bilibili_uid = v;
        }
        if let Some(v) = patch.show_csdn {
            self.show_csdn = v;
        }
        if let Some(v) = patch.csdn_id {
            self.csdn_id = v;
        }
        if let Some(v) = patch.show_nowcoder {
            self.show_nowcoder = v;
        }
        if let Some(v) = patch.nowcoder_id {
            self.nowcoder_id = v;
        }
    }
}

// =============================================================================
// Skills
// =============================================================================

/// How the skills list is laid out
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillsLayout {
    /// One shields.io badge per skill
    #[default]
    Badges,
    /// A single row of logo icons
    Icons,
    /// Plain bulleted list (also used for unrecognised layouts)
    #[serde(other)]
    List,
}

fn default_skills() -> Vec<String> {
    ["JavaScript", "TypeScript", "Vue.js", "React", "Node.js"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

/// Skills block configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillsConfig {
    #[serde(default = "default_skills")]
    pub skills: Vec<String>,
    #[serde(default)]
    pub layout: SkillsLayout,
}

impl Default for SkillsConfig {
    fn default() -> Self {
        Self {
            skills: default_skills(),
            layout: SkillsLayout::Badges,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SkillsPatch {
    pub skills: Option<Vec<String>>,
    pub layout: Option<SkillsLayout>,
}

impl Merge for SkillsConfig {
    type Patch = SkillsPatch;

    fn merge(&mut self, patch: SkillsPatch) {
        if let Some(v) = patch.skills {
            self.skills = v;
        }
        if let Some(v) = patch.layout {
            self.layout = v;
        }
    }
}

// =============================================================================
// Projects
// =============================================================================

/// A featured project
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Project {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub tech: Vec<String>,
}

/// Projects block configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectsConfig {
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default = "default_true")]
    pub show_description: bool,
    #[serde(default = "default_true")]
    pub show_language: bool,
    #[serde(default = "default_true")]
    pub show_stats: bool,
}

impl Default for ProjectsConfig {
    fn default() -> Self {
        Self {
            projects: Vec::new(),
            show_description: true,
            show_language: true,
            show_stats: true,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectsPatch {
    pub projects: Option<Vec<Project>>,
    pub show_description: Option<bool>,
    pub show_language: Option<bool>,
    pub show_stats: Option<bool>,
}

impl Merge for ProjectsConfig {
    type Patch = ProjectsPatch;

    fn merge(&mut self, patch: ProjectsPatch) {
        if let Some(v) = patch.projects {
            self.projects = v;
        }
        if let Some(v) = patch.show_description {
            self.show_description = v;
        }
        if let Some(v) = patch.show_language {
            self.show_language = v;
        }
        if let Some(v) = patch.show_stats {
            self.show_stats = v;
        }
    }
}

// =============================================================================
// Social
// =============================================================================

/// Social platforms with a fixed rendering rule each, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    Wechat,
    Weibo,
    Bilibili,
    Zhihu,
    Juejin,
    Github,
    Twitter,
    Linkedin,
    Discord,
    Youtube,
    Instagram,
}

impl Platform {
    pub fn all() -> &'static [Platform] {
        &[
            Platform::Wechat,
            Platform::Weibo,
            Platform::Bilibili,
            Platform::Zhihu,
            Platform::Juejin,
            Platform::Github,
            Platform::Twitter,
            Platform::Linkedin,
            Platform::Discord,
            Platform::Youtube,
            Platform::Instagram,
        ]
    }
}

/// Handle or profile URL per platform; empty means "not set"
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Platforms {
    pub wechat: String,
    pub weibo: String,
    pub bilibili: String,
    pub zhihu: String,
    pub juejin: String,
    pub twitter: String,
    pub linkedin: String,
    pub github: String,
    pub discord: String,
    pub youtube: String,
    pub instagram: String,
}

impl Platforms {
    /// Raw value for a platform
    pub fn get(&self, platform: Platform) -> &str {
        match platform {
            Platform::Wechat => &self.wechat,
            Platform::Weibo => &self.weibo,
            Platform::Bilibili => &self.bilibili,
            Platform::Zhihu => &self.zhihu,
            Platform::Juejin => &self.juejin,
            Platform::Github => &self.github,
            Platform::Twitter => &self.twitter,
            Platform::Linkedin => &self.linkedin,
            Platform::Discord => &self.discord,
            Platform::Youtube => &self.youtube,
            Platform::Instagram => &self.instagram,
        }
    }

    /// Platforms with a non-blank value, in display order
    pub fn filled(&self) -> impl Iterator<Item = (Platform, &str)> + '_ {
        Platform::all()
            .iter()
            .map(move |p| (*p, self.get(*p).trim()))
            .filter(|(_, value)| !value.is_empty())
    }
}

/// Social block configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SocialConfig {
    #[serde(default)]
    pub platforms: Platforms,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SocialPatch {
    pub platforms: Option<Platforms>,
}

impl Merge for SocialConfig {
    type Patch = SocialPatch;

    fn merge(&mut self, patch: SocialPatch) {
        if let Some(v) = patch.platforms {
            self.platforms = v;
        }
    }
}

// =============================================================================
// Blog
// =============================================================================

fn default_post_count() -> u32 {
    5
}

/// Blog block configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogConfig {
    #[serde(default)]
    pub blog_rss_url: String,
    #[serde(default = "default_post_count")]
    pub blog_post_count: u32,
}

impl Default for BlogConfig {
    fn default() -> Self {
        Self {
            blog_rss_url: String::new(),
            blog_post_count: default_post_count(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPatch {
    pub blog_rss_url: Option<String>,
    pub blog_post_count: Option<u32>,
}

impl Merge for BlogConfig {
    type Patch = BlogPatch;

    fn merge(&mut self, patch: BlogPatch) {
        if let Some(v) = patch.blog_rss_url {
            self.blog_rss_url = v;
        }
        if let Some(v) = patch.blog_post_count {
            self.blog_post_count = v;
        }
    }
}

// =============================================================================
// Activity
// =============================================================================

/// Activity block configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityConfig {
    #[serde(default = "default_true")]
    pub show_contributions: bool,
}

impl Default for ActivityConfig {
    fn default() -> Self {
        Self {
            show_contributions: true,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityPatch {
    pub show_contributions: Option<bool>,
}

impl Merge for ActivityConfig {
    type Patch = ActivityPatch;

    fn merge(&mut self, patch: ActivityPatch) {
        if let Some(v) = patch.show_contributions {
            self.show_contributions = v;
        }
    }
}
