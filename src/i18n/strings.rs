//! Standalone UI string table

use super::Language;

/// Keys for standalone localized strings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Text {
    Greeting,
    AboutPlaceholder,
    UsernameMissing,
    ProjectsPlaceholder,
    NoSocialLinks,
    ConnectWithMe,
    ThirdPartyStats,
    TechStack,
    ActivityFallback,
    ProfileViews,
    BlogWorkflowIntro,
    BlogWorkflowSetup,
    BlogFeedPlaceholder,
}

impl Text {
    pub fn all() -> &'static [Text] {
        &[
            Text::Greeting,
            Text::AboutPlaceholder,
            Text::UsernameMissing,
            Text::ProjectsPlaceholder,
            Text::NoSocialLinks,
            Text::ConnectWithMe,
            Text::ThirdPartyStats,
            Text::TechStack,
            Text::ActivityFallback,
            Text::ProfileViews,
            Text::BlogWorkflowIntro,
            Text::BlogWorkflowSetup,
            Text::BlogFeedPlaceholder,
        ]
    }
}

pub(super) fn lookup(language: Language, key: Text) -> &'static str {
    match language {
        Language::Zh => zh(key),
        Language::En => en(key),
    }
}

fn zh(key: Text) -> &'static str {
    match key {
        Text::Greeting => "你好 👋，我是 ",
        Text::AboutPlaceholder => "这里写一些关于你的介绍...",
        Text::UsernameMissing => "请设置GitHub用户名",
        Text::ProjectsPlaceholder => "添加你的项目",
        Text::NoSocialLinks => "暂未添加社交媒体链接...",
        Text::ConnectWithMe => "与我联系",
        Text::ThirdPartyStats => "第三方平台统计",
        Text::TechStack => "技术栈",
        Text::ActivityFallback => "活动图加载失败，请稍后再试。",
        Text::ProfileViews => "访问量",
        Text::BlogWorkflowIntro => "上方标记之间的文章列表由 GitHub Actions 自动更新。",
        Text::BlogWorkflowSetup => "在 .github/workflows/blog-post-workflow.yml 中添加以下步骤：",
        Text::BlogFeedPlaceholder => "<你的RSS订阅地址>",
    }
}

fn en(key: Text) -> &'static str {
    match key {
        Text::Greeting => "Hi 👋, I'm ",
        Text::AboutPlaceholder => "Write a few words about yourself here...",
        Text::UsernameMissing => "Please set your GitHub username",
        Text::ProjectsPlaceholder => "Add your projects",
        Text::NoSocialLinks => "No social links yet...",
        Text::ConnectWithMe => "Connect with me",
        Text::ThirdPartyStats => "Third-party Stats",
        Text::TechStack => "Tech Stack",
        Text::ActivityFallback => "The activity graph could not be loaded.",
        Text::ProfileViews => "Profile views",
        Text::BlogWorkflowIntro => {
            "The post list between the markers above is updated automatically by GitHub Actions."
        }
        Text::BlogWorkflowSetup => "Add this step to .github/workflows/blog-post-workflow.yml:",
        Text::BlogFeedPlaceholder => "<your RSS feed URL>",
    }
}
