//! Static copy for the Home, Guides, About and Settings pages

use serde::Serialize;

/// Application name shown in headers.
pub const APP_NAME: &str = "Launchpad";

/// Tagline under the application name.
pub const APP_TAGLINE: &str = "AI-Powered Android Development";

/// Prompt under the home greeting.
pub const HOME_PROMPT: &str = "What would you like to build today?";

/// Heading above the home category grid.
pub const HOME_CATEGORIES_HEADING: &str = "Build Something Amazing";

/// Introductory text on the Guides page.
pub const GUIDES_INTRO: &str =
    "Learn how to build different types of Android applications with Launchpad and Claude Code.";

/// Description paragraph on the About page.
pub const ABOUT_DESCRIPTION: &str = "Launchpad is an AI-powered Android development platform \
     designed to work seamlessly with Claude Code. It enables rapid ideation, prototyping, \
     and iteration on Android applications.";

/// Footer line on the About page.
pub const ABOUT_BUILT_WITH: &str = "Built with Jetpack Compose & Material 3";

/// A titled line of text: tips, features, workflow steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TitledText {
    /// Heading
    pub title: &'static str,
    /// Body
    pub description: &'static str,
}

const fn titled(title: &'static str, description: &'static str) -> TitledText {
    TitledText { title, description }
}

/// Quick tips on the Home page.
pub const QUICK_TIPS: [TitledText; 3] = [
    titled(
        "Use /ship for quick changes",
        "Voice-friendly command that implements, documents, and commits.",
    ),
    titled(
        "Try /queue when busy",
        "Save tasks for later and process them with /burn.",
    ),
    titled(
        "Read your context files",
        "Check .claude/context/ before implementing features.",
    ),
];

/// Technologies listed under "Powered By" on the Home page.
pub const TECH_STACK: [&str; 5] = [
    "Kotlin",
    "Jetpack Compose",
    "Material 3",
    "Gradle",
    "Claude Code",
];

/// Development workflow steps on the About page, in order.
pub const WORKFLOW_STEPS: [TitledText; 3] = [
    titled(
        "Blueprint",
        "Define your app concept through an interactive questionnaire",
    ),
    titled(
        "Forge",
        "Generate a complete MVP with AI-powered code generation",
    ),
    titled("Ship", "Iterate and deploy with voice-friendly commands"),
];

/// Key features on the About page.
pub const KEY_FEATURES: [TitledText; 4] = [
    titled(
        "AI-Powered Development",
        "Leverage Claude Code for intelligent code generation and problem-solving",
    ),
    titled(
        "Rapid Prototyping",
        "Go from idea to working app in record time",
    ),
    titled(
        "Voice-Friendly Commands",
        "Use simple, memorable commands like /ship, /queue, and /burn",
    ),
    titled(
        "Session Continuity",
        "Progress logging and /reboot command for seamless session recovery",
    ),
];

/// Fixed informational values on the Settings page.
pub mod settings {
    /// Application package
    pub const PACKAGE_NAME: &str = "com.example.launchpad";
    /// Minimum platform level
    pub const MIN_SDK: &str = "API 24 (Android 7.0)";
    /// Target platform level
    pub const TARGET_SDK: &str = "API 36";
    /// Skills shipped with the project
    pub const SKILLS_AVAILABLE: &str = "3 skills";
    /// Where context files live
    pub const CONTEXT_DIR: &str = ".claude/context/";
    /// Where prompt files live
    pub const PROMPTS_DIR: &str = ".claude/prompts/";
    /// Build type label
    pub const BUILD_TYPE: &str = "Debug";
    /// Link label for the source repository
    pub const SOURCE_CODE: &str = "View on GitHub";
}
