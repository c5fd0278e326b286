//! Settings screen

use serde::Serialize;

use crate::config::AppConfig;
use crate::content::pages::settings as info;
use crate::content::ContentRepository;
use crate::theme::ThemeState;

/// The Settings screen. Holds no state; the theme lives on [`App`](crate::App).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SettingsScreen;

/// A settings section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SettingsSection {
    /// Header
    pub title: &'static str,
    /// Rows
    pub rows: Vec<SettingsRow>,
}

/// A settings row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum SettingsRow {
    /// A switch
    Toggle {
        /// Label
        title: &'static str,
        /// Secondary text
        description: &'static str,
        /// Current position
        on: bool,
    },
    /// A read-only value
    Info {
        /// Label
        title: &'static str,
        /// Value
        value: String,
    },
}

fn row(title: &'static str, value: impl Into<String>) -> SettingsRow {
    SettingsRow::Info {
        title,
        value: value.into(),
    }
}

impl SettingsScreen {
    /// Create the screen.
    pub fn new() -> Self {
        Self
    }

    /// Render the screen. The dark theme switch reflects `theme`.
    pub fn view(
        &self,
        repo: &ContentRepository,
        theme: &ThemeState,
        config: &AppConfig,
    ) -> Vec<SettingsSection> {
        vec![
            SettingsSection {
                title: "Appearance",
                rows: vec![SettingsRow::Toggle {
                    title: "Dark Theme",
                    description: "Use dark color scheme",
                    on: theme.is_dark(),
                }],
            },
            SettingsSection {
                title: "Development",
                rows: vec![
                    row("Package Name", info::PACKAGE_NAME),
                    row("Min SDK", info::MIN_SDK),
                    row("Target SDK", info::TARGET_SDK),
                ],
            },
            SettingsSection {
                title: "Claude Code Integration",
                rows: vec![
                    row(
                        "Commands Available",
                        format!("{} commands", repo.command_count()),
                    ),
                    row("Skills Available", info::SKILLS_AVAILABLE),
                    row("Context Directory", info::CONTEXT_DIR),
                    row("Prompts Directory", info::PROMPTS_DIR),
                ],
            },
            SettingsSection {
                title: "About",
                rows: vec![
                    row("Version", config.app_version.as_str()),
                    row("Build Type", info::BUILD_TYPE),
                    row("Source Code", info::SOURCE_CODE),
                ],
            },
        ]
    }
}
