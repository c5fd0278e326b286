//! # Launchpad
//!
//! The headless core of a read-only reference app for Claude Code slash
//! commands and app-building guides.
//!
//! Everything here is static, in-memory content plus the small amount of
//! view state a UI host needs. A host renders the view models returned by
//! the screen controllers and forwards user input back as method calls.
//!
//! ## Architecture
//!
//! - **Content**: [`ContentRepository`] over the builtin commands and guides
//! - **Navigation**: [`Router`] with a back stack rooted at Home
//! - **Screens**: one controller per route, plus the command detail view
//! - **App**: [`App`] ties the router, repository, theme and active screen
//!   together

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod app;
pub mod config;
pub mod content;
pub mod error;
pub mod navigation;
pub mod screens;
pub mod source;
pub mod theme;

// Re-export main types
pub use app::App;
pub use config::AppConfig;
pub use content::{
    Command, CommandArchitecture, CommandCategory, CommandOption, ContentRepository,
    GuideCategory, GuideContent, GuideTable, KeyBehavior, RelatedCommand,
};
pub use error::{LaunchpadError, Result};
pub use navigation::{bottom_nav, NavItem, Route, Router, Tab};
pub use screens::{
    AboutScreen, ActiveScreen, CommandDetailScreen, CommandsScreen, DetailTab,
    GuideDetailScreen, GuidesScreen, HomeScreen, SettingsScreen,
};
pub use source::{NoSource, SourceProvider, StaticSources};
pub use theme::ThemeState;

/// Launchpad version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_exists() {
        assert!(!VERSION.is_empty());
    }
}
