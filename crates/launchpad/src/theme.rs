//! Application-level dark/light theme state

use serde::Serialize;
use tracing::debug;

/// Whether the app renders in dark mode.
///
/// Seeded from the host's ambient preference and changed only through
/// [`App::toggle_theme`](crate::App::toggle_theme). Not persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ThemeState {
    dark: bool,
}

impl ThemeState {
    /// Seed from the platform's ambient light/dark preference.
    pub fn from_ambient(ambient_dark: bool) -> Self {
        Self { dark: ambient_dark }
    }

    /// Whether dark mode is on.
    pub fn is_dark(&self) -> bool {
        self.dark
    }

    pub(crate) fn toggle(&mut self) -> bool {
        self.dark = !self.dark;
        debug!(dark = self.dark, "theme toggled");
        self.dark
    }
}
