//! About screen

use serde::Serialize;

use crate::config::AppConfig;
use crate::content::pages::{self, TitledText};

/// The About screen. Holds no state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AboutScreen;

/// About screen content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AboutView {
    /// Application name
    pub app_name: &'static str,
    /// Tagline
    pub tagline: &'static str,
    /// Description paragraph
    pub description: &'static str,
    /// Development workflow, in order
    pub workflow: &'static [TitledText],
    /// Key features
    pub key_features: &'static [TitledText],
    /// "Version x.y.z"
    pub version: String,
    /// Footer
    pub built_with: &'static str,
}

impl AboutScreen {
    /// Create the screen.
    pub fn new() -> Self {
        Self
    }

    /// Render the screen.
    pub fn view(&self, config: &AppConfig) -> AboutView {
        AboutView {
            app_name: pages::APP_NAME,
            tagline: pages::APP_TAGLINE,
            description: pages::ABOUT_DESCRIPTION,
            workflow: &pages::WORKFLOW_STEPS,
            key_features: &pages::KEY_FEATURES,
            version: format!("Version {}", config.app_version),
            built_with: pages::ABOUT_BUILT_WITH,
        }
    }
}
