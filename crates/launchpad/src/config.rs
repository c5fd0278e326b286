//! Application configuration

use serde::{Deserialize, Serialize};

use crate::content::GuideCategory;
use crate::error::{LaunchpadError, Result};

/// Settings that shape how content is presented.
///
/// Every field has a default, so a partial JSON document is enough.
///
/// # Example
///
/// ```
/// use launchpad::{AppConfig, GuideCategory};
///
/// let config = AppConfig::from_json(r#"{"fallbackGuideCategory": "GAMES"}"#).unwrap();
/// assert_eq!(config.fallback_guide_category, GuideCategory::Games);
/// assert_eq!(config.card_preview_limit, 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AppConfig {
    /// Directory prefix shown before a command's source file name
    pub source_dir: String,

    /// Category used when a guide route names an unknown category
    pub fallback_guide_category: GuideCategory,

    /// Example apps shown on a guide card before the overflow badge
    pub card_preview_limit: usize,

    /// Version string shown on About and Settings
    pub app_version: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            source_dir: ".claude/commands/".to_string(),
            fallback_guide_category: GuideCategory::default(),
            card_preview_limit: 3,
            app_version: "1.0.0".to_string(),
        }
    }
}

impl AppConfig {
    /// Create a config with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a JSON document.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| LaunchpadError::InvalidConfig(e.to_string()))
    }

    /// Set the source directory prefix.
    pub fn with_source_dir(mut self, dir: impl Into<String>) -> Self {
        self.source_dir = dir.into();
        self
    }

    /// Set the fallback guide category.
    pub fn with_fallback_guide_category(mut self, category: GuideCategory) -> Self {
        self.fallback_guide_category = category;
        self
    }

    /// Set how many example apps a guide card previews.
    pub fn with_card_preview_limit(mut self, limit: usize) -> Self {
        self.card_preview_limit = limit;
        self
    }

    /// Full display path of a source file.
    pub fn source_path(&self, file_name: &str) -> String {
        format!("{}{}", self.source_dir, file_name)
    }
}
