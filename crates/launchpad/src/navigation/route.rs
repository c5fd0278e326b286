//! Route identities and their path encoding

use serde::{Serialize, Serializer};
use std::fmt;
use tracing::warn;

use crate::content::GuideCategory;
use crate::error::{LaunchpadError, Result};

/// Path prefix of the guide detail route family.
pub const GUIDE_DETAIL_PREFIX: &str = "guide/";

/// A navigable screen identity.
///
/// Paths: `home`, `guides`, `guide/{CATEGORY}`, `commands`, `about`,
/// `settings`.
///
/// # Example
///
/// ```
/// use launchpad::{GuideCategory, Route};
///
/// let route = Route::GuideDetail(GuideCategory::Games);
/// assert_eq!(route.path(), "guide/GAMES");
/// assert_eq!(Route::parse("guide/GAMES").unwrap(), route);
///
/// // Unknown categories fall back rather than fail
/// assert_eq!(
///     Route::parse("guide/UNKNOWN").unwrap(),
///     Route::GuideDetail(GuideCategory::Utility)
/// );
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Route {
    /// Landing screen; the initial route
    #[default]
    Home,
    /// Guide category list
    Guides,
    /// Content for one guide category
    GuideDetail(GuideCategory),
    /// Command reference
    Commands,
    /// About the app
    About,
    /// Preferences
    Settings,
}

impl Route {
    /// Build the guide detail route for `category`.
    pub fn guide_detail(category: GuideCategory) -> Self {
        Route::GuideDetail(category)
    }

    /// Path-style encoding of this route.
    pub fn path(&self) -> String {
        match self {
            Route::Home => "home".to_string(),
            Route::Guides => "guides".to_string(),
            Route::GuideDetail(category) => format!("{}{}", GUIDE_DETAIL_PREFIX, category.name()),
            Route::Commands => "commands".to_string(),
            Route::About => "about".to_string(),
            Route::Settings => "settings".to_string(),
        }
    }

    /// Parse a path, using [`GuideCategory::default`] for an unrecognized
    /// guide segment.
    pub fn parse(path: &str) -> Result<Self> {
        Self::parse_with_fallback(path, GuideCategory::default())
    }

    /// Parse a path, substituting `fallback` for an unrecognized guide segment.
    ///
    /// Fails only when the path names no known route family.
    pub fn parse_with_fallback(path: &str, fallback: GuideCategory) -> Result<Self> {
        if let Some(segment) = path.strip_prefix(GUIDE_DETAIL_PREFIX) {
            return Ok(Route::GuideDetail(guide_segment(segment, fallback)));
        }

        match path {
            "home" => Ok(Route::Home),
            "guides" => Ok(Route::Guides),
            "commands" => Ok(Route::Commands),
            "about" => Ok(Route::About),
            "settings" => Ok(Route::Settings),
            other => Err(LaunchpadError::UnknownRoute(other.to_string())),
        }
    }

    /// Whether this route belongs to the guide detail family.
    pub fn is_guide_detail(&self) -> bool {
        matches!(self, Route::GuideDetail(_))
    }
}

fn guide_segment(segment: &str, fallback: GuideCategory) -> GuideCategory {
    match segment.parse() {
        Ok(category) => category,
        Err(_) => {
            warn!(segment, %fallback, "unrecognized guide category in route, using fallback");
            fallback
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

impl Serialize for Route {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.path())
    }
}
