//! Guide categories and their content tables

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{LaunchpadError, Result};

/// One of the six app-genre topics covered by the guides.
///
/// The symbolic name (`GAMES`) is what appears in route paths.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GuideCategory {
    /// Practical everyday tools
    #[default]
    Utility,
    /// Entertainment
    Games,
    /// Shopping and marketplaces
    Ecommerce,
    /// Connecting people
    Social,
    /// Getting things done
    Productivity,
    /// Art and media
    Creative,
}

impl GuideCategory {
    /// Every category, in display order.
    pub const ALL: [GuideCategory; 6] = [
        GuideCategory::Utility,
        GuideCategory::Games,
        GuideCategory::Ecommerce,
        GuideCategory::Social,
        GuideCategory::Productivity,
        GuideCategory::Creative,
    ];

    /// Symbolic name used as the route segment.
    pub fn name(&self) -> &'static str {
        match self {
            GuideCategory::Utility => "UTILITY",
            GuideCategory::Games => "GAMES",
            GuideCategory::Ecommerce => "ECOMMERCE",
            GuideCategory::Social => "SOCIAL",
            GuideCategory::Productivity => "PRODUCTIVITY",
            GuideCategory::Creative => "CREATIVE",
        }
    }

    /// Display title.
    pub fn title(&self) -> &'static str {
        match self {
            GuideCategory::Utility => "Utility Apps",
            GuideCategory::Games => "Games",
            GuideCategory::Ecommerce => "E-Commerce",
            GuideCategory::Social => "Social Apps",
            GuideCategory::Productivity => "Productivity",
            GuideCategory::Creative => "Creative Tools",
        }
    }

    /// One-line description.
    pub fn description(&self) -> &'static str {
        match self {
            GuideCategory::Utility => "Practical tools that solve everyday problems",
            GuideCategory::Games => "Fun and engaging entertainment apps",
            GuideCategory::Ecommerce => "Shopping and marketplace applications",
            GuideCategory::Social => "Connect and communicate with others",
            GuideCategory::Productivity => "Get things done more efficiently",
            GuideCategory::Creative => "Express yourself through art and media",
        }
    }

    /// Styling token. Opaque to the core; hosts map it to a color.
    pub fn color_token(&self) -> &'static str {
        match self {
            GuideCategory::Utility => "#1976D2",
            GuideCategory::Games => "#7B1FA2",
            GuideCategory::Ecommerce => "#388E3C",
            GuideCategory::Social => "#E91E63",
            GuideCategory::Productivity => "#00796B",
            GuideCategory::Creative => "#FF5722",
        }
    }

    /// Example app names for this genre.
    pub fn example_apps(&self) -> &'static [&'static str] {
        match self {
            GuideCategory::Utility => &[
                "Calculator",
                "Timer",
                "Unit Converter",
                "Notes",
                "QR Scanner",
            ],
            GuideCategory::Games => &["Trivia", "Puzzle", "Card Games", "Casual", "Word Games"],
            GuideCategory::Ecommerce => &[
                "Product Catalog",
                "Shopping Cart",
                "Checkout",
                "Order Tracking",
            ],
            GuideCategory::Social => &["Feed", "Messaging", "Profiles", "Notifications", "Stories"],
            GuideCategory::Productivity => {
                &["Task Manager", "Calendar", "Reminders", "Habit Tracker"]
            }
            GuideCategory::Creative => &["Drawing", "Photo Editor", "Music", "Video", "Design"],
        }
    }
}

impl fmt::Display for GuideCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for GuideCategory {
    type Err = LaunchpadError;

    /// Exact, case-sensitive match on the symbolic name.
    fn from_str(s: &str) -> Result<Self> {
        GuideCategory::ALL
            .into_iter()
            .find(|c| c.name() == s)
            .ok_or_else(|| LaunchpadError::UnknownGuideCategory(s.to_string()))
    }
}

/// The four content tables for one guide category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuideContent {
    /// Introductory paragraph
    pub overview: String,
    /// Features an app of this genre should include
    pub key_features: Vec<String>,
    /// Structural advice
    pub architecture_tips: Vec<String>,
    /// Prompts to try with the external tool
    pub example_prompts: Vec<String>,
}

impl GuideContent {
    /// Create a content record.
    pub fn new<F, T, P>(
        overview: impl Into<String>,
        key_features: F,
        architecture_tips: T,
        example_prompts: P,
    ) -> Self
    where
        F: IntoIterator,
        F::Item: Into<String>,
        T: IntoIterator,
        T::Item: Into<String>,
        P: IntoIterator,
        P::Item: Into<String>,
    {
        Self {
            overview: overview.into(),
            key_features: key_features.into_iter().map(Into::into).collect(),
            architecture_tips: architecture_tips.into_iter().map(Into::into).collect(),
            example_prompts: example_prompts.into_iter().map(Into::into).collect(),
        }
    }

    fn validate(&self, category: GuideCategory) -> Result<()> {
        let empty = |field: &'static str| LaunchpadError::EmptyGuideContent { category, field };
        if self.overview.trim().is_empty() {
            return Err(empty("overview"));
        }
        if self.key_features.is_empty() {
            return Err(empty("keyFeatures"));
        }
        if self.architecture_tips.is_empty() {
            return Err(empty("architectureTips"));
        }
        if self.example_prompts.is_empty() {
            return Err(empty("examplePrompts"));
        }
        Ok(())
    }
}

/// Total mapping from every [`GuideCategory`] to its [`GuideContent`].
///
/// Completeness is checked once, at construction; after that every
/// lookup succeeds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GuideTable {
    entries: IndexMap<GuideCategory, GuideContent>,
}

impl GuideTable {
    /// Build a table, failing if any category is missing or has empty content.
    ///
    /// Entries are stored in enumeration order regardless of input order.
    /// A later entry for the same category replaces an earlier one.
    pub fn from_entries(
        entries: impl IntoIterator<Item = (GuideCategory, GuideContent)>,
    ) -> Result<Self> {
        let mut given: IndexMap<GuideCategory, GuideContent> = entries.into_iter().collect();

        let mut ordered = IndexMap::with_capacity(GuideCategory::ALL.len());
        for category in GuideCategory::ALL {
            let content = given
                .swap_remove(&category)
                .ok_or(LaunchpadError::IncompleteGuideTable { category })?;
            content.validate(category)?;
            ordered.insert(category, content);
        }

        Ok(Self { entries: ordered })
    }

    /// Content for `category`.
    pub fn get(&self, category: GuideCategory) -> &GuideContent {
        // Every member was inserted by `from_entries`.
        &self.entries[&category]
    }

    /// Iterate entries in enumeration order.
    pub fn iter(&self) -> impl Iterator<Item = (GuideCategory, &GuideContent)> {
        self.entries.iter().map(|(c, content)| (*c, content))
    }
}
