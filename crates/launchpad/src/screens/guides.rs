//! Guides list and guide detail screens

use serde::Serialize;

use crate::config::AppConfig;
use crate::content::{pages, ContentRepository, GuideCategory};
use crate::navigation::Route;

/// Section titles on the guide detail screen, in display order.
pub const GUIDE_SECTIONS: [&str; 5] = [
    "Overview",
    "Key Features to Include",
    "Architecture Tips",
    "Try These Prompts",
    "Example Apps in This Category",
];

/// The Guides list screen. Holds no state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GuidesScreen;

/// The Guides list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GuidesView {
    /// Introductory text
    pub intro: &'static str,
    /// One card per category, in enumeration order
    pub cards: Vec<GuideCard>,
}

/// A category card on the Guides list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GuideCard {
    /// The category
    pub category: GuideCategory,
    /// Where tapping the card goes
    pub route: Route,
    /// Title
    pub title: &'static str,
    /// Description
    pub description: &'static str,
    /// Styling token
    pub color_token: &'static str,
    /// The first few example apps
    pub preview: &'static [&'static str],
    /// How many example apps did not fit in the preview
    pub overflow: usize,
}

impl GuideCard {
    fn of(category: GuideCategory, preview_limit: usize) -> Self {
        let examples = category.example_apps();
        let shown = examples.len().min(preview_limit);
        Self {
            category,
            route: Route::GuideDetail(category),
            title: category.title(),
            description: category.description(),
            color_token: category.color_token(),
            preview: &examples[..shown],
            overflow: examples.len() - shown,
        }
    }
}

impl GuidesScreen {
    /// Create the screen.
    pub fn new() -> Self {
        Self
    }

    /// Render the category cards.
    pub fn view(&self, config: &AppConfig) -> GuidesView {
        GuidesView {
            intro: pages::GUIDES_INTRO,
            cards: GuideCategory::ALL
                .into_iter()
                .map(|c| GuideCard::of(c, config.card_preview_limit))
                .collect(),
        }
    }
}

/// The guide detail screen for one category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GuideDetailScreen {
    category: GuideCategory,
}

/// Guide detail content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GuideDetailView<'a> {
    /// The category
    pub category: GuideCategory,
    /// Header title
    pub title: &'static str,
    /// Header description
    pub description: &'static str,
    /// Styling token
    pub color_token: &'static str,
    /// Overview paragraph
    pub overview: &'a str,
    /// Key features
    pub key_features: &'a [String],
    /// Architecture tips
    pub architecture_tips: &'a [String],
    /// Prompts to try
    pub example_prompts: &'a [String],
    /// Example apps in this category
    pub example_apps: &'static [&'static str],
}

impl GuideDetailScreen {
    /// Create the screen for `category`.
    pub fn new(category: GuideCategory) -> Self {
        Self { category }
    }

    /// The category shown.
    pub fn category(&self) -> GuideCategory {
        self.category
    }

    /// Render the four content tables for the category, verbatim.
    pub fn view<'a>(&self, repo: &'a ContentRepository) -> GuideDetailView<'a> {
        let category = self.category;
        let content = repo.guide_content(category);
        GuideDetailView {
            category,
            title: category.title(),
            description: category.description(),
            color_token: category.color_token(),
            overview: &content.overview,
            key_features: &content.key_features,
            architecture_tips: &content.architecture_tips,
            example_prompts: &content.example_prompts,
            example_apps: category.example_apps(),
        }
    }
}
