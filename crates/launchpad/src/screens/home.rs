//! Home screen

use serde::Serialize;

use crate::content::pages::{self, TitledText};
use crate::content::GuideCategory;
use crate::navigation::Route;

/// Greeting for an hour of the day (0-23).
///
/// Hours past 23 are treated as evening.
pub fn greeting(hour: u32) -> &'static str {
    match hour {
        0..=11 => "Good morning",
        12..=16 => "Good afternoon",
        _ => "Good evening",
    }
}

/// The Home screen. Holds no state; the hour is supplied by the host.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HomeScreen;

/// A shortcut card linking to another screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Shortcut {
    /// Title
    pub title: &'static str,
    /// Subtitle
    pub subtitle: &'static str,
    /// Destination
    pub route: Route,
}

/// A tile in the home category grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryTile {
    /// The category
    pub category: GuideCategory,
    /// Title
    pub title: &'static str,
    /// Styling token
    pub color_token: &'static str,
    /// Destination
    pub route: Route,
}

/// Home screen content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HomeView {
    /// Application name
    pub app_name: &'static str,
    /// Time-of-day greeting, with trailing `!`
    pub greeting: String,
    /// Prompt under the greeting
    pub prompt: &'static str,
    /// Shortcut cards
    pub shortcuts: [Shortcut; 2],
    /// Heading above the category grid
    pub categories_heading: &'static str,
    /// One tile per guide category
    pub categories: Vec<CategoryTile>,
    /// Quick tips
    pub quick_tips: &'static [TitledText],
    /// Technologies
    pub tech_stack: &'static [&'static str],
}

impl HomeScreen {
    /// Create the screen.
    pub fn new() -> Self {
        Self
    }

    /// Render the screen for `hour` (0-23, local time).
    pub fn view(&self, hour: u32) -> HomeView {
        HomeView {
            app_name: pages::APP_NAME,
            greeting: format!("{}!", greeting(hour)),
            prompt: pages::HOME_PROMPT,
            shortcuts: [
                Shortcut {
                    title: "Start Learning",
                    subtitle: "Explore guides",
                    route: Route::Guides,
                },
                Shortcut {
                    title: "Commands",
                    subtitle: "Quick reference",
                    route: Route::Commands,
                },
            ],
            categories_heading: pages::HOME_CATEGORIES_HEADING,
            categories: GuideCategory::ALL
                .into_iter()
                .map(|category| CategoryTile {
                    category,
                    title: category.title(),
                    color_token: category.color_token(),
                    route: Route::GuideDetail(category),
                })
                .collect(),
            quick_tips: &pages::QUICK_TIPS,
            tech_stack: &pages::TECH_STACK,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_greeting_boundaries() {
        assert_eq!(greeting(0), "Good morning");
        assert_eq!(greeting(11), "Good morning");
        assert_eq!(greeting(12), "Good afternoon");
        assert_eq!(greeting(16), "Good afternoon");
        assert_eq!(greeting(17), "Good evening");
        assert_eq!(greeting(23), "Good evening");
        assert_eq!(greeting(99), "Good evening");
    }

    #[test]
    fn test_view() {
        let view = HomeScreen::new().view(9);
        assert_eq!(view.greeting, "Good morning!");
        assert_eq!(view.categories.len(), 6);
        assert_eq!(view.shortcuts[0].route, Route::Guides);
        assert_eq!(view.quick_tips.len(), 3);
    }
}
