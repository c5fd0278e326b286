//! Bottom navigation tabs

use serde::Serialize;

use super::Route;

/// A bottom-level navigation tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Tab {
    /// Home
    Home,
    /// Guides
    Guides,
    /// Commands
    Commands,
    /// About
    About,
    /// Settings
    Settings,
}

impl Tab {
    /// Every tab, in bar order.
    pub const ALL: [Tab; 5] = [Tab::Home, Tab::Guides, Tab::Commands, Tab::About, Tab::Settings];

    /// The route this tab opens.
    pub fn route(&self) -> Route {
        match self {
            Tab::Home => Route::Home,
            Tab::Guides => Route::Guides,
            Tab::Commands => Route::Commands,
            Tab::About => Route::About,
            Tab::Settings => Route::Settings,
        }
    }

    /// Label shown under the icon.
    pub fn title(&self) -> &'static str {
        match self {
            Tab::Home => "Home",
            Tab::Guides => "Guides",
            Tab::Commands => "Commands",
            Tab::About => "About",
            Tab::Settings => "Settings",
        }
    }

    /// The tab highlighted while `route` is current.
    ///
    /// Matches on route family: every guide detail route highlights Guides.
    pub fn for_route(route: Route) -> Tab {
        match route {
            Route::Home => Tab::Home,
            Route::Guides | Route::GuideDetail(_) => Tab::Guides,
            Route::Commands => Tab::Commands,
            Route::About => Tab::About,
            Route::Settings => Tab::Settings,
        }
    }
}

/// One item of the bottom navigation bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavItem {
    /// The tab
    pub tab: Tab,
    /// Label
    pub title: &'static str,
    /// Whether this item is highlighted
    pub selected: bool,
}

/// The bottom navigation bar for `current`, in bar order.
pub fn bottom_nav(current: Route) -> Vec<NavItem> {
    let selected = Tab::for_route(current);
    Tab::ALL
        .into_iter()
        .map(|tab| NavItem {
            tab,
            title: tab.title(),
            selected: tab == selected,
        })
        .collect()
}
