//! Screen controllers
//!
//! Each controller holds only transient view state (search text, expanded
//! rows, selected tab). Content comes from the
//! [`ContentRepository`](crate::ContentRepository) on every `view` call and
//! is returned as a serializable view model.

mod about;
mod command_detail;
mod commands;
mod guides;
mod home;
mod settings;

pub use about::{AboutScreen, AboutView};
pub use command_detail::{
    ArchitectureDetails, ArchitectureView, CommandDetailScreen, CommandDetailView, DetailTab,
    OverviewView, RelatedChip, SourceView, TabContent, WorkflowStep, NOT_FOUND_TITLE,
    NO_ARCHITECTURE, NO_SOURCE_FILE, SOURCE_NOT_LOADED,
};
pub use commands::{CardDetails, CommandCard, CommandSection, CommandsScreen, SEARCH_PLACEHOLDER};
pub use guides::{
    GuideCard, GuideDetailScreen, GuideDetailView, GuidesScreen, GuidesView, GUIDE_SECTIONS,
};
pub use home::{greeting, CategoryTile, HomeScreen, HomeView, Shortcut};
pub use settings::{SettingsRow, SettingsScreen, SettingsSection};

use crate::navigation::Route;

/// The controller for the current route.
///
/// Created when a route becomes current and dropped when it is left.
#[derive(Debug, Clone)]
pub enum ActiveScreen {
    /// Home
    Home(HomeScreen),
    /// Guides list
    Guides(GuidesScreen),
    /// Guide detail
    GuideDetail(GuideDetailScreen),
    /// Commands
    Commands(CommandsScreen),
    /// About
    About(AboutScreen),
    /// Settings
    Settings(SettingsScreen),
}

impl ActiveScreen {
    /// Fresh controller for `route`.
    pub fn for_route(route: Route) -> Self {
        match route {
            Route::Home => ActiveScreen::Home(HomeScreen::new()),
            Route::Guides => ActiveScreen::Guides(GuidesScreen::new()),
            Route::GuideDetail(category) => {
                ActiveScreen::GuideDetail(GuideDetailScreen::new(category))
            }
            Route::Commands => ActiveScreen::Commands(CommandsScreen::new()),
            Route::About => ActiveScreen::About(AboutScreen::new()),
            Route::Settings => ActiveScreen::Settings(SettingsScreen::new()),
        }
    }

    /// The route this controller serves.
    pub fn route(&self) -> Route {
        match self {
            ActiveScreen::Home(_) => Route::Home,
            ActiveScreen::Guides(_) => Route::Guides,
            ActiveScreen::GuideDetail(screen) => Route::GuideDetail(screen.category()),
            ActiveScreen::Commands(_) => Route::Commands,
            ActiveScreen::About(_) => Route::About,
            ActiveScreen::Settings(_) => Route::Settings,
        }
    }

    /// The Commands controller, if that screen is active.
    pub fn as_commands(&self) -> Option<&CommandsScreen> {
        match self {
            ActiveScreen::Commands(screen) => Some(screen),
            _ => None,
        }
    }

    /// The Commands controller, mutably, if that screen is active.
    pub fn as_commands_mut(&mut self) -> Option<&mut CommandsScreen> {
        match self {
            ActiveScreen::Commands(screen) => Some(screen),
            _ => None,
        }
    }
}
