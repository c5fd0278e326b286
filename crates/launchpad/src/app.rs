//! Application state: router, repository, theme and the active screen

use tracing::debug;

use crate::config::AppConfig;
use crate::content::ContentRepository;
use crate::error::Result;
use crate::navigation::{bottom_nav, NavItem, Route, Router, Tab};
use crate::screens::ActiveScreen;
use crate::theme::ThemeState;

/// Top-level application state.
///
/// Passed down to screens explicitly; there is no global state. All
/// mutation happens through `&mut self` on one event loop.
///
/// # Example
///
/// ```
/// use launchpad::{App, AppConfig, Route, Tab};
///
/// let mut app = App::new(AppConfig::default(), false).unwrap();
/// assert_eq!(app.current_route(), Route::Home);
///
/// app.select_tab(Tab::Commands);
/// app.screen_mut().as_commands_mut().unwrap().set_query("ship");
///
/// app.toggle_theme();
/// assert!(app.theme().is_dark());
/// ```
#[derive(Debug, Clone)]
pub struct App {
    config: AppConfig,
    repository: ContentRepository,
    router: Router,
    theme: ThemeState,
    screen: ActiveScreen,
}

impl App {
    /// Build the app with the builtin content.
    ///
    /// `ambient_dark` is the platform's light/dark preference at startup.
    pub fn new(config: AppConfig, ambient_dark: bool) -> Result<Self> {
        Ok(Self::with_repository(
            config,
            ContentRepository::builtin()?,
            ambient_dark,
        ))
    }

    /// Build the app around an existing repository.
    pub fn with_repository(
        config: AppConfig,
        repository: ContentRepository,
        ambient_dark: bool,
    ) -> Self {
        let router = Router::new();
        let screen = ActiveScreen::for_route(router.current());
        Self {
            config,
            repository,
            router,
            theme: ThemeState::from_ambient(ambient_dark),
            screen,
        }
    }

    // ═══════════════════════════════════════════════════════════════════
    // Accessors
    // ═══════════════════════════════════════════════════════════════════

    /// Configuration.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Content repository.
    pub fn repository(&self) -> &ContentRepository {
        &self.repository
    }

    /// Router.
    pub fn router(&self) -> &Router {
        &self.router
    }

    /// Theme state.
    pub fn theme(&self) -> &ThemeState {
        &self.theme
    }

    /// Current route.
    pub fn current_route(&self) -> Route {
        self.router.current()
    }

    /// Controller for the current route.
    pub fn screen(&self) -> &ActiveScreen {
        &self.screen
    }

    /// Controller for the current route, mutably.
    pub fn screen_mut(&mut self) -> &mut ActiveScreen {
        &mut self.screen
    }

    /// Bottom navigation bar for the current route.
    pub fn bottom_nav(&self) -> Vec<NavItem> {
        bottom_nav(self.router.current())
    }

    // ═══════════════════════════════════════════════════════════════════
    // Actions
    // ═══════════════════════════════════════════════════════════════════

    /// Navigate to `route`. See [`Router::navigate`].
    pub fn navigate(&mut self, route: Route) -> bool {
        let changed = self.router.navigate(route);
        self.sync_screen(changed)
    }

    /// Parse `path` and navigate to it.
    ///
    /// Unknown guide categories use the configured fallback.
    pub fn navigate_path(&mut self, path: &str) -> Result<bool> {
        let route = Route::parse_with_fallback(path, self.config.fallback_guide_category)?;
        Ok(self.navigate(route))
    }

    /// Go back. See [`Router::back`].
    pub fn back(&mut self) -> bool {
        let changed = self.router.back();
        self.sync_screen(changed)
    }

    /// Switch tabs. See [`Router::select_tab`].
    pub fn select_tab(&mut self, tab: Tab) -> bool {
        let changed = self.router.select_tab(tab);
        self.sync_screen(changed)
    }

    /// Flip the theme. Returns whether dark mode is now on.
    pub fn toggle_theme(&mut self) -> bool {
        self.theme.toggle()
    }

    fn sync_screen(&mut self, changed: bool) -> bool {
        if changed {
            let route = self.router.current();
            debug!(%route, "activating screen");
            self.screen = ActiveScreen::for_route(route);
        }
        changed
    }
}
