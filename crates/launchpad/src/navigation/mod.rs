//! Navigation Router: current route plus back-navigable history

mod route;
mod tab;

pub use route::{Route, GUIDE_DETAIL_PREFIX};
pub use tab::{bottom_nav, NavItem, Tab};

use tracing::debug;

/// Stack-based router over [`Route`].
///
/// The bottom of the history is always [`Route::Home`] and is never
/// popped, so the router is always on exactly one route.
///
/// # Example
///
/// ```
/// use launchpad::{GuideCategory, Route, Router, Tab};
///
/// let mut router = Router::new();
///
/// router.select_tab(Tab::Guides);
/// router.navigate(Route::GuideDetail(GuideCategory::Games));
/// assert_eq!(router.selected_tab(), Tab::Guides);
///
/// // Back returns to whichever screen opened the detail
/// router.back();
/// assert_eq!(router.current(), Route::Guides);
///
/// router.back();
/// router.back(); // No-op at Home
/// assert_eq!(router.current(), Route::Home);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Router {
    /// Visited routes, current at the end
    history: Vec<Route>,
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}

impl Router {
    /// Create a router at [`Route::Home`].
    pub fn new() -> Self {
        Self {
            history: vec![Route::Home],
        }
    }

    /// The current route.
    pub fn current(&self) -> Route {
        // history is never empty
        self.history.last().copied().unwrap_or_default()
    }

    /// The full history, oldest first.
    pub fn history(&self) -> &[Route] {
        &self.history
    }

    /// Number of routes in the history.
    pub fn depth(&self) -> usize {
        self.history.len()
    }

    /// Whether [`back`](Self::back) would change the route.
    pub fn can_go_back(&self) -> bool {
        self.history.len() > 1
    }

    /// The bottom tab highlighted for the current route.
    pub fn selected_tab(&self) -> Tab {
        Tab::for_route(self.current())
    }

    // ═══════════════════════════════════════════════════════════════════
    // Transitions
    // ═══════════════════════════════════════════════════════════════════

    /// Push `route` onto the history.
    ///
    /// Navigating to the current route does nothing. Returns whether the
    /// route changed.
    pub fn navigate(&mut self, route: Route) -> bool {
        let from = self.current();
        if from == route {
            return false;
        }
        debug!(%from, to = %route, "navigate");
        self.history.push(route);
        true
    }

    /// Pop back to the previous route.
    ///
    /// Does nothing at the initial route. Returns whether the route changed.
    pub fn back(&mut self) -> bool {
        if !self.can_go_back() {
            return false;
        }
        let from = self.history.pop();
        debug!(from = ?from, to = %self.current(), "back");
        true
    }

    /// Switch to `tab`'s route, first clearing history back to Home.
    ///
    /// Selecting the tab whose route is already current does nothing.
    /// Returns whether the route changed.
    pub fn select_tab(&mut self, tab: Tab) -> bool {
        let from = self.current();
        let target = tab.route();
        if from == target {
            return false;
        }

        self.history.truncate(1);
        if target != Route::Home {
            self.history.push(target);
        }
        debug!(%from, to = %target, depth = self.history.len(), "select tab");
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::GuideCategory;

    #[test]
    fn test_starts_at_home() {
        let router = Router::new();
        assert_eq!(router.current(), Route::Home);
        assert_eq!(router.depth(), 1);
        assert!(!router.can_go_back());
    }

    #[test]
    fn test_self_navigation_is_noop() {
        let mut router = Router::new();
        assert!(router.navigate(Route::Commands));
        assert!(!router.navigate(Route::Commands));
        assert_eq!(router.history(), &[Route::Home, Route::Commands]);
    }

    #[test]
    fn test_back_at_home_is_noop() {
        let mut router = Router::new();
        assert!(!router.back());
        assert_eq!(router.current(), Route::Home);
    }

    #[test]
    fn test_tab_switch_truncates_history() {
        let mut router = Router::new();
        router.navigate(Route::Guides);
        router.navigate(Route::GuideDetail(GuideCategory::Games));
        router.navigate(Route::About);

        assert!(router.select_tab(Tab::Commands));
        assert_eq!(router.history(), &[Route::Home, Route::Commands]);

        assert!(router.select_tab(Tab::Home));
        assert_eq!(router.history(), &[Route::Home]);
    }

    #[test]
    fn test_selecting_current_tab_is_noop() {
        let mut router = Router::new();
        router.navigate(Route::Guides);
        router.navigate(Route::Commands);
        assert!(!router.select_tab(Tab::Commands));
        assert_eq!(router.depth(), 3);
    }

    #[test]
    fn test_guide_detail_from_home_backs_to_home() {
        let mut router = Router::new();
        router.navigate(Route::GuideDetail(GuideCategory::Social));
        assert_eq!(router.selected_tab(), Tab::Guides);
        router.back();
        assert_eq!(router.current(), Route::Home);
    }
}
