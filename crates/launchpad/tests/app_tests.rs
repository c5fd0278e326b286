//! End-to-end tests driving the app the way a UI host would

use launchpad::screens::{CommandDetailView, SettingsRow};
use launchpad::*;
use pretty_assertions::assert_eq;

fn app() -> App {
    App::new(AppConfig::default(), false).expect("builtin app")
}

fn dark_theme_switch(app: &App) -> bool {
    let ActiveScreen::Settings(screen) = app.screen() else {
        panic!("settings not active");
    };
    let sections = screen.view(app.repository(), app.theme(), app.config());
    match sections[0].rows[0] {
        SettingsRow::Toggle { on, .. } => on,
        ref other => panic!("expected the theme toggle, got {other:?}"),
    }
}

#[test]
fn test_browse_guide_and_return() {
    let mut app = app();
    assert!(app.select_tab(Tab::Guides));
    assert!(app.navigate(Route::GuideDetail(GuideCategory::Social)));
    assert_eq!(app.router().selected_tab(), Tab::Guides);

    let ActiveScreen::GuideDetail(screen) = app.screen() else {
        panic!("guide detail not active");
    };
    assert_eq!(screen.view(app.repository()).category, GuideCategory::Social);

    assert!(app.back());
    assert_eq!(app.current_route(), Route::Guides);
    assert!(matches!(app.screen(), ActiveScreen::Guides(_)));
}

#[test]
fn test_search_then_open_detail() {
    let mut app = app();
    app.select_tab(Tab::Commands);

    let commands = app.screen_mut().as_commands_mut().expect("commands active");
    commands.set_query("queue");
    commands.open_detail("/burn");

    let commands = app.screen().as_commands().expect("commands active");
    let detail = commands.detail().expect("detail open");
    let view = detail.view(app.repository(), &NoSource, app.config());
    assert!(matches!(view, CommandDetailView::Found { name: "/burn", .. }));
}

#[test]
fn test_theme_toggle_reaches_settings() {
    let mut app = app();
    app.select_tab(Tab::Settings);
    assert!(!dark_theme_switch(&app));

    assert!(app.toggle_theme());
    assert!(dark_theme_switch(&app));

    assert!(!app.toggle_theme());
    assert!(!dark_theme_switch(&app));
}

#[test]
fn test_theme_survives_navigation() {
    let mut app = App::new(AppConfig::default(), true).expect("builtin app");
    app.select_tab(Tab::About);
    app.back();
    assert!(app.theme().is_dark());
}

#[test]
fn test_bottom_nav_follows_route() {
    let mut app = app();
    app.navigate_path("guide/GAMES").expect("known route family");

    let selected: Vec<_> = app
        .bottom_nav()
        .into_iter()
        .filter(|item| item.selected)
        .map(|item| item.title)
        .collect();
    assert_eq!(selected, vec![Tab::Guides.title()]);
}

#[test]
fn test_navigate_path_rejects_unknown_family() {
    let mut app = app();
    assert!(matches!(
        app.navigate_path("profile"),
        Err(LaunchpadError::UnknownRoute(_))
    ));
    assert_eq!(app.current_route(), Route::Home);
}
