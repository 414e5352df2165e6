use super::*;
use crate::bootstrap::RouteSource;

#[test]
fn screen_names_round_trip() {
    for screen in Screen::ALL {
        assert_eq!(screen.name().parse::<Screen>(), Ok(screen));
    }
}

#[test]
fn unknown_screen_name_is_rejected() {
    let err = "settings".parse::<Screen>().unwrap_err();
    assert_eq!(err.to_string(), "Navigation error. Screen \"settings\" not found.");
}

#[test]
fn default_view_is_booting() {
    let state = RouterState::default();
    assert_eq!(state.view, RouteView::Booting);
    assert_eq!(state.current_screen(), None);
}

#[test]
fn every_navigation_bumps_generation() {
    let mut state = RouterState::default();
    state.navigate(Screen::Dashboard);
    state.navigate(Screen::Dashboard);
    assert_eq!(state.generation, 2);
    assert_eq!(state.current_screen(), Some(Screen::Dashboard));
}

#[test]
fn navigate_to_unknown_name_shows_error_panel() {
    let mut state = RouterState::default();
    state.navigate(Screen::Matches);
    assert!(state.navigate_to("nowhere").is_err());
    assert_eq!(state.current_screen(), None);
    assert!(matches!(state.view, RouteView::Failed(ref m) if m.contains("nowhere")));

    assert_eq!(state.navigate_to("matches"), Ok(Screen::Matches));
    assert_eq!(state.current_screen(), Some(Screen::Matches));
    assert!("create-match".parse::<Screen>().is_err());
}

#[test]
fn nav_is_hidden_during_profile_setup() {
    assert!(!Screen::PositionSelection.shows_nav(true));
    assert!(Screen::Dashboard.shows_nav(true));
    assert!(Screen::NAV.contains(&Screen::Matches));
}

#[test]
fn profile_screen_keeps_nav_once_setup_is_done() {
    let mut state = RouterState::default();
    state.navigate(Screen::Dashboard);
    state.navigate(Screen::PositionSelection);
    let screen = state.current_screen().unwrap();
    assert!(screen.shows_nav(false));
    assert!(Screen::NAV.contains(&screen));

    state.navigate(Screen::Dashboard);
    assert_eq!(state.current_screen(), Some(Screen::Dashboard));
}

#[test]
fn every_screen_is_reachable_from_the_nav() {
    for screen in Screen::ALL {
        assert!(Screen::NAV.contains(&screen), "{screen} has no nav entry");
    }
}

#[test]
fn apply_boot_maps_each_outcome() {
    let mut state = RouterState::default();
    state.apply_boot(&BootOutcome::Routed { screen: Screen::PositionSelection, source: RouteSource::Authenticated });
    assert_eq!(state.current_screen(), Some(Screen::PositionSelection));

    let before = state.clone();
    state.apply_boot(&BootOutcome::AlreadyStarted);
    assert_eq!(state, before);

    state.apply_boot(&BootOutcome::Reset);
    assert_eq!(state.view, RouteView::Notice(RESET_NOTICE.to_owned()));

    state.apply_boot(&BootOutcome::AuthFailed { message: "timeout".to_owned() });
    assert!(matches!(state.view, RouteView::Failed(ref m) if m.ends_with("timeout")));
}
