//! Screen router: which view fills the app root.
//!
//! ARCHITECTURE
//! ============
//! A plain state machine held in an `RwSignal` by the root component. Every
//! navigation bumps `generation`, and the root re-renders from scratch on each
//! change, so the previous screen (and its bottom navigation) is torn down and
//! the target mounted fresh.

#[cfg(test)]
#[path = "router_test.rs"]
mod router_test;

use std::fmt;
use std::str::FromStr;

use crate::bootstrap::BootOutcome;

/// Navigable screens.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Screen {
    PositionSelection,
    Dashboard,
    Matches,
}

impl Screen {
    pub const ALL: [Screen; 3] = [Self::PositionSelection, Self::Dashboard, Self::Matches];

    /// Bottom navigation entries, in display order.
    pub const NAV: [Screen; 3] = [Self::Dashboard, Self::Matches, Self::PositionSelection];

    /// Stable route name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::PositionSelection => "position-selection",
            Self::Dashboard => "dashboard",
            Self::Matches => "matches",
        }
    }

    /// Label in the bottom navigation bar.
    #[must_use]
    pub fn nav_label(self) -> &'static str {
        match self {
            Self::PositionSelection => "Profile",
            Self::Dashboard => "Home",
            Self::Matches => "Matches",
        }
    }

    /// Material Symbols icon in the bottom navigation bar.
    #[must_use]
    pub fn nav_icon(self) -> &'static str {
        match self {
            Self::PositionSelection => "person",
            Self::Dashboard => "home",
            Self::Matches => "sports_soccer",
        }
    }

    /// Whether the bottom navigation bar is shown under this screen. The
    /// profile screen is a standalone step while `setup_pending`, and a
    /// regular nav destination once a profile has been saved.
    #[must_use]
    pub fn shows_nav(self, setup_pending: bool) -> bool {
        !(setup_pending && self == Self::PositionSelection)
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Navigation error. Screen \"{0}\" not found.")]
pub struct NavigationError(pub String);

impl FromStr for Screen {
    type Err = NavigationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|screen| screen.name() == s)
            .ok_or_else(|| NavigationError(s.to_owned()))
    }
}

/// What the app root currently shows.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum RouteView {
    /// Spinner while the bootstrapper authenticates.
    #[default]
    Booting,
    Screen(Screen),
    /// Informational panel (e.g. after a debug reset).
    Notice(String),
    /// Error panel replacing the whole root.
    Failed(String),
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RouterState {
    pub view: RouteView,
    /// Incremented on every transition.
    pub generation: u64,
}

impl RouterState {
    /// Currently mounted screen, if a screen is showing.
    #[must_use]
    pub fn current_screen(&self) -> Option<Screen> {
        match self.view {
            RouteView::Screen(screen) => Some(screen),
            _ => None,
        }
    }

    pub fn navigate(&mut self, screen: Screen) {
        tracing::info!(screen = screen.name(), "navigate");
        self.transition(RouteView::Screen(screen));
    }

    /// Navigate by route name. Unknown names replace the root with an error
    /// panel and are returned as an error.
    pub fn navigate_to(&mut self, name: &str) -> Result<Screen, NavigationError> {
        match name.parse::<Screen>() {
            Ok(screen) => {
                self.navigate(screen);
                Ok(screen)
            }
            Err(e) => {
                tracing::error!(screen = name, "screen not found");
                self.transition(RouteView::Failed(e.to_string()));
                Err(e)
            }
        }
    }

    pub fn show_notice(&mut self, message: impl Into<String>) {
        self.transition(RouteView::Notice(message.into()));
    }

    pub fn show_error(&mut self, message: impl Into<String>) {
        self.transition(RouteView::Failed(message.into()));
    }

    /// Reflect the bootstrapper's result.
    pub fn apply_boot(&mut self, outcome: &BootOutcome) {
        match outcome {
            BootOutcome::AlreadyStarted => {}
            BootOutcome::Reset => self.show_notice(RESET_NOTICE),
            BootOutcome::Routed { screen, .. } => self.navigate(*screen),
            BootOutcome::AuthFailed { message } => self.show_error(auth_failed_message(message)),
        }
    }

    fn transition(&mut self, view: RouteView) {
        self.view = view;
        self.generation = self.generation.wrapping_add(1);
    }
}

pub const RESET_NOTICE: &str = "Settings reset. Reload the app without ?reset=true to start over.";

#[must_use]
pub fn auth_failed_message(detail: &str) -> String {
    format!("Authorization failed. The backend is unavailable or rejected the request: {detail}")
}
