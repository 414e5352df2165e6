//! App bootstrapper: one linear pass from page load to the first screen.
//!
//! ARCHITECTURE
//! ============
//! 1. Claim the boot flag (a second call is a no-op).
//! 2. Resolve and record the base path.
//! 3. `reset=true` in the query: clear the stored session and stop.
//! 4. No launch data: route by the cached profile-setup flag.
//! 5. Otherwise authenticate and route by the backend's answer.
//!
//! The caller applies the returned [`BootOutcome`] to the router; nothing
//! here touches the view.

#[cfg(test)]
#[path = "bootstrap_test.rs"]
mod bootstrap_test;

use crate::config::resolve_base_path;
use crate::state::context::AppContext;
use crate::state::router::Screen;
use crate::telegram::LaunchContext;

/// How the first screen was chosen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteSource {
    /// No launch data; cached profile-setup flag.
    Offline,
    /// Fresh authentication against the backend.
    Authenticated,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BootOutcome {
    /// Boot already ran for this app instance.
    AlreadyStarted,
    /// Stored state was cleared by the debug reset flag.
    Reset,
    Routed { screen: Screen, source: RouteSource },
    AuthFailed { message: String },
}

/// First screen for a given profile-setup state.
#[must_use]
pub fn landing_screen(requires_profile_setup: bool) -> Screen {
    if requires_profile_setup { Screen::PositionSelection } else { Screen::Dashboard }
}

pub async fn boot(ctx: &AppContext, launch: &LaunchContext) -> BootOutcome {
    if !ctx.init.boot.claim() {
        tracing::debug!("boot already started; ignoring");
        return BootOutcome::AlreadyStarted;
    }

    let base_path = resolve_base_path(&launch.pathname);
    tracing::debug!(base_path = %base_path, "resolved base path");
    ctx.set_base_path(base_path);

    if launch.reset_requested() {
        if let Err(e) = ctx.session.reset() {
            tracing::error!(error = %e, "failed to clear stored session");
        }
        tracing::info!("session reset by query flag");
        return BootOutcome::Reset;
    }

    let Some(init_data) = launch.init_data.as_deref() else {
        // Only an explicit "false" skips setup.
        let needs_setup = ctx.session.profile_setup_needed() != Some(false);
        tracing::warn!(needs_setup, "no launch data; routing from cached session");
        return BootOutcome::Routed { screen: landing_screen(needs_setup), source: RouteSource::Offline };
    };

    match ctx.api.authenticate(init_data).await {
        Ok(auth) => BootOutcome::Routed {
            screen: landing_screen(auth.requires_profile_setup),
            source: RouteSource::Authenticated,
        },
        Err(e) => {
            tracing::error!(error = %e, code = e.error_code(), "authentication failed");
            BootOutcome::AuthFailed { message: e.to_string() }
        }
    }
}
