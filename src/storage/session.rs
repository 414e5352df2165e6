//! Typed access to the persisted session: bearer token and UI flags.
//!
//! SYSTEM CONTEXT
//! ==============
//! The API client writes here after authentication and profile updates, the
//! bootstrapper reads the profile-setup flag for offline routing, and screens
//! read the cached nickname and position label.
//!
//! Key names and value formats are the ones already sitting in players'
//! `localStorage`, so existing sessions keep working.

use std::fmt;
use std::sync::Arc;

use super::{KeyValueStore, StoreError};

pub const TOKEN_KEY: &str = "jwt_token";
pub const PROFILE_SETUP_KEY: &str = "profileSetupNeeded";
pub const POSITION_LABEL_KEY: &str = "player_position_display";
pub const NICKNAME_KEY: &str = "player_nickname";

const ALL_KEYS: [&str; 4] = [TOKEN_KEY, PROFILE_SETUP_KEY, POSITION_LABEL_KEY, NICKNAME_KEY];

#[derive(Clone)]
pub struct SessionStore {
    store: Arc<dyn KeyValueStore>,
}

impl fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionStore").field("has_token", &self.token().is_some()).finish()
    }
}

impl SessionStore {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Current bearer token. Blank values count as absent.
    #[must_use]
    pub fn token(&self) -> Option<String> {
        self.store.get(TOKEN_KEY).filter(|t| !t.trim().is_empty())
    }

    /// Persist the outcome of a successful authentication. Token and
    /// profile-setup flag are written in one store update.
    pub fn record_auth(&self, token: &str, requires_profile_setup: bool) -> Result<(), StoreError> {
        self.store.set_many(&[(TOKEN_KEY, token), (PROFILE_SETUP_KEY, bool_str(requires_profile_setup))])
    }

    /// Drop the bearer token, leaving UI flags in place.
    pub fn clear_token(&self) -> Result<(), StoreError> {
        self.store.remove(TOKEN_KEY)
    }

    /// Cached profile-setup flag; `None` when never recorded.
    #[must_use]
    pub fn profile_setup_needed(&self) -> Option<bool> {
        match self.store.get(PROFILE_SETUP_KEY)?.as_str() {
            "true" => Some(true),
            "false" => Some(false),
            _ => None,
        }
    }

    pub fn set_profile_setup_needed(&self, needed: bool) -> Result<(), StoreError> {
        self.store.set(PROFILE_SETUP_KEY, bool_str(needed))
    }

    /// Human-readable position label cached after the last profile update.
    #[must_use]
    pub fn position_label(&self) -> Option<String> {
        self.store.get(POSITION_LABEL_KEY).filter(|v| !v.is_empty())
    }

    pub fn set_position_label(&self, label: &str) -> Result<(), StoreError> {
        self.store.set(POSITION_LABEL_KEY, label)
    }

    #[must_use]
    pub fn nickname(&self) -> Option<String> {
        self.store.get(NICKNAME_KEY)
    }

    pub fn set_nickname(&self, nickname: &str) -> Result<(), StoreError> {
        self.store.set(NICKNAME_KEY, nickname)
    }

    /// Forget everything: token, flags and cached profile fields.
    pub fn reset(&self) -> Result<(), StoreError> {
        for key in ALL_KEYS {
            self.store.remove(key)?;
        }
        Ok(())
    }
}

fn bool_str(value: bool) -> &'static str {
    if value { "true" } else { "false" }
}

#[cfg(test)]
#[path = "session_test.rs"]
mod tests;
