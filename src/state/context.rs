//! Composition root shared by every screen.
//!
//! DESIGN
//! ======
//! Built once at startup from the resolved config and the platform's transport
//! and store, then provided to the component tree via `provide_context`.
//! Cloning is cheap: every field is an `Arc` or wraps one.

use std::sync::{Arc, OnceLock};

use crate::config::AppConfig;
use crate::net::api::ApiClient;
use crate::net::transport::Transport;
use crate::storage::{KeyValueStore, SessionStore};

use super::guard::{LoadGuard, OnceFlag};

/// Initialization flags owned by the app instance.
#[derive(Debug)]
pub struct InitState {
    /// Claimed by the first bootstrapper run.
    pub boot: OnceFlag,
    /// Held while a dashboard load is in flight.
    pub dashboard: LoadGuard,
    /// Held while a match is being submitted.
    pub create_match: LoadGuard,
}

impl Default for InitState {
    fn default() -> Self {
        Self {
            boot: OnceFlag::new(),
            dashboard: LoadGuard::new("dashboard"),
            create_match: LoadGuard::new("create_match"),
        }
    }
}

#[derive(Clone)]
pub struct AppContext {
    pub config: Arc<AppConfig>,
    pub session: SessionStore,
    pub api: ApiClient,
    pub init: Arc<InitState>,
    base_path: Arc<OnceLock<String>>,
}

impl AppContext {
    pub fn new(config: AppConfig, transport: Arc<dyn Transport>, store: Arc<dyn KeyValueStore>) -> Self {
        let config = Arc::new(config);
        let session = SessionStore::new(store);
        let api = ApiClient::new(config.clone(), transport, session.clone());
        Self { config, session, api, init: Arc::new(InitState::default()), base_path: Arc::new(OnceLock::new()) }
    }

    /// Directory the app is served from; `/` until the bootstrapper resolves it.
    #[must_use]
    pub fn base_path(&self) -> &str {
        self.base_path.get().map_or("/", String::as_str)
    }

    /// Record the resolved base path. Only the first call has an effect.
    pub fn set_base_path(&self, base_path: String) {
        let _ = self.base_path.set(base_path);
    }

    /// URL of a static asset relative to the app directory.
    #[must_use]
    pub fn asset_url(&self, file: &str) -> String {
        format!("{}{}", self.base_path(), file.trim_start_matches('/'))
    }
}
