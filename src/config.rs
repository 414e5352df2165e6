//! App configuration resolved once at startup.
//!
//! DESIGN
//! ======
//! The backend contract drifted between deployments (`/player/profile` vs
//! `/api/player/profile`, `/dashboard` vs `/api/dashboard`), so every path is
//! configuration. Native tools read environment variables; the browser build
//! captures the same keys at compile time.

use std::time::Duration;

pub const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:8080";
pub const DEFAULT_AUTH_PATH: &str = "/api/auth/telegram";
pub const DEFAULT_PROFILE_PATH: &str = "/player/profile";
pub const DEFAULT_DASHBOARD_PATH: &str = "/api/dashboard";
pub const DEFAULT_MATCHES_PATH: &str = "/api/matches";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid API base URL `{0}`: expected an http:// or https:// URL")]
    InvalidBaseUrl(String),
}

/// Backend endpoint paths, each with a leading `/`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    pub auth: String,
    pub profile: String,
    pub dashboard: String,
    pub matches: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            auth: DEFAULT_AUTH_PATH.to_owned(),
            profile: DEFAULT_PROFILE_PATH.to_owned(),
            dashboard: DEFAULT_DASHBOARD_PATH.to_owned(),
            matches: DEFAULT_MATCHES_PATH.to_owned(),
        }
    }
}

/// HTTP timeouts for the native transport. The browser transport has none.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HttpTimeouts {
    pub request_secs: u64,
    pub connect_secs: u64,
}

impl HttpTimeouts {
    #[must_use]
    pub fn request(self) -> Duration {
        Duration::from_secs(self.request_secs)
    }

    #[must_use]
    pub fn connect(self) -> Duration {
        Duration::from_secs(self.connect_secs)
    }
}

impl Default for HttpTimeouts {
    fn default() -> Self {
        Self { request_secs: DEFAULT_REQUEST_TIMEOUT_SECS, connect_secs: DEFAULT_CONNECT_TIMEOUT_SECS }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Backend origin without a trailing `/`.
    pub api_base_url: String,
    pub endpoints: Endpoints,
    pub timeouts: HttpTimeouts,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_owned(),
            endpoints: Endpoints::default(),
            timeouts: HttpTimeouts::default(),
        }
    }
}

impl AppConfig {
    /// Build config from process environment variables.
    ///
    /// Optional:
    /// - `KICKOFF_API_BASE_URL`: default `http://127.0.0.1:8080`
    /// - `KICKOFF_AUTH_PATH`, `KICKOFF_PROFILE_PATH`, `KICKOFF_DASHBOARD_PATH`,
    ///   `KICKOFF_MATCHES_PATH`: endpoint overrides
    /// - `KICKOFF_REQUEST_TIMEOUT_SECS`: default 30
    /// - `KICKOFF_CONNECT_TIMEOUT_SECS`: default 10
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from the same keys captured when the WASM bundle was compiled.
    pub fn from_build_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| {
            let value = match key {
                "KICKOFF_API_BASE_URL" => option_env!("KICKOFF_API_BASE_URL"),
                "KICKOFF_AUTH_PATH" => option_env!("KICKOFF_AUTH_PATH"),
                "KICKOFF_PROFILE_PATH" => option_env!("KICKOFF_PROFILE_PATH"),
                "KICKOFF_DASHBOARD_PATH" => option_env!("KICKOFF_DASHBOARD_PATH"),
                "KICKOFF_MATCHES_PATH" => option_env!("KICKOFF_MATCHES_PATH"),
                _ => None,
            };
            value.map(str::to_owned)
        })
    }

    /// Build config from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_base_url =
            normalize_base_url(&lookup("KICKOFF_API_BASE_URL").unwrap_or_else(|| DEFAULT_API_BASE_URL.to_owned()))?;

        let path = |key: &str, default: &str| {
            let raw = lookup(key).filter(|v| !v.trim().is_empty());
            normalize_path(raw.as_deref().unwrap_or(default))
        };
        let endpoints = Endpoints {
            auth: path("KICKOFF_AUTH_PATH", DEFAULT_AUTH_PATH),
            profile: path("KICKOFF_PROFILE_PATH", DEFAULT_PROFILE_PATH),
            dashboard: path("KICKOFF_DASHBOARD_PATH", DEFAULT_DASHBOARD_PATH),
            matches: path("KICKOFF_MATCHES_PATH", DEFAULT_MATCHES_PATH),
        };

        let timeouts = HttpTimeouts {
            request_secs: parse_u64(lookup("KICKOFF_REQUEST_TIMEOUT_SECS"), DEFAULT_REQUEST_TIMEOUT_SECS),
            connect_secs: parse_u64(lookup("KICKOFF_CONNECT_TIMEOUT_SECS"), DEFAULT_CONNECT_TIMEOUT_SECS),
        };

        Ok(Self { api_base_url, endpoints, timeouts })
    }

    /// Replace the backend origin, keeping endpoints and timeouts.
    pub fn with_base_url(mut self, base_url: &str) -> Result<Self, ConfigError> {
        self.api_base_url = normalize_base_url(base_url)?;
        Ok(self)
    }

    /// Absolute URL for an endpoint path.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.api_base_url, normalize_path(path))
    }
}

fn parse_u64(raw: Option<String>, default: u64) -> u64 {
    raw.and_then(|v| v.trim().parse::<u64>().ok()).unwrap_or(default)
}

fn normalize_base_url(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim().trim_end_matches('/');
    let has_scheme = trimmed.starts_with("http://") || trimmed.starts_with("https://");
    let has_host = trimmed.split_once("://").is_some_and(|(_, host)| !host.is_empty());
    if !has_scheme || !has_host {
        return Err(ConfigError::InvalidBaseUrl(raw.to_owned()));
    }
    Ok(trimmed.to_owned())
}

fn normalize_path(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.starts_with('/') { trimmed.to_owned() } else { format!("/{trimmed}") }
}

/// Directory the app is served from, always ending in `/`.
///
/// The script may live in a `js/` subfolder next to the page, so a trailing
/// `/js` segment is stripped: `/app/js/main.js` and `/app/index.html` both
/// resolve to `/app/`.
#[must_use]
pub fn resolve_base_path(pathname: &str) -> String {
    let mut path = match pathname.rfind('/') {
        Some(idx) => &pathname[..idx],
        None => "",
    };
    if let Some(stripped) = path.strip_suffix("/js") {
        path = stripped;
    }
    if path.ends_with('/') { path.to_owned() } else { format!("{path}/") }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
