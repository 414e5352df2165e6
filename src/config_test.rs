use super::*;
use std::collections::HashMap;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| map.get(key).cloned()
}

#[test]
fn from_lookup_defaults() {
    let cfg = AppConfig::from_lookup(lookup_from(&[])).unwrap();
    assert_eq!(cfg, AppConfig::default());
    assert_eq!(cfg.endpoints.auth, "/api/auth/telegram");
    assert_eq!(cfg.endpoints.profile, "/player/profile");
    assert_eq!(cfg.endpoints.dashboard, "/api/dashboard");
    assert_eq!(cfg.endpoints.matches, "/api/matches");
}

#[test]
fn from_lookup_parses_overrides() {
    let cfg = AppConfig::from_lookup(lookup_from(&[
        ("KICKOFF_API_BASE_URL", "https://backend.example.test/"),
        ("KICKOFF_PROFILE_PATH", "api/player/profile"),
        ("KICKOFF_DASHBOARD_PATH", "/dashboard"),
        ("KICKOFF_REQUEST_TIMEOUT_SECS", "42"),
        ("KICKOFF_CONNECT_TIMEOUT_SECS", "7"),
    ]))
    .unwrap();
    assert_eq!(cfg.api_base_url, "https://backend.example.test");
    assert_eq!(cfg.endpoints.profile, "/api/player/profile");
    assert_eq!(cfg.endpoints.dashboard, "/dashboard");
    assert_eq!(cfg.timeouts, HttpTimeouts { request_secs: 42, connect_secs: 7 });
}

#[test]
fn from_lookup_ignores_bad_timeouts_and_blank_paths() {
    let cfg = AppConfig::from_lookup(lookup_from(&[
        ("KICKOFF_REQUEST_TIMEOUT_SECS", "soon"),
        ("KICKOFF_AUTH_PATH", "   "),
    ]))
    .unwrap();
    assert_eq!(cfg.timeouts.request_secs, DEFAULT_REQUEST_TIMEOUT_SECS);
    assert_eq!(cfg.endpoints.auth, DEFAULT_AUTH_PATH);
}

#[test]
fn from_lookup_rejects_base_url_without_scheme() {
    let err = AppConfig::from_lookup(lookup_from(&[("KICKOFF_API_BASE_URL", "backend.local")])).unwrap_err();
    assert_eq!(err, ConfigError::InvalidBaseUrl("backend.local".to_owned()));
    assert!(AppConfig::default().with_base_url("https://").is_err());
}

#[test]
fn url_joins_base_and_path() {
    let cfg = AppConfig::default().with_base_url("https://api.example.test/").unwrap();
    assert_eq!(cfg.url("/api/dashboard"), "https://api.example.test/api/dashboard");
    assert_eq!(cfg.url("api/matches"), "https://api.example.test/api/matches");
}

#[test]
fn base_path_strips_file_and_js_folder() {
    assert_eq!(resolve_base_path("/app/index.html"), "/app/");
    assert_eq!(resolve_base_path("/app/js/main.js"), "/app/");
    assert_eq!(resolve_base_path("/app/"), "/app/");
    assert_eq!(resolve_base_path("/index.html"), "/");
    assert_eq!(resolve_base_path(""), "/");
    assert_eq!(resolve_base_path("/js/main.js"), "/");
}
