//! # kickoff
//!
//! Leptos + WASM frontend for the Kickoff Telegram Mini App: players sign in
//! with Telegram launch data, set up a profile, follow their season dashboard
//! and record upcoming matches.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser build (`csr`) mounts [`app::App`] on `<body>`. Everything below
//! the view layer (config, token store, API client, router, bootstrapper and
//! screen controllers) is plain Rust behind the [`net::transport::Transport`]
//! and [`storage::KeyValueStore`] seams, so the `kickoff-cli` harness and the
//! test suite drive the same flows natively.

pub mod app;
pub mod bootstrap;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod storage;
pub mod telegram;

/// Browser entry point: install console logging, resolve config and launch
/// context, then mount the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    use std::sync::Arc;

    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);

    let config = match config::AppConfig::from_build_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "invalid build configuration; falling back to defaults");
            config::AppConfig::default()
        }
    };
    let launch = telegram::read_launch_context();
    let ctx = state::context::AppContext::new(
        config,
        Arc::new(net::transport::BrowserTransport),
        Arc::new(storage::BrowserStore),
    );

    leptos::mount::mount_to_body(move || {
        use leptos::prelude::*;
        view! { <app::App ctx=ctx launch=launch/> }
    });
}
