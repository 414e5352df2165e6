//! Telegram host integration: launch data and page location.
//!
//! The host injects `window.Telegram.WebApp.initData` before the app loads.
//! Outside Telegram (plain browser tab, native builds) the launch data is
//! absent and the bootstrapper falls back to the cached session.

#[cfg(test)]
#[path = "telegram_test.rs"]
mod telegram_test;

/// Everything the bootstrapper needs from the hosting page.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LaunchContext {
    /// `location.pathname`, e.g. `/app/index.html`.
    pub pathname: String,
    /// `location.search`, with or without the leading `?`.
    pub query: String,
    /// Signed launch payload; `None` when not running inside Telegram.
    pub init_data: Option<String>,
}

impl LaunchContext {
    /// Whether the query string carries the debug `reset=true` flag.
    #[must_use]
    pub fn reset_requested(&self) -> bool {
        parse_reset_flag(&self.query)
    }
}

/// Look for `reset=true` among the query parameters.
#[must_use]
pub fn parse_reset_flag(query: &str) -> bool {
    query
        .trim_start_matches('?')
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .any(|(key, value)| key == "reset" && value == "true")
}

/// Blank launch data counts as absent.
#[must_use]
pub fn normalize_init_data(raw: Option<String>) -> Option<String> {
    raw.filter(|data| !data.trim().is_empty())
}

/// Read the launch context from the browser. Native builds get an empty one.
pub fn read_launch_context() -> LaunchContext {
    #[cfg(feature = "csr")]
    {
        let Some(window) = web_sys::window() else {
            tracing::warn!("no window; starting without launch context");
            return LaunchContext::default();
        };
        let location = window.location();
        LaunchContext {
            pathname: location.pathname().unwrap_or_default(),
            query: location.search().unwrap_or_default(),
            init_data: normalize_init_data(read_init_data(&window)),
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        LaunchContext::default()
    }
}

/// `window.Telegram.WebApp.initData`, if every link in the chain exists.
#[cfg(feature = "csr")]
fn read_init_data(window: &web_sys::Window) -> Option<String> {
    use wasm_bindgen::JsValue;

    let get = |target: &JsValue, key: &str| {
        js_sys::Reflect::get(target, &JsValue::from_str(key))
            .ok()
            .filter(|value| !value.is_undefined() && !value.is_null())
    };

    let telegram = get(window.as_ref(), "Telegram")?;
    let web_app = get(&telegram, "WebApp")?;
    get(&web_app, "initData")?.as_string()
}
