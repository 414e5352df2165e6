//! `window.localStorage` backend.
//!
//! The `Storage` handle is not `Send`, so it is looked up on every call
//! instead of being held by the store.

use super::{KeyValueStore, StoreError};

#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserStore;

fn local_storage() -> Result<web_sys::Storage, StoreError> {
    web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .ok_or_else(|| StoreError::Unavailable("localStorage is not accessible".to_owned()))
}

fn js_error(err: &wasm_bindgen::JsValue) -> StoreError {
    StoreError::Unavailable(err.as_string().unwrap_or_else(|| format!("{err:?}")))
}

impl KeyValueStore for BrowserStore {
    fn get(&self, key: &str) -> Option<String> {
        local_storage().ok()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        local_storage()?.set_item(key, value).map_err(|e| js_error(&e))
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        local_storage()?.remove_item(key).map_err(|e| js_error(&e))
    }
}
