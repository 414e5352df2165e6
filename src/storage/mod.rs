//! Persistent key-value storage behind the session token store.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser app persists its session in `localStorage`; the native CLI uses
//! a JSON file and tests use memory. All three sit behind [`KeyValueStore`] so
//! [`SessionStore`] and everything above it never touch a backend directly.

#[cfg(feature = "csr")]
mod browser;
#[cfg(feature = "native")]
mod file;
mod memory;
pub mod session;

#[cfg(feature = "csr")]
pub use browser::BrowserStore;
#[cfg(feature = "native")]
pub use file::FileStore;
pub use memory::MemoryStore;
pub use session::SessionStore;

/// Errors produced by storage backends.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The store file could not be read or written.
    #[error("storage I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// The store file exists but is not a JSON object of strings.
    #[error("storage file is corrupt: {0}")]
    Corrupt(#[from] serde_json::Error),

    /// The backing store is missing or refused the write (private mode, quota).
    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

/// String key-value store with `localStorage` semantics.
pub trait KeyValueStore: Send + Sync {
    /// Read the value for `key`, or `None` when absent or unreadable.
    fn get(&self, key: &str) -> Option<String>;

    /// Write `value` for `key`.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] if the backend rejects the write.
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Delete `key`. Deleting a missing key is not an error.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] if the backend rejects the delete.
    fn remove(&self, key: &str) -> Result<(), StoreError>;

    /// Write several entries together. Backends that can apply them as one
    /// update override this.
    ///
    /// # Errors
    ///
    /// Returns the first [`StoreError`] raised by the backend.
    fn set_many(&self, entries: &[(&str, &str)]) -> Result<(), StoreError> {
        for (key, value) in entries {
            self.set(key, value)?;
        }
        Ok(())
    }
}
