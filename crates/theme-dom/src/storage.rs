//! Guarded `localStorage` access.
//!
//! Storage can be absent or throw (private browsing, storage quota, blocked
//! third-party context); widgets treat persistence as best effort, so every
//! failure collapses to `None` or a logged warning.

use web_sys::Storage;

/// Best-effort wrapper around `window.localStorage`.
pub struct LocalStore {
    storage: Storage,
}

impl LocalStore {
    /// Open local storage, or `None` when the browser denies access.
    pub fn open() -> Option<Self> {
        let storage = web_sys::window()?.local_storage().ok().flatten()?;
        Some(Self { storage })
    }

    /// Read a key.
    pub fn get(&self, key: &str) -> Option<String> {
        self.storage.get_item(key).ok().flatten()
    }

    /// Write a key. Failures are logged and swallowed.
    pub fn set(&self, key: &str, value: &str) {
        if self.storage.set_item(key, value).is_err() {
            log::warn!("localStorage write failed for {key}");
        }
    }
}
