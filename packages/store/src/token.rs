//! # Bearer token storage
//!
//! The session token is the only piece of client state that outlives a page
//! load. It is kept as a single raw string under the fixed key
//! [`ACCESS_TOKEN_KEY`]; at most one token is stored at a time, and its
//! presence is the sole "logged in" signal the UI consults.
//!
//! [`TokenStore`] abstracts where that string lives so the same session
//! logic works against every backend:
//!
//! | Implementation | Platform | Backing |
//! |----------------|----------|---------|
//! | [`MemoryTokenStore`] | tests, fallback | `Arc<Mutex<Option<String>>>` |
//! | [`FileTokenStore`] | desktop | a file under the app data directory |
//! | [`WebTokenStore`] | web (`web` feature) | browser `localStorage` |
//!
//! All implementations swallow storage errors: a read failure degrades to
//! "no token" (logged out) rather than crashing the UI.

use std::sync::{Arc, Mutex};

/// Storage key for the raw bearer token string.
pub const ACCESS_TOKEN_KEY: &str = "access_token";

/// Where the bearer token string is persisted.
pub trait TokenStore {
    /// The stored token, if any.
    fn get(&self) -> Option<String>;
    /// Replace the stored token.
    fn set(&self, token: &str);
    /// Remove the stored token. Idempotent.
    fn clear(&self);
}

/// In-memory token store for tests and as a non-persistent fallback.
#[derive(Clone, Debug, Default)]
pub struct MemoryTokenStore {
    slot: Arc<Mutex<Option<String>>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TokenStore for MemoryTokenStore {
    fn get(&self) -> Option<String> {
        self.slot.lock().unwrap().clone()
    }

    fn set(&self, token: &str) {
        *self.slot.lock().unwrap() = Some(token.to_string());
    }

    fn clear(&self) {
        *self.slot.lock().unwrap() = None;
    }
}

/// Filesystem-backed token store for native platforms.
///
/// The token lives in `<base>/access_token` as plain text. Callers pick a
/// platform-appropriate base via `dirs::data_dir()`.
#[cfg(not(target_arch = "wasm32"))]
#[derive(Clone, Debug)]
pub struct FileTokenStore {
    base: std::path::PathBuf,
}

#[cfg(not(target_arch = "wasm32"))]
impl FileTokenStore {
    pub fn new(base: std::path::PathBuf) -> Self {
        Self { base }
    }

    fn token_path(&self) -> std::path::PathBuf {
        self.base.join(ACCESS_TOKEN_KEY)
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl TokenStore for FileTokenStore {
    fn get(&self) -> Option<String> {
        let raw = std::fs::read_to_string(self.token_path()).ok()?;
        let token = raw.trim();
        if token.is_empty() {
            None
        } else {
            Some(token.to_string())
        }
    }

    fn set(&self, token: &str) {
        let _ = std::fs::create_dir_all(&self.base);
        let _ = std::fs::write(self.token_path(), token);
    }

    fn clear(&self) {
        let _ = std::fs::remove_file(self.token_path());
    }
}

/// `localStorage`-backed token store for the web platform.
///
/// A zero-size struct that looks up `window.localStorage` on every call.
/// Reopening the handle per operation keeps the type `Send + Sync` and
/// costs nothing; the browser owns the actual storage.
#[cfg(all(target_arch = "wasm32", feature = "web"))]
#[derive(Clone, Debug, Default)]
pub struct WebTokenStore;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
impl WebTokenStore {
    pub fn new() -> Self {
        Self
    }

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok()?
    }
}

#[cfg(all(target_arch = "wasm32", feature = "web"))]
impl TokenStore for WebTokenStore {
    fn get(&self) -> Option<String> {
        Self::storage()?.get_item(ACCESS_TOKEN_KEY).ok()?
    }

    fn set(&self, token: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.set_item(ACCESS_TOKEN_KEY, token);
        }
    }

    fn clear(&self) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(ACCESS_TOKEN_KEY);
        }
    }
}

impl<T: TokenStore + ?Sized> TokenStore for Arc<T> {
    fn get(&self) -> Option<String> {
        (**self).get()
    }

    fn set(&self, token: &str) {
        (**self).set(token)
    }

    fn clear(&self) {
        (**self).clear()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_roundtrip() {
        let store = MemoryTokenStore::new();
        assert!(store.get().is_none());

        store.set("abc.def.ghi");
        assert_eq!(store.get().as_deref(), Some("abc.def.ghi"));

        store.clear();
        assert!(store.get().is_none());

        // Clearing an empty store is fine
        store.clear();
        assert!(store.get().is_none());
    }

    #[test]
    fn test_only_one_token_at_a_time() {
        let store = MemoryTokenStore::new();
        store.set("first");
        store.set("second");
        assert_eq!(store.get().as_deref(), Some("second"));
    }

    #[test]
    fn test_file_store_roundtrip() {
        let dir = std::env::temp_dir().join(format!("taskverse_token_test_{}", std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);

        let store = FileTokenStore::new(dir.clone());
        assert!(store.get().is_none());

        store.set("header.payload.sig");

        // Re-open from the same directory
        let store2 = FileTokenStore::new(dir.clone());
        assert_eq!(store2.get().as_deref(), Some("header.payload.sig"));

        store2.clear();
        assert!(store.get().is_none());

        let _ = std::fs::remove_dir_all(&dir);
    }
}
