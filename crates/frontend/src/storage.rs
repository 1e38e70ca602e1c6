//! Session token persistence in the browser

use crate::config::AppConfig;
use quill_http::TokenStore;
use web_sys::Storage;

/// Session token kept in `localStorage`, surviving reloads and tabs
#[derive(Debug, Clone, Copy)]
pub struct LocalTokenStore {
    key: &'static str,
}

impl LocalTokenStore {
    pub fn new() -> Self {
        Self::with_key(AppConfig::TOKEN_KEY)
    }

    pub fn with_key(key: &'static str) -> Self {
        Self { key }
    }
}

impl Default for LocalTokenStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Get localStorage
fn get_local_storage() -> Option<Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

impl TokenStore for LocalTokenStore {
    fn load(&self) -> Option<String> {
        get_local_storage().and_then(|storage| storage.get_item(self.key).ok().flatten())
    }

    fn save(&self, token: &str) {
        let Some(storage) = get_local_storage() else {
            warn!("localStorage unavailable, session token not saved");
            return;
        };
        if storage.set_item(self.key, token).is_err() {
            warn!(key = self.key, "Failed to save session token");
        }
    }

    fn remove(&self) {
        if let Some(storage) = get_local_storage() {
            if storage.remove_item(self.key).is_err() {
                warn!(key = self.key, "Failed to remove session token");
            }
        }
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_round_trip_through_local_storage() {
        let store = LocalTokenStore::with_key("quill-test-token");
        store.remove();
        assert!(!store.is_authenticated());

        store.save("abc123");
        assert_eq!(store.token().as_deref(), Some("abc123"));

        store.remove();
        assert_eq!(store.load(), None);
    }

    #[wasm_bindgen_test]
    fn test_value_is_stored_raw() {
        let store = LocalTokenStore::with_key("quill-test-raw");
        store.save("abc123");

        let raw = get_local_storage()
            .and_then(|storage| storage.get_item("quill-test-raw").ok().flatten());
        assert_eq!(raw.as_deref(), Some("abc123"));

        store.remove();
    }
}
