//! Session token storage

use std::sync::RwLock;

/// Durable storage for the session token.
///
/// Implementations are best effort: a failed write is logged and otherwise
/// ignored, the next request simply goes out unauthenticated.
pub trait TokenStore: Send + Sync {
    /// Raw stored value, if any
    fn load(&self) -> Option<String>;

    /// Persist a new token, replacing any previous one
    fn save(&self, token: &str);

    /// Forget the stored token
    fn remove(&self);

    /// The usable session token. An empty stored value counts as absent.
    fn token(&self) -> Option<String> {
        self.load().filter(|token| !token.is_empty())
    }

    /// Whether a usable token is stored
    fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }
}

/// In-process token store
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    token: RwLock<Option<String>>,
}

impl MemoryTokenStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store that already holds a token
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: RwLock::new(Some(token.into())),
        }
    }
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> Option<String> {
        match self.token.read() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    fn save(&self, token: &str) {
        match self.token.write() {
            Ok(mut guard) => *guard = Some(token.to_string()),
            Err(poisoned) => *poisoned.into_inner() = Some(token.to_string()),
        }
    }

    fn remove(&self) {
        match self.token.write() {
            Ok(mut guard) => *guard = None,
            Err(poisoned) => *poisoned.into_inner() = None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_round_trip() {
        let store = MemoryTokenStore::new();
        assert!(!store.is_authenticated());

        store.save("abc");
        assert_eq!(store.token().as_deref(), Some("abc"));

        store.remove();
        assert_eq!(store.load(), None);
    }

    #[test]
    fn test_empty_token_counts_as_absent() {
        let store = MemoryTokenStore::with_token("");
        assert_eq!(store.load().as_deref(), Some(""));
        assert_eq!(store.token(), None);
        assert!(!store.is_authenticated());
    }
}
