//! Bearer-token storage
//!
//! Holds the token returned by login for the lifetime of the client.
//! Durable storage across app restarts is the host application's concern.

use std::sync::{Arc, PoisonError, RwLock};

/// Shared in-memory token slot. Clones share the same underlying storage,
/// so every API client built from the same store sees the same token.
#[derive(Debug, Clone, Default)]
pub struct TokenStore {
    token: Arc<RwLock<Option<String>>>,
}

impl TokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn save(&self, token: &str) {
        tracing::debug!("storing auth token");
        *self.token.write().unwrap_or_else(PoisonError::into_inner) = Some(token.to_string());
    }

    pub fn get(&self) -> Option<String> {
        self.token
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn clear(&self) {
        tracing::debug!("clearing auth token");
        *self.token.write().unwrap_or_else(PoisonError::into_inner) = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_a_token() {
        let store = TokenStore::new();
        assert_eq!(store.get(), None);

        store.save("abc123");
        assert_eq!(store.get().as_deref(), Some("abc123"));

        store.clear();
        assert_eq!(store.get(), None);
    }

    #[test]
    fn clones_share_the_same_slot() {
        let store = TokenStore::new();
        let clone = store.clone();

        store.save("shared-token");
        assert_eq!(clone.get().as_deref(), Some("shared-token"));
    }
}
