//! Session token storage shared by the REST client and the route guard.
//!
//! SYSTEM CONTEXT
//! ==============
//! The bearer token is the only durable client state. `Session` is handed to
//! `ApiClient` and `NavigationGuard` at construction so each reads the same
//! storage without ambient lookups; tests build as many isolated sessions as
//! they need.
//!
//! DESIGN
//! ======
//! Storage is a small get/set/clear capability over one key. Reads always go
//! to the backing store, so a `login`/`logout` is visible to every holder of
//! the session immediately.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::sync::{Arc, PoisonError, RwLock};

/// Well-known storage key holding the bearer token.
pub const TOKEN_STORAGE_KEY: &str = "token";

/// Key-value capability for a single persisted token.
pub trait TokenStorage: Send + Sync {
    /// Current token, or `None` when logged out.
    fn get(&self) -> Option<String>;
    fn set(&self, token: &str);
    fn clear(&self);
}

/// Process-local token storage. Used natively and in tests.
#[derive(Debug, Default)]
pub struct MemoryTokenStorage {
    token: RwLock<Option<String>>,
}

impl MemoryTokenStorage {
    #[must_use]
    pub fn with_token(token: impl Into<String>) -> Self {
        Self { token: RwLock::new(Some(token.into())) }
    }
}

impl TokenStorage for MemoryTokenStorage {
    fn get(&self) -> Option<String> {
        self.token
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn set(&self, token: &str) {
        *self.token.write().unwrap_or_else(PoisonError::into_inner) = Some(token.to_owned());
    }

    fn clear(&self) {
        *self.token.write().unwrap_or_else(PoisonError::into_inner) = None;
    }
}

/// Browser `localStorage` token storage.
///
/// The storage handle is looked up on every call; nothing is cached here.
#[cfg(feature = "csr")]
#[derive(Clone, Debug)]
pub struct LocalTokenStorage {
    key: String,
}

#[cfg(feature = "csr")]
impl LocalTokenStorage {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    fn storage() -> Option<web_sys::Storage> {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten());
        if storage.is_none() {
            leptos::logging::warn!("localStorage unavailable; session treated as logged out");
        }
        storage
    }
}

#[cfg(feature = "csr")]
impl TokenStorage for LocalTokenStorage {
    fn get(&self) -> Option<String> {
        storage_outcome("read", Self::storage()?.get_item(&self.key)).flatten()
    }

    fn set(&self, token: &str) {
        if let Some(storage) = Self::storage() {
            storage_outcome("persist", storage.set_item(&self.key, token));
        }
    }

    fn clear(&self) {
        if let Some(storage) = Self::storage() {
            storage_outcome("clear", storage.remove_item(&self.key));
        }
    }
}

/// Log a failed storage call and treat it as absent.
#[cfg_attr(not(feature = "csr"), allow(dead_code))]
fn storage_outcome<T, E: std::fmt::Debug>(action: &str, result: Result<T, E>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(e) => {
            leptos::logging::warn!("failed to {action} session token: {e:?}");
            None
        }
    }
}

/// Cloneable handle to the current session's token storage.
#[derive(Clone)]
pub struct Session {
    storage: Arc<dyn TokenStorage>,
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("authenticated", &self.is_authenticated())
            .finish()
    }
}

impl Session {
    pub fn new(storage: Arc<dyn TokenStorage>) -> Self {
        Self { storage }
    }

    /// A logged-out session backed by process memory.
    #[must_use]
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryTokenStorage::default()))
    }

    /// Session storage for the current build target: `localStorage` in the
    /// browser, process memory elsewhere.
    #[must_use]
    pub fn for_target(key: &str) -> Self {
        #[cfg(feature = "csr")]
        {
            Self::new(Arc::new(LocalTokenStorage::new(key)))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
            Self::in_memory()
        }
    }

    /// Current bearer token. Empty stored values count as absent.
    #[must_use]
    pub fn token(&self) -> Option<String> {
        self.storage.get().filter(|token| !token.is_empty())
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }

    /// Store a freshly issued token.
    pub fn login(&self, token: &str) {
        self.storage.set(token);
    }

    /// Drop the stored token.
    pub fn logout(&self) {
        self.storage.clear();
    }
}
