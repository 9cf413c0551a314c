//! Key/value persistence for the credential token.
//!
//! SYSTEM CONTEXT
//! ==============
//! The navigation guard only needs to know whether a token exists. Storage is
//! injected through [`TokenStore`] so guard logic runs against [`MemoryStore`]
//! in tests and against `window.localStorage` in the browser.
//!
//! TRADE-OFFS
//! ==========
//! [`LocalStorage`] is browser-only behavior; without the `csr` feature it
//! reads as empty and writes are no-ops so non-browser builds stay usable.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::collections::HashMap;
use std::sync::Mutex;

/// Fixed `localStorage` key holding the credential token.
pub const AUTH_TOKEN_KEY: &str = "authToken";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum StorageError {
    #[error("browser storage is unavailable")]
    Unavailable,
    #[error("failed to write storage key {key}: {message}")]
    Write { key: String, message: String },
}

/// Get/set/remove by key. Implementations must be shareable through Leptos
/// context, hence `Send + Sync`.
pub trait TokenStore: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// In-memory store used by tests and non-browser builds.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with a single entry.
    pub fn with_entry(key: &str, value: &str) -> Self {
        let store = Self::new();
        store.lock().insert(key.to_owned(), value.to_owned());
        store
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<String, String>> {
        // A poisoned map is still a valid map.
        self.entries.lock().unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

impl TokenStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.lock().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.lock().insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.lock().remove(key);
        Ok(())
    }
}

/// Browser `window.localStorage` backend.
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalStorage;

#[cfg(feature = "csr")]
fn browser_storage() -> Result<web_sys::Storage, StorageError> {
    web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .ok_or(StorageError::Unavailable)
}

impl TokenStore for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        #[cfg(feature = "csr")]
        {
            browser_storage().ok()?.get_item(key).ok().flatten()
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
            None
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        #[cfg(feature = "csr")]
        {
            browser_storage()?.set_item(key, value).map_err(|e| StorageError::Write {
                key: key.to_owned(),
                message: format!("{e:?}"),
            })
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (key, value);
            Ok(())
        }
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        #[cfg(feature = "csr")]
        {
            browser_storage()?.remove_item(key).map_err(|e| StorageError::Write {
                key: key.to_owned(),
                message: format!("{e:?}"),
            })
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
            Ok(())
        }
    }
}

/// Read the credential token. Empty strings are treated as absent.
pub fn load_token(store: &dyn TokenStore) -> Option<String> {
    store.get(AUTH_TOKEN_KEY).filter(|token| !token.is_empty())
}

pub fn save_token(store: &dyn TokenStore, token: &str) -> Result<(), StorageError> {
    store.set(AUTH_TOKEN_KEY, token)
}

pub fn clear_token(store: &dyn TokenStore) -> Result<(), StorageError> {
    store.remove(AUTH_TOKEN_KEY)
}
