//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mirrors the stored credential token into a reactive signal so pages can
//! react to login/logout. The navigation guard still reads storage directly;
//! this state only drives re-evaluation and rendering.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use std::sync::Arc;

use crate::storage::{self, StorageError, TokenStore};

/// Token storage shared through Leptos context.
pub type SharedStore = Arc<dyn TokenStore>;

/// Authentication state derived from the stored token.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub token: Option<String>,
}

impl AuthState {
    pub fn from_store(store: &dyn TokenStore) -> Self {
        Self { token: storage::load_token(store) }
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// Persist `token` and mirror it into this state.
    pub fn sign_in(&mut self, store: &dyn TokenStore, token: &str) -> Result<(), StorageError> {
        storage::save_token(store, token)?;
        self.token = storage::load_token(store);
        Ok(())
    }

    /// Remove the stored token. State is cleared even if storage fails.
    pub fn sign_out(&mut self, store: &dyn TokenStore) -> Result<(), StorageError> {
        self.token = None;
        storage::clear_token(store)
    }
}
