use super::*;
use crate::storage::{AUTH_TOKEN_KEY, MemoryStore};

// =============================================================
// AuthState defaults
// =============================================================

#[test]
fn auth_state_default_no_token() {
    let state = AuthState::default();
    assert!(state.token.is_none());
    assert!(!state.is_authenticated());
}

#[test]
fn from_store_reads_token() {
    let store = MemoryStore::with_entry(AUTH_TOKEN_KEY, "abc123");
    let state = AuthState::from_store(&store);
    assert_eq!(state.token.as_deref(), Some("abc123"));
    assert!(state.is_authenticated());
}

#[test]
fn from_store_treats_empty_token_as_missing() {
    let store = MemoryStore::with_entry(AUTH_TOKEN_KEY, "");
    assert!(!AuthState::from_store(&store).is_authenticated());
}

// =============================================================
// Sign in / out
// =============================================================

#[test]
fn sign_in_persists_token() {
    let store = MemoryStore::new();
    let mut state = AuthState::default();
    state.sign_in(&store, "abc123").unwrap();
    assert!(state.is_authenticated());
    assert_eq!(store.get(AUTH_TOKEN_KEY).as_deref(), Some("abc123"));
}

#[test]
fn sign_out_clears_state_and_storage() {
    let store = MemoryStore::with_entry(AUTH_TOKEN_KEY, "abc123");
    let mut state = AuthState::from_store(&store);
    state.sign_out(&store).unwrap();
    assert!(!state.is_authenticated());
    assert_eq!(store.get(AUTH_TOKEN_KEY), None);
}

#[test]
fn shared_store_is_usable_through_arc() {
    let store: SharedStore = Arc::new(MemoryStore::with_entry(AUTH_TOKEN_KEY, "t"));
    assert!(AuthState::from_store(store.as_ref()).is_authenticated());
}
