use super::*;
use crate::routes::{ROUTES, match_path};
use crate::storage::{AUTH_TOKEN_KEY, MemoryStore};

fn with_token(token: &str) -> MemoryStore {
    MemoryStore::with_entry(AUTH_TOKEN_KEY, token)
}

/// Concrete sample path for a route pattern.
fn sample_path(pattern: &str) -> String {
    pattern.replace(":id", "42")
}

// =============================================================
// before_each
// =============================================================

#[test]
fn protected_routes_redirect_without_token() {
    let store = MemoryStore::new();
    for entry in ROUTES.iter().filter(|r| r.requires_auth) {
        let target = match_path(&sample_path(entry.path)).unwrap();
        assert_eq!(before_each(&target, None, &store), Navigation::RedirectTo("/login"), "{}", entry.path);
    }
}

#[test]
fn protected_routes_proceed_with_token() {
    let store = with_token("anything");
    for entry in ROUTES.iter().filter(|r| r.requires_auth) {
        let target = match_path(&sample_path(entry.path)).unwrap();
        assert_eq!(before_each(&target, None, &store), Navigation::Proceed, "{}", entry.path);
    }
}

#[test]
fn login_always_proceeds() {
    let target = match_path("/login").unwrap();
    assert_eq!(before_each(&target, None, &MemoryStore::new()), Navigation::Proceed);
    assert_eq!(before_each(&target, None, &with_token("abc123")), Navigation::Proceed);
}

#[test]
fn empty_token_is_unauthenticated() {
    let store = with_token("");
    assert!(!is_authenticated(&store));
    let target = match_path("/device").unwrap();
    assert_eq!(before_each(&target, None, &store), Navigation::RedirectTo(LOGIN_PATH));
}

#[test]
fn source_route_does_not_affect_decision() {
    let from = match_path("/profile").unwrap();
    let to = match_path("/contacts").unwrap();
    assert_eq!(before_each(&to, Some(&from), &MemoryStore::new()), Navigation::RedirectTo(LOGIN_PATH));
    assert_eq!(before_each(&to, Some(&from), &with_token("t")), Navigation::Proceed);
}

#[test]
fn guard_does_not_mutate_storage() {
    let store = with_token("abc123");
    let target = match_path("/profile").unwrap();
    let _ = before_each(&target, None, &store);
    assert_eq!(store.get(AUTH_TOKEN_KEY).as_deref(), Some("abc123"));
}

// =============================================================
// resolve
// =============================================================

#[test]
fn root_redirects_to_login_regardless_of_auth() {
    for store in [MemoryStore::new(), with_token("abc123")] {
        let res = resolve("/", &store);
        assert_eq!(res.path(), "/login");
        assert!(matches!(res, Resolution::Render { view: ViewId::Login, .. }));
    }
}

#[test]
fn contacts_without_token_resolves_to_login() {
    let res = resolve("/contacts", &MemoryStore::new());
    assert_eq!(res, Resolution::Render { path: "/login".to_owned(), view: ViewId::Login, params: vec![] });
}

#[test]
fn profile_with_token_proceeds() {
    let res = resolve("/profile", &with_token("abc123"));
    assert_eq!(res, Resolution::Render { path: "/profile".to_owned(), view: ViewId::Profile, params: vec![] });
}

#[test]
fn device_detail_with_token_keeps_id() {
    let res = resolve("/device/123", &with_token("abc123"));
    assert_eq!(
        res,
        Resolution::Render {
            path: "/device/123".to_owned(),
            view: ViewId::DeviceDetail,
            params: vec![("id", "123".to_owned())],
        }
    );
}

#[test]
fn unknown_path_is_not_found() {
    let res = resolve("/nowhere", &with_token("abc123"));
    assert_eq!(res, Resolution::NotFound { path: "/nowhere".to_owned() });
}

#[test]
fn every_protected_route_resolves_to_itself_with_token() {
    let store = with_token("abc123");
    for entry in ROUTES.iter().filter(|r| r.requires_auth) {
        let path = sample_path(entry.path);
        assert_eq!(resolve(&path, &store).path(), path);
    }
}

#[test]
fn resolve_from_previous_route_matches_initial_resolution() {
    let from = match_path("/device/7").unwrap();
    let store = MemoryStore::new();
    assert_eq!(resolve_from("/contacts", Some(&from), &store), resolve("/contacts", &store));
    assert_eq!(resolve_from("/contacts", Some(&from), &with_token("t")).path(), "/contacts");
}

#[test]
fn redirect_cycle_gives_up_as_not_found() {
    static CYCLE: &[RouteEntry] = &[
        RouteEntry { path: "/a", target: RouteTarget::Redirect("/b"), requires_auth: false },
        RouteEntry { path: "/b", target: RouteTarget::Redirect("/a"), requires_auth: false },
    ];
    let res = resolve_in(CYCLE, "/a", None, &MemoryStore::new());
    assert!(matches!(res, Resolution::NotFound { .. }));
}
