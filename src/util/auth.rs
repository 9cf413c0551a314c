//! Router integration for the navigation guard.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every route change (and every login/logout) re-runs [`crate::guard`] against
//! the current location and replaces the history entry when it redirects.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::config::BasePath;
use crate::guard::{self, Resolution};
use crate::routes;
use crate::state::auth::{AuthState, SharedStore};
use crate::storage::TokenStore;

/// App-relative path the router should move to, or `None` to stay put.
///
/// `previous` is the pathname shown before this navigation, if any. Unknown
/// paths stay where they are so the router's fallback renders.
pub fn guard_redirect(
    pathname: &str,
    previous: Option<&str>,
    base: &BasePath,
    store: &dyn TokenStore,
) -> Option<String> {
    let path = routes::strip_base(pathname, base.as_str());
    let from = previous.and_then(|p| routes::match_path(routes::strip_base(p, base.as_str())));
    let resolution = guard::resolve_from(path, from.as_ref(), store);
    if matches!(resolution, Resolution::NotFound { .. }) {
        return None;
    }
    let current = routes::match_path(path).map(|m| m.path);
    (current.as_deref() != Some(resolution.path())).then(|| resolution.path().to_owned())
}

/// Whether the page at `pathname` may be drawn.
pub fn guard_allows(pathname: &str, base: &BasePath, store: &dyn TokenStore) -> bool {
    guard_redirect(pathname, None, base, store).is_none()
}

/// Redirect whenever the current location fails the guard, including after
/// login or logout changes the auth signal.
pub fn install_navigation_guard<F>(auth: RwSignal<AuthState>, store: SharedStore, base: BasePath, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    let location = use_location();
    Effect::new(move |previous: Option<String>| {
        let pathname = location.pathname.get();
        auth.track();
        if let Some(target) = guard_redirect(&pathname, previous.as_deref(), &base, store.as_ref()) {
            navigate(&target, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
        pathname
    });
}

/// Installs the guard; must be rendered inside `<Router>`.
#[component]
pub fn NavigationGuard() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let store = expect_context::<SharedStore>();
    let base = expect_context::<BasePath>();
    install_navigation_guard(auth, store, base, use_navigate());
}

/// Draws `children` only when the guard lets the current location through,
/// so a protected page never renders before the redirect.
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let store = expect_context::<SharedStore>();
    let base = expect_context::<BasePath>();
    let location = use_location();

    let allowed = move || {
        auth.track();
        guard_allows(&location.pathname.get(), &base, store.as_ref())
    };

    view! { <Show when=allowed>{children()}</Show> }
}
