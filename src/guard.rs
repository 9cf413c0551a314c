//! Authentication navigation guard.
//!
//! SYSTEM CONTEXT
//! ==============
//! Evaluated before every navigation. The decision depends only on the target
//! route's `requires_auth` flag and whether a non-empty token is stored; it is
//! stateless and re-evaluated from scratch each time.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use crate::routes::{self, LOGIN_PATH, ROUTES, RouteEntry, RouteMatch, RouteTarget, ViewId};
use crate::storage::{self, TokenStore};

/// Upper bound on redirect hops while resolving one navigation.
const MAX_REDIRECTS: usize = 8;

/// Guard outcome for a single navigation attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Navigation {
    Proceed,
    RedirectTo(&'static str),
}

pub fn is_authenticated(store: &dyn TokenStore) -> bool {
    storage::load_token(store).is_some()
}

/// Decide whether the navigation `from -> to` may proceed.
pub fn before_each(to: &RouteMatch, from: Option<&RouteMatch>, store: &dyn TokenStore) -> Navigation {
    if to.requires_auth() && !is_authenticated(store) {
        log::debug!(
            "guard: redirecting {} ({}) -> {LOGIN_PATH} (from {})",
            to.path,
            to.entry.name().unwrap_or("-"),
            from.map_or("<initial>", |m| m.path.as_str())
        );
        return Navigation::RedirectTo(LOGIN_PATH);
    }
    Navigation::Proceed
}

/// Final outcome of resolving a path through the table and the guard.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Resolution {
    Render { path: String, view: ViewId, params: Vec<(&'static str, String)> },
    NotFound { path: String },
}

impl Resolution {
    pub fn path(&self) -> &str {
        match self {
            Self::Render { path, .. } | Self::NotFound { path } => path,
        }
    }
}

/// Resolve `path` the way the router does: follow redirect records, run the
/// guard, follow guard redirects, and report the view that ends up rendered.
pub fn resolve(path: &str, store: &dyn TokenStore) -> Resolution {
    resolve_from(path, None, store)
}

/// Like [`resolve`], with the currently displayed route passed to the guard.
pub fn resolve_from(path: &str, from: Option<&RouteMatch>, store: &dyn TokenStore) -> Resolution {
    resolve_in(ROUTES, path, from, store)
}

/// Resolve against an explicit route table.
pub fn resolve_in(
    table: &'static [RouteEntry],
    path: &str,
    from: Option<&RouteMatch>,
    store: &dyn TokenStore,
) -> Resolution {
    let mut current = path.to_owned();
    for _ in 0..MAX_REDIRECTS {
        let Some(target) = routes::match_in(table, &current) else {
            return Resolution::NotFound { path: current };
        };
        let view = match target.entry.target {
            RouteTarget::Redirect(to) => {
                current = to.to_owned();
                continue;
            }
            RouteTarget::View(view) => view,
        };
        match before_each(&target, from, store) {
            Navigation::RedirectTo(to) if to != target.path => current = to.to_owned(),
            _ => return Resolution::Render { path: target.path, view, params: target.params },
        }
    }
    log::warn!("guard: redirect limit reached resolving {path}");
    Resolution::NotFound { path: current }
}
