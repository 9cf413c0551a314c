//! Static route table and path matching.
//!
//! DESIGN
//! ======
//! Entries are declared once in [`ROUTES`] and never change at runtime. The
//! `requires_auth` flag on each entry is the only input the navigation guard
//! takes from the table.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

/// Path every guard redirect lands on.
pub const LOGIN_PATH: &str = "/login";

/// View rendered for a matched route.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ViewId {
    Login,
    Device,
    DeviceDetail,
    Profile,
    Contacts,
}

impl ViewId {
    /// Stable route name, used for lookups and logging.
    pub fn route_name(self) -> &'static str {
        match self {
            Self::Login => "login",
            Self::Device => "device",
            Self::DeviceDetail => "deviceDetail",
            Self::Profile => "profile",
            Self::Contacts => "contacts",
        }
    }
}

/// What a route entry resolves to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteTarget {
    View(ViewId),
    /// Unconditional redirect record.
    Redirect(&'static str),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RouteEntry {
    pub path: &'static str,
    pub target: RouteTarget,
    pub requires_auth: bool,
}

pub static ROUTES: &[RouteEntry] = &[
    RouteEntry { path: "/", target: RouteTarget::Redirect(LOGIN_PATH), requires_auth: false },
    RouteEntry { path: "/login", target: RouteTarget::View(ViewId::Login), requires_auth: false },
    RouteEntry { path: "/device", target: RouteTarget::View(ViewId::Device), requires_auth: true },
    RouteEntry { path: "/device/:id", target: RouteTarget::View(ViewId::DeviceDetail), requires_auth: true },
    RouteEntry { path: "/profile", target: RouteTarget::View(ViewId::Profile), requires_auth: true },
    RouteEntry { path: "/contacts", target: RouteTarget::View(ViewId::Contacts), requires_auth: true },
];

/// A concrete path matched against a route entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RouteMatch {
    pub entry: &'static RouteEntry,
    /// Normalized path (no query, fragment, or trailing slash).
    pub path: String,
    pub params: Vec<(&'static str, String)>,
}

impl RouteMatch {
    pub fn requires_auth(&self) -> bool {
        self.entry.requires_auth
    }

    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.iter().find(|(key, _)| *key == name).map(|(_, value)| value.as_str())
    }

    pub fn view(&self) -> Option<ViewId> {
        match self.entry.target {
            RouteTarget::View(view) => Some(view),
            RouteTarget::Redirect(_) => None,
        }
    }
}

impl RouteEntry {
    /// Route name for view entries; redirect records are unnamed.
    pub fn name(&self) -> Option<&'static str> {
        match self.target {
            RouteTarget::View(view) => Some(view.route_name()),
            RouteTarget::Redirect(_) => None,
        }
    }

    /// Match `path` against this entry's pattern, capturing `:param` segments.
    pub fn matches(&'static self, path: &str) -> Option<RouteMatch> {
        let actual = segments(path);
        let pattern = segments(self.path);
        if actual.len() != pattern.len() {
            return None;
        }

        let mut params = Vec::new();
        for (want, got) in pattern.iter().zip(&actual) {
            if let Some(name) = want.strip_prefix(':') {
                params.push((name, (*got).to_owned()));
            } else if want != got {
                return None;
            }
        }

        Some(RouteMatch { entry: self, path: normalize(path), params })
    }
}

/// First entry in [`ROUTES`] whose pattern matches `path`.
pub fn match_path(path: &str) -> Option<RouteMatch> {
    match_in(ROUTES, path)
}

/// First entry in `table` whose pattern matches `path`.
pub fn match_in(table: &'static [RouteEntry], path: &str) -> Option<RouteMatch> {
    table.iter().find_map(|entry| entry.matches(path))
}

/// Remove a deployment base prefix (`/app`) from a browser pathname.
/// Paths outside the base are returned unchanged.
pub fn strip_base<'a>(pathname: &'a str, base: &str) -> &'a str {
    let base = base.trim_end_matches('/');
    if base.is_empty() {
        return pathname;
    }
    match pathname.strip_prefix(base) {
        Some("") => "/",
        Some(rest) if rest.starts_with('/') => rest,
        _ => pathname,
    }
}

fn without_query(path: &str) -> &str {
    path.split(['?', '#']).next().unwrap_or_default()
}

fn segments(path: &str) -> Vec<&str> {
    without_query(path).split('/').filter(|s| !s.is_empty()).collect()
}

fn normalize(path: &str) -> String {
    let joined = segments(path).join("/");
    format!("/{joined}")
}
