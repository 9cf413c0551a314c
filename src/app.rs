//! Root application component with routing and context providers.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Redirect, Route, Router, Routes},
};

use crate::config::BasePath;
use crate::pages::{
    contacts::ContactsPage,
    device::{DeviceDetailPage, DevicePage},
    login::LoginPage,
    profile::ProfilePage,
};
use crate::routes::LOGIN_PATH;
use crate::state::auth::{AuthState, SharedStore};
use crate::storage::LocalStorage;
use crate::util::auth::{NavigationGuard, RequireAuth};

/// Root application component backed by browser `localStorage`.
#[component]
pub fn App() -> impl IntoView {
    let store: SharedStore = Arc::new(LocalStorage);
    view! { <AppWithStore store=store base=BasePath::from_build_env()/> }
}

/// Root component with an injected token store and base path.
///
/// Mirrors the route table in `routes::ROUTES`; the guard consults that table,
/// so a path added here without a table entry renders unguarded. Protected
/// views sit inside `RequireAuth` so they are not drawn before the redirect.
#[component]
pub fn AppWithStore(store: SharedStore, base: BasePath) -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::from_store(store.as_ref()));
    provide_context(auth);
    provide_context(store);
    provide_context(base.clone());

    let router_base = if base.is_root() { String::new() } else { base.as_str().to_owned() };
    log::debug!("router mounted at {}", base.as_str());

    view! {
        <Title text="Stickman"/>

        <Router base=router_base>
            <NavigationGuard/>
            <main>
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=|| view! { <Redirect path=LOGIN_PATH/> }/>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("device") view=|| view! { <RequireAuth><DevicePage/></RequireAuth> }/>
                    <Route
                        path=(StaticSegment("device"), ParamSegment("id"))
                        view=|| view! { <RequireAuth><DeviceDetailPage/></RequireAuth> }
                    />
                    <Route path=StaticSegment("profile") view=|| view! { <RequireAuth><ProfilePage/></RequireAuth> }/>
                    <Route path=StaticSegment("contacts") view=|| view! { <RequireAuth><ContactsPage/></RequireAuth> }/>
                </Routes>
            </main>
        </Router>
    }
}
