//! Profile page with sign-out.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::nav_bar::NavBar;
use crate::components::tab_bar::TabBar;
use crate::routes::LOGIN_PATH;
use crate::state::auth::{AuthState, SharedStore};

#[component]
pub fn ProfilePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let store = expect_context::<SharedStore>();
    let navigate = use_navigate();
    let confirm_open = RwSignal::new(false);

    let on_sign_out = move |_| {
        confirm_open.set(false);
        let mut result = Ok(());
        auth.update(|state| result = state.sign_out(store.as_ref()));
        if let Err(e) = result {
            log::warn!("failed to clear stored token: {e}");
        }
        navigate(LOGIN_PATH, NavigateOptions { replace: true, ..NavigateOptions::default() });
    };

    view! {
        <div class="page profile-page">
            <NavBar title="Profile"/>
            <section class="cell-group">
                <div class="cell">
                    <span class="cell__label">"Status"</span>
                    <span class="cell__value">
                        {move || if auth.get().is_authenticated() { "Signed in" } else { "Signed out" }}
                    </span>
                </div>
            </section>
            <button class="button button--danger" on:click=move |_| confirm_open.set(true)>
                "Sign Out"
            </button>
            <Show when=move || confirm_open.get()>
                <div class="dialog">
                    <p class="dialog__message">"Sign out of this device?"</p>
                    <div class="dialog__actions">
                        <button class="button" on:click=move |_| confirm_open.set(false)>
                            "Cancel"
                        </button>
                        <button class="button button--danger" on:click=on_sign_out.clone()>
                            "Sign Out"
                        </button>
                    </div>
                </div>
            </Show>
            <TabBar/>
        </div>
    }
}
