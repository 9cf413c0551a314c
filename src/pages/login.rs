//! Login page that stores an access token.
//!
//! The token is opaque: any non-empty value signs the user in. Nothing is sent
//! to a server.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::auth::{AuthState, SharedStore};

/// Where a successful login lands.
pub const AFTER_LOGIN_PATH: &str = "/device";

pub(crate) fn validate_token_input(raw: &str) -> Result<String, &'static str> {
    let token = raw.trim();
    if token.is_empty() {
        return Err("Enter an access token.");
    }
    Ok(token.to_owned())
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let store = expect_context::<SharedStore>();
    let navigate = use_navigate();

    let token_input = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let token = match validate_token_input(&token_input.get()) {
            Ok(token) => token,
            Err(msg) => {
                info.set(msg.to_owned());
                return;
            }
        };

        let mut result = Ok(());
        auth.update(|state| result = state.sign_in(store.as_ref(), &token));
        match result {
            Ok(()) => {
                log::info!("signed in");
                navigate(AFTER_LOGIN_PATH, NavigateOptions::default());
            }
            Err(e) => {
                log::error!("sign-in failed: {e}");
                info.set(format!("Sign-in failed: {e}"));
            }
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Stickman"</h1>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Access token"
                        prop:value=move || token_input.get()
                        on:input=move |ev| token_input.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit">
                        "Sign In"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
            </div>
        </div>
    }
}
