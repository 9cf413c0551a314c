//! Bottom tab bar linking the authenticated sections.

use leptos::prelude::*;
use leptos_router::components::A;

/// Tabs shown on every signed-in page: `(href, label)`.
pub const TABS: [(&str, &str); 3] = [("/device", "Devices"), ("/contacts", "Contacts"), ("/profile", "Profile")];

#[component]
pub fn TabBar() -> impl IntoView {
    view! {
        <nav class="tab-bar">
            {TABS
                .iter()
                .map(|(href, label)| {
                    view! {
                        <A href=*href attr:class="tab-bar__item">
                            {*label}
                        </A>
                    }
                })
                .collect_view()}
        </nav>
    }
}
