//! Top navigation bar with a page title and optional back link.

use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn NavBar(#[prop(into)] title: String, #[prop(optional, into)] back: Option<String>) -> impl IntoView {
    view! {
        <header class="nav-bar">
            {back.map(|href| view! { <A href=href attr:class="nav-bar__back">"‹ Back"</A> })}
            <h1 class="nav-bar__title">{title}</h1>
        </header>
    }
}
