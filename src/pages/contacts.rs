//! Contacts page.

use leptos::prelude::*;

use crate::components::nav_bar::NavBar;
use crate::components::tab_bar::TabBar;

#[component]
pub fn ContactsPage() -> impl IntoView {
    view! {
        <div class="page contacts-page">
            <NavBar title="Contacts"/>
            <p class="empty-state">"No contacts yet."</p>
            <TabBar/>
        </div>
    }
}
