//! Device list and device detail pages.

#[cfg(test)]
#[path = "device_test.rs"]
mod device_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::components::nav_bar::NavBar;
use crate::components::tab_bar::TabBar;

/// Detail route for a device id, or `None` for a blank id or one that would
/// not survive as a single path segment.
pub(crate) fn device_detail_path(raw_id: &str) -> Option<String> {
    let id = raw_id.trim();
    if id.is_empty() || id.contains(['/', '?', '#']) {
        return None;
    }
    Some(format!("/device/{id}"))
}

#[component]
pub fn DevicePage() -> impl IntoView {
    let navigate = use_navigate();
    let device_id = RwSignal::new(String::new());

    let on_open = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if let Some(path) = device_detail_path(&device_id.get()) {
            navigate(&path, NavigateOptions::default());
        }
    };

    view! {
        <div class="page device-page">
            <NavBar title="Devices"/>
            <form class="device-open" on:submit=on_open>
                <input
                    class="device-open__input"
                    type="text"
                    placeholder="Device ID"
                    prop:value=move || device_id.get()
                    on:input=move |ev| device_id.set(event_target_value(&ev))
                />
                <button class="device-open__button" type="submit">
                    "Open"
                </button>
            </form>
            <TabBar/>
        </div>
    }
}

#[component]
pub fn DeviceDetailPage() -> impl IntoView {
    let params = use_params_map();
    let id = move || params.read().get("id").unwrap_or_default();

    view! {
        <div class="page device-detail-page">
            <NavBar title="Device" back="/device"/>
            <section class="cell-group">
                <div class="cell">
                    <span class="cell__label">"ID"</span>
                    <span class="cell__value">{id}</span>
                </div>
            </section>
        </div>
    }
}
