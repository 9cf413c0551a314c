//! # stickman-web
//!
//! Leptos + WASM single-page front-end. The interesting logic is small: a
//! static route table (`routes`) and an authentication guard (`guard`) that
//! sends visitors without a stored token to `/login`. Storage is injected via
//! `storage::TokenStore` so both run natively under `cargo test`.
//!
//! Build for the browser with the `csr` feature (e.g. `trunk serve --features csr`).

pub mod app;
pub mod components;
pub mod config;
pub mod guard;
pub mod pages;
pub mod routes;
pub mod state;
pub mod storage;
pub mod util;


/// Console verbosity: guard decisions are traced in debug builds only.
#[cfg(any(test, feature = "csr"))]
fn console_log_level() -> log::Level {
    if cfg!(debug_assertions) { log::Level::Debug } else { log::Level::Info }
}

/// Browser entry point: panic hook, console logging, mount.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(console_log_level());
    leptos::mount::mount_to_body(app::App);
}
