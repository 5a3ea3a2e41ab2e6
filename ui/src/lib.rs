//! # ui
//!
//! Leptos + WASM presentation components for the vehicle-inspection front-end.
//!
//! The crate ships three leaf components (`LoadingIndicator`, `StatCard`,
//! `FormShell`) that render purely from props and report user gestures back
//! through optional callbacks. Parents own all backing state; the components
//! only observe it. A small preview page and the SSR shell live alongside so
//! the kit can be served and hydrated on its own.

pub mod app;
pub mod components;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrates the server-rendered preview page.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    log::info!("hydrating inspection ui");
    leptos::mount::hydrate_body(app::App);
}
