//! # client
//!
//! Leptos + WASM frontend for the Keystone admin dashboard.
//!
//! This crate contains the route table and navigation guard, the reactive
//! state stores (auth, notifications, loading, theme, site settings, user
//! directory), pages, components, and the browser-only helpers they rely on.
//! The host binary renders [`app::shell`] on the server; the browser calls
//! [`hydrate`] to take over.

pub mod app;
pub mod components;
pub mod pages;
pub mod routes;
pub mod state;
pub mod util;

/// WASM entry point: installs logging and hydrates the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    log::info!("hydrating keystone client");
    leptos::mount::hydrate_body(app::App);
}
