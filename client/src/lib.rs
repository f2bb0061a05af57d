//! # client
//!
//! Leptos frontend for the crowdfunding application. Renders the campaign
//! list, campaign detail pages, and the dashboard, and submits transactions
//! through the server's wallet-bridge endpoints.
//!
//! This crate contains pages, components, application state, and the HTTP
//! API layer. Contract reads resolve through a shared keyed query cache so
//! identical concurrent reads collapse into one request.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered page.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
