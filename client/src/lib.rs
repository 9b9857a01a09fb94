//! # client
//!
//! Leptos + WASM chat widget for the prompt agent server.
//!
//! This crate contains the widget component, its framework-independent
//! state, the HTTP transport for `GET /prompt/{prompt}`, and the in-flight
//! request registry used to cancel outstanding requests on teardown.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod state;
pub mod util;

/// Browser entry point: install logging and mount [`app::App`] on `<body>`.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    // Fails only when a logger is already installed; keep that one.
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(app::App);
}
