//! # client
//!
//! Leptos + WASM single-page front end for the scaffold API server.
//!
//! This crate contains the root app with routing, the session context, the
//! pages, and the REST helpers. Build with the `csr` feature for the browser;
//! without it the crate compiles natively so state and helpers can be tested.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;

/// WASM entry point: install panic/log hooks and mount the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(app::App);
}
