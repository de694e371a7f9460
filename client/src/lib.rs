//! # client
//!
//! Leptos + WASM frontend for the Document Enquiry System.
//!
//! This crate contains the route-level pages (home, auth, selection, upload,
//! query), their view-local state, the `gloo-net` HTTP adapter implementing
//! [`enquiry_core::Backend`], and the `localStorage` session store. Request
//! orchestration, validation and error classification live in
//! `enquiry-core` and are shared with the CLI.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
