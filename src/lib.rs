//! # authform
//!
//! Leptos + WASM login/signup page for a remote authentication API.
//!
//! This crate contains the page, its components, transient form/auth state,
//! the notification stack, and the HTTP transport seam. The submit flow in
//! `util::auth_flow` is shared with the `cli` package, which drives it over
//! `reqwest` instead of `gloo-net`.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered page.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    // Fails only if a logger is already installed, which leaves logging working.
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
