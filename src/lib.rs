//! # timos-web
//!
//! Leptos + WASM frontend for the Timos sign-up flow.
//!
//! This crate contains the sign-up page, its presentational components, the
//! transient form state with its validation schema, and the HTTP client for
//! the account-creation endpoint. The auth collaborator is passed into the
//! page explicitly so the form can run against any `AuthService`.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install the panic hook and console logger, then
/// hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    // Already initialised on hot reload.
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
