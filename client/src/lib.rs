//! # client
//!
//! Leptos + WASM frontend for the Game Night site and the Cameleon lobby.
//!
//! This crate contains the two pages (landing catalog and lobby flow), their
//! presentation components, static catalog data, and the browser adapters
//! (`localStorage`, `window.location`, clipboard) that plug into the `lobby`
//! crate's storage and location traits. Browser access is compiled only under
//! the `hydrate` feature; SSR and native test builds use inert fallbacks.

pub mod app;
pub mod components;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
