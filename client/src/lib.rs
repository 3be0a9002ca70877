//! # client
//!
//! Leptos + WASM front-end for the school administration backend.
//!
//! Pages fetch JSON from the REST API, shape it with the pure logic in the
//! `records` crate, and render it through the shared `DataTable` and form
//! components. Browser-only code sits behind the `hydrate` feature; the `ssr`
//! feature lets the `server` crate render the same routes.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: installs logging and hydrates the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    log::info!("hydrating school admin client");
    leptos::mount::hydrate_body(app::App);
}
