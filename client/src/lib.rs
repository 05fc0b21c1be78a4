//! # client
//!
//! Leptos + WASM frontend for the portfolio site: project cards, the
//! light/dark theme switch, and the contact form.
//!
//! Built with `ssr` for server rendering and with `hydrate` for the browser
//! bundle. Browser-only glue is gated on `hydrate`; everything else compiles
//! and tests natively.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: installs console logging and hydrates the page.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
