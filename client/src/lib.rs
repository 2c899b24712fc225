//! # client
//!
//! Leptos frontend for devlinks, rendered on the server and hydrated in the
//! browser. Pages and components live here; the profile model, codecs and
//! validation rules come from the shared `profile` crate so the browser and
//! the server agree on every rule.
//!
//! Browser-only glue (local storage, clipboard, file reading, HTTP) sits
//! behind the `hydrate` feature with no-op SSR fallbacks.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
