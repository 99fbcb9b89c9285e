//! # client
//!
//! Leptos + WASM frontend for the Frayze growth simulator.
//!
//! This crate contains the page, its components, the reactive session state,
//! and the small browser helpers (summary requests, file download). All
//! arithmetic and templating lives in the `growth` crate so the page, the
//! server, and the CLI agree on every figure.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
