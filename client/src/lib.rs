//! # yoga-client
//!
//! Leptos + WASM front-end for the Yoga studio booking system.
//!
//! Pages bind the `yoga` view controllers to the DOM; every request goes
//! through the shared [`yoga::ApiClient`] over a `gloo-net` transport.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: logging, panic hook, then mount.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::mount_to_body(app::App);
}
