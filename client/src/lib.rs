//! # portfolio
//!
//! Leptos + WASM frontend for a single-page animated portfolio.
//!
//! The crate holds the page sections, the small state machines that drive
//! their animations (typewriter, loader, carousel, code playback, contact
//! form), and the pure geometry and timing helpers those machines use. The
//! `ssr` feature lets `portfolio-server` render it; `hydrate` builds the
//! browser bundle.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: attach to the server-rendered markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        web_sys::console::warn_1(&format!("console_log init failed: {e}").into());
    }
    leptos::mount::hydrate_body(app::App);
}
