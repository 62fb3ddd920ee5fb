//! # client
//!
//! Leptos + WASM frontend for the collaborative room application: a shared
//! drawing canvas and a room chat panel, both synchronized across clients
//! over a realtime WebSocket carrying the `events` wire protocol.
//!
//! Browser-only code (WebSocket, canvas 2D, storage) is gated behind the
//! `hydrate` feature; state and parsing logic compiles natively so tests run
//! without a browser.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered document.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
