//! # capability-board
//!
//! Leptos + WASM view of the consulting capabilities catalogue. Lists every
//! capability from the backend, lets a consultant register or unregister an
//! email against one, and re-renders from a fresh fetch after each change.
//!
//! The pure parts (wire types, state, rendering, the action cycle) build and
//! test natively; the browser pieces sit behind the `csr` feature.

pub mod actions;
pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod mount;
pub mod net;
pub mod state;
pub mod view;

/// WASM entry point: mount the board into the host page's container.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(e) = mount::start_from_document() {
        mount::init_logging(config::LogLevel::default());
        log::error!("capability board not mounted: {e}");
    }
}
