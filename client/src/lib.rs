//! # client
//!
//! Leptos + WASM frontend for WebBuilder.
//!
//! Renders the prompt form, the live preview and code panes, the full-screen
//! preview modal, and the toast stack. All document and generation state
//! lives in a `sitegen::Workbench` provided through context; this crate only
//! wires it to the DOM and to `POST /api/generate`.

pub mod app;
pub mod components;
pub mod net;
pub mod state;
pub mod util;

/// WASM entry point: install browser logging and hydrate the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
