//! # signin-ui
//!
//! Leptos + WASM frontend for the sign-in shell.
//!
//! This crate contains the route table, the root `App` with its router, the
//! sign-in page, its form state, and the submission sink the form forwards
//! to. The `ssr` feature is enabled by the host server; the `hydrate` feature
//! builds the browser bundle.

pub mod app;
pub mod pages;
pub mod routes;
pub mod state;
pub mod util;

pub use app::App;

/// Hydration entry point for the WASM bundle.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(App);
}
