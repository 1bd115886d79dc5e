//! # pixelwalls-client
//!
//! Leptos + WASM frontend for the PixelWalls login / sign-up screen.
//!
//! This crate contains the auth form state machine, its components, the
//! routed pages, and the `AuthService` collaborator interface with its HTTP
//! implementation. The server crate renders it with the `ssr` feature; the
//! browser bundle is built with `hydrate`.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: installs the panic hook and console logger, then
/// hydrates the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
