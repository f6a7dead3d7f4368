//! # chat-client
//!
//! Leptos + WASM client core for the chat application: session token
//! storage, the authenticated REST client for self-hosted servers, the
//! reactive server store, and the session-based navigation guard.
//!
//! Builds natively for tests and tooling; enable `csr` for the browser.

#[cfg(all(target_arch = "wasm32", not(feature = "csr")))]
compile_error!("wasm32 builds need the `csr` feature for their HTTP transport and storage");

pub mod app;
pub mod config;
pub mod net;
pub mod routes;
pub mod state;
pub mod util;

/// Browser entry point: installs panic/log hooks and mounts the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Debug).is_err() {
        leptos::logging::warn!("console logger already initialized");
    }
    leptos::mount::mount_to_body(app::App);
}
