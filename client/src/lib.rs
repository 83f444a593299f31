//! # client
//!
//! Leptos + WASM single-page front end for SecretLab: a sign-in modal that
//! exchanges credentials for a bearer token and a panel showing the secret
//! message fetched with it.
//!
//! Session logic lives in the `session` crate; this crate supplies the browser
//! glue (`localStorage`, `gloo-net`, `gloo-timers`, reactive signals) and the
//! markup.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install logging and mount the app on `<body>`.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(app::App);
}
