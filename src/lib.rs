//! # crmdesk
//!
//! Leptos + WASM frontend for a customer/subscription management portal.
//! Talks to the remote CRM microservices over REST; the only state the
//! client persists is the session token.
//!
//! This crate contains pages, components, application state, the HTTP
//! client wrapper with its 401 interception policy, and the per-resource
//! request builders.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: mounts the application to `<body>`.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(app::App);
}
