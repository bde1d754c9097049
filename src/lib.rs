//! # nihongo-learn
//!
//! Leptos + WASM frontend for the Japanese vocabulary learning application.
//!
//! This crate contains the session store and route guard that decide what a
//! visitor may see, the REST client for the remote API, learner pages
//! (lessons, study sessions, tutorials), and the admin management screens.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod routes;
pub mod state;
pub mod util;

/// Browser entry point: install panic/log hooks and mount the root component.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    // A second init only happens on hot reload; the first logger stays active.
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::mount_to_body(app::App);
}
