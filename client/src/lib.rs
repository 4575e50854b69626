//! # storefront
//!
//! Leptos + WASM frontend for the Cheeky Roots storefront. Lets a user
//! browse, view, add, edit, and delete products against a public REST API,
//! calling it straight from the browser.
//!
//! This crate contains pages, components, per-screen state, and the REST
//! client. The host binary renders the shell with the `ssr` feature; the
//! browser bundle is built with `hydrate` and enters through [`hydrate`].

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: installs console logging and hydrates the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
