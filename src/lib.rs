//! # bazaar
//!
//! Leptos + WASM browser client for the multi-tenant marketplace: buyers
//! browse and order products, sellers manage their orders, admins oversee
//! the marketplace. The remote backend is a hosted table store reached over
//! REST; device-local collections (wishlist, address book) live in the
//! `stash` crate and persist through browser localStorage.
//!
//! This crate contains pages, components, application state, the table-API
//! client, and the storage glue binding `stash` to the browser.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Hydrate entry point invoked by the browser bundle.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        log::warn!("console logger was already initialized");
    }
    leptos::mount::hydrate_body(app::App);
}
