//! # storefront-components
//!
//! Leptos components for storefront checkout flows:
//!
//! - [`components::accordion::Accordion`], a collapsible panel with a timed
//!   expand/collapse transition and an imperative `toggle()` handle.
//! - [`components::address_review::AddressReview`], which lets a shopper pick
//!   between the address they entered and a validation service's suggestion,
//!   flagging the fields that differ.
//!
//! Widgets the components compose (icons, alerts, lists, forms) are injected
//! through [`components::capabilities::ComponentSet`].

pub mod app;
pub mod components;
pub mod config;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered showcase.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        leptos::logging::warn!("console logger unavailable: {e}");
    }
    log::debug!("hydrating storefront components showcase");
    leptos::mount::hydrate_body(app::App);
}
