//! # places-ui
//!
//! Leptos frontend for tracking the team's lunch places: a listing table of
//! places with their visit/skip history, and an edit page per place.
//!
//! Rendering is split into pure view models (`place_row_cells`,
//! `PlaceEditLayout`) and thin components that map them to markup. Place data
//! is supplied by an external data layer through the `PlacesState` context.

pub mod app;
pub mod components;
pub mod config;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: installs console logging and hydrates `App`.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Debug).is_err() {
        leptos::logging::warn!("console logger already initialized");
    }
    log::info!("hydrating places UI");
    leptos::mount::hydrate_body(app::App);
}
