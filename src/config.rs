//! Display configuration shared by place components.
//!
//! DESIGN
//! ======
//! `App` provides a `PlacesConfig` through context. Components read it with
//! `use_context` and fall back to the default, so they also render standalone.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use leptos::prelude::*;

/// Listing route for all places.
pub const MANAGE_PATH: &str = "/manage";

/// Text shown in place of a date that never happened.
pub const NEVER_LABEL: &str = "Never";

/// Edit route for a single place.
pub fn place_edit_path(id: &str) -> String {
    format!("{MANAGE_PATH}/places/{id}")
}

/// How visit/skip dates are rendered.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DateStyle {
    /// `Jan 5, 2024`
    #[default]
    Short,
    /// `January 5, 2024`
    Long,
    /// `2024-01-05`
    Iso,
}

/// Presentation settings for the places screens.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlacesConfig {
    pub never_label: String,
    pub date_style: DateStyle,
}

impl Default for PlacesConfig {
    fn default() -> Self {
        Self {
            never_label: NEVER_LABEL.to_owned(),
            date_style: DateStyle::default(),
        }
    }
}

/// Read the provided config, or the defaults when no provider is mounted.
pub fn use_places_config() -> PlacesConfig {
    use_context::<PlacesConfig>().unwrap_or_default()
}
