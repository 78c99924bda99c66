//! Date label for visit/skip history.

use leptos::prelude::*;
use time::OffsetDateTime;

use crate::config::use_places_config;
use crate::util::place_date::{format_place_date, iso_date};

/// Renders `date` with the configured style, or `fallback` when absent.
#[component]
pub fn PlaceDate(#[prop(optional_no_strip)] date: Option<OffsetDateTime>, #[prop(into)] fallback: String) -> impl IntoView {
    let style = use_places_config().date_style;
    let label = format_place_date(date, &fallback, style);

    match date {
        Some(date) => view! { <time class="place-date" datetime=iso_date(date)>{label}</time> }.into_any(),
        None => view! { <span class="place-date place-date--never">{label}</span> }.into_any(),
    }
}
