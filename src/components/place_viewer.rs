//! Read-only detail view of a single place.

use leptos::prelude::*;

use crate::components::place_date::PlaceDate;
use crate::config::use_places_config;
use crate::state::places::{PlaceSummary, PlacesState};

/// Shows the visit/skip history of the place with `place_id`.
#[component]
pub fn PlaceViewer(#[prop(into)] place_id: String) -> impl IntoView {
    let places = expect_context::<RwSignal<PlacesState>>();
    let never = use_places_config().never_label;

    let place = move || places.with(|s| s.find(&place_id).map(PlaceSummary::to_record));

    view! {
        <div class="place-viewer">
            {move || match place() {
                Some(record) => {
                    view! {
                        <dl class="place-viewer__details">
                            <dt>"Name"</dt>
                            <dd>{record.name}</dd>
                            <dt>"Last Visited"</dt>
                            <dd><PlaceDate date=record.last_visited fallback=never.clone()/></dd>
                            <dt>"Visits"</dt>
                            <dd>{record.visit_count.to_string()}</dd>
                            <dt>"Last Skipped"</dt>
                            <dd><PlaceDate date=record.last_skipped fallback=never.clone()/></dd>
                            <dt>"Skips"</dt>
                            <dd>{record.skip_count.to_string()}</dd>
                        </dl>
                    }
                        .into_any()
                }
                None => view! { <p class="place-viewer__missing">"Place not found."</p> }.into_any(),
            }}
        </div>
    }
}
