//! Listing table of places.

use leptos::prelude::*;

use crate::components::place_row::PlaceRow;
use crate::state::places::PlaceRecord;

#[cfg(test)]
#[path = "place_table_test.rs"]
mod place_table_test;

/// Column headers, matching the cell order of `PlaceRow`.
pub const PLACE_TABLE_HEADERS: [&str; 5] = ["Name", "Last Visited", "Visits", "Last Skipped", "Skips"];

/// A table with one `PlaceRow` per place, or an empty-state message.
#[component]
pub fn PlaceTable(places: Vec<PlaceRecord>) -> impl IntoView {
    if places.is_empty() {
        return view! { <p class="place-table__empty">"No places yet."</p> }.into_any();
    }

    view! {
        <table class="table table-striped place-table">
            <thead>
                <tr>
                    {PLACE_TABLE_HEADERS
                        .into_iter()
                        .map(|header| view! { <th>{header}</th> })
                        .collect::<Vec<_>>()}
                </tr>
            </thead>
            <tbody>
                {places
                    .into_iter()
                    .map(|place| view! { <PlaceRow place=place/> })
                    .collect::<Vec<_>>()}
            </tbody>
        </table>
    }
    .into_any()
}
