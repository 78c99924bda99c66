//! Place listing page at `/manage`.

use leptos::prelude::*;

use crate::components::place_table::PlaceTable;
use crate::components::sidebar::{MAIN_CLASS, PlacesSidebar, places_nav};
use crate::state::places::PlacesState;

/// All places of the team, sorted by name.
#[component]
pub fn PlacesPage() -> impl IntoView {
    let places = expect_context::<RwSignal<PlacesState>>();

    view! {
        <div class="row">
            <PlacesSidebar links=places_nav()/>
            <main class=MAIN_CLASS>
                <h1>"Places"</h1>
                <div class="table-responsive">
                    {move || {
                        if places.with(|s| s.loading) {
                            view! { <p class="places-page__loading">"Loading places..."</p> }.into_any()
                        } else {
                            view! { <PlaceTable places=places.with(PlacesState::records)/> }.into_any()
                        }
                    }}
                </div>
            </main>
        </div>
    }
}
