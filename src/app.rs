//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::config::PlacesConfig;
use crate::pages::{place_edit::PlaceEditRoute, places::PlacesPage};
use crate::state::places::PlacesState;

/// Root application component.
///
/// Provides the place list and display config, and routes the listing and
/// edit pages. The data layer fills the `RwSignal<PlacesState>` context.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    provide_context(RwSignal::new(PlacesState::default()));
    provide_context(PlacesConfig::default());

    view! {
        <Stylesheet id="leptos" href="/pkg/places-ui.css"/>
        <Title text="Places"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("manage") view=PlacesPage/>
                <Route
                    path=(StaticSegment("manage"), StaticSegment("places"), ParamSegment("id"))
                    view=PlaceEditRoute
                />
            </Routes>
        </Router>
    }
}
