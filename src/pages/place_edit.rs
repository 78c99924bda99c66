//! Edit page for a single place.
//!
//! SYSTEM CONTEXT
//! ==============
//! The router hands `PlaceEditRoute` the raw parameter map. It validates the
//! `id` into `PlaceParams` and `PlaceEditPage` forwards that id, unchanged, to
//! the editor and then the viewer.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::place_editor::PlaceEditor;
use crate::components::place_viewer::PlaceViewer;
use crate::components::sidebar::{MAIN_CLASS, NavLink, PlacesSidebar, places_nav};

#[cfg(test)]
#[path = "place_edit_test.rs"]
mod place_edit_test;
#[cfg(test)]
#[path = "place_edit_render_test.rs"]
mod place_edit_render_test;

/// Route parameters of the edit page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlaceParams {
    pub id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlaceParamsError {
    #[error("route is missing a place id")]
    MissingId,
}

impl PlaceParams {
    /// Build from the raw `id` route segment. Blank ids are rejected.
    pub fn from_route(id: Option<String>) -> Result<Self, PlaceParamsError> {
        match id {
            Some(id) if !id.trim().is_empty() => Ok(Self { id }),
            _ => Err(PlaceParamsError::MissingId),
        }
    }
}

/// A child mounted inside the page body, in mount order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Mount {
    Editor(String),
    Viewer(String),
}

/// Everything the edit page renders, as data.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlaceEditLayout {
    pub nav: Vec<NavLink>,
    pub heading: &'static str,
    pub mounts: [Mount; 2],
}

impl PlaceEditLayout {
    pub fn new(params: &PlaceParams) -> Self {
        Self {
            nav: places_nav(),
            heading: "Place",
            mounts: [Mount::Editor(params.id.clone()), Mount::Viewer(params.id.clone())],
        }
    }
}

/// Sidebar plus a main region hosting the editor and viewer for one place.
#[component]
pub fn PlaceEditPage(params: PlaceParams) -> impl IntoView {
    let layout = PlaceEditLayout::new(&params);

    view! {
        <div class="row">
            <PlacesSidebar links=layout.nav/>
            <main class=MAIN_CLASS>
                <h1>{layout.heading}</h1>
                <div class="table-responsive">
                    {layout.mounts.into_iter().map(render_mount).collect::<Vec<_>>()}
                </div>
            </main>
        </div>
    }
}

fn render_mount(mount: Mount) -> AnyView {
    match mount {
        Mount::Editor(id) => view! { <PlaceEditor place_id=id/> }.into_any(),
        Mount::Viewer(id) => view! { <PlaceViewer place_id=id/> }.into_any(),
    }
}

/// Router entry for `/manage/places/:id`.
#[component]
pub fn PlaceEditRoute() -> impl IntoView {
    let params = use_params_map();

    move || place_edit_view(params.with(|p| p.get("id")))
}

/// The edit page for a raw route id, or a not-found page when it is missing.
fn place_edit_view(id: Option<String>) -> AnyView {
    match PlaceParams::from_route(id) {
        Ok(params) => view! { <PlaceEditPage params=params/> }.into_any(),
        Err(e) => {
            leptos::logging::warn!("place edit route: {e}");
            view! {
                <div class="row">
                    <PlacesSidebar links=places_nav()/>
                    <main class=MAIN_CLASS>
                        <h1>"Place"</h1>
                        <p class="place-edit__missing">"Place not found."</p>
                    </main>
                </div>
            }
                .into_any()
        }
    }
}
