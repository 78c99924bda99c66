//! Rename form for a single place.
//!
//! ERROR HANDLING
//! ==============
//! Rejected edits (blank or duplicate name, unknown place) stay in the form
//! with an inline message; nothing is written to the shared list.

use leptos::prelude::*;

use crate::state::places::{PlaceEditError, PlacesState};

#[cfg(test)]
#[path = "place_editor_test.rs"]
mod place_editor_test;

/// Edits the name of the place with `place_id` in the shared place list.
#[component]
pub fn PlaceEditor(#[prop(into)] place_id: String) -> impl IntoView {
    let places = expect_context::<RwSignal<PlacesState>>();
    let info = RwSignal::new(String::new());

    let lookup_id = place_id.clone();
    let stored_name = Memo::new(move |_| places.with(|s| s.find(&lookup_id).map(|p| p.name.clone())));
    let initial_name = stored_name.get_untracked().unwrap_or_default();
    let draft = RwSignal::new(initial_name.clone());

    // Re-seed the draft when the stored name changes.
    Effect::new(move || {
        if let Some(name) = stored_name.get() {
            draft.set(name);
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let name = draft.get_untracked();
        let result = places
            .try_update(|s| s.rename(&place_id, &name))
            .unwrap_or_else(|| Err(PlaceEditError::NotFound(place_id.clone())));
        match result {
            Ok(()) => {
                leptos::logging::log!("renamed place {place_id}");
                info.set("Saved.".to_owned());
            }
            Err(e) => {
                leptos::logging::warn!("rename rejected for place {place_id}: {e}");
                info.set(format!("Rename failed: {e}"));
            }
        }
    };

    view! {
        <form class="place-editor" on:submit=on_submit>
            <label class="place-editor__label">
                "Name"
                <input
                    class="form-control place-editor__input"
                    type="text"
                    value=initial_name
                    prop:value=move || draft.get()
                    on:input=move |ev| draft.set(event_target_value(&ev))
                    disabled=move || stored_name.get().is_none()
                />
            </label>
            <button class="btn btn-primary" type="submit" disabled=move || stored_name.get().is_none()>
                "Save"
            </button>
            <Show when=move || !info.get().is_empty()>
                <p class="place-editor__message">{move || info.get()}</p>
            </Show>
        </form>
    }
}
