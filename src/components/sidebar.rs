//! Sidebar navigation shared by the place pages.

use leptos::prelude::*;

use crate::config::MANAGE_PATH;

#[cfg(test)]
#[path = "sidebar_test.rs"]
mod sidebar_test;

/// Column classes for the main region next to the sidebar.
pub const MAIN_CLASS: &str = "col-sm-9 offset-sm-3 col-md-10 offset-md-2 pt-3";

/// A navigation entry in the sidebar.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub href: String,
    pub label: String,
}

/// The fixed sidebar: a single link back to the place listing.
pub fn places_nav() -> Vec<NavLink> {
    vec![NavLink {
        href: MANAGE_PATH.to_owned(),
        label: "Places".to_owned(),
    }]
}

#[component]
pub fn PlacesSidebar(links: Vec<NavLink>) -> impl IntoView {
    view! {
        <nav class="col-sm-3 col-md-2 hidden-xs-down bg-faded sidebar">
            <ul class="nav nav-pills flex-column">
                {links
                    .into_iter()
                    .map(|link| {
                        view! {
                            <li class="nav-item">
                                <a class="nav-link" href=link.href>{link.label}</a>
                            </li>
                        }
                    })
                    .collect::<Vec<_>>()}
            </ul>
        </nav>
    }
}
