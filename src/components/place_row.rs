//! Table row for one place in the listing.
//!
//! ARCHITECTURE
//! ============
//! `place_row_cells` builds the five cells as plain data; `PlaceRow` only maps
//! them to markup. Date cells are rendered through `PlaceDate`.

use leptos::prelude::*;
use time::OffsetDateTime;

use crate::components::place_date::PlaceDate;
use crate::config::{DateStyle, use_places_config};
use crate::state::places::PlaceRecord;
use crate::util::place_date::format_place_date;

#[cfg(test)]
#[path = "place_row_test.rs"]
mod place_row_test;
#[cfg(test)]
#[path = "place_row_render_test.rs"]
mod place_row_render_test;

/// One cell of a place row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RowCell {
    Link { href: String, label: String },
    Date { date: Option<OffsetDateTime>, fallback: String },
    Count(u32),
}

impl RowCell {
    /// Plain text shown in the cell.
    pub fn text(&self, style: DateStyle) -> String {
        match self {
            Self::Link { label, .. } => label.clone(),
            Self::Date { date, fallback } => format_place_date(*date, fallback, style),
            Self::Count(n) => n.to_string(),
        }
    }
}

/// Cells in display order: name, last visited, visits, last skipped, skips.
pub fn place_row_cells(place: &PlaceRecord, never_label: &str) -> [RowCell; 5] {
    [
        RowCell::Link {
            href: place.edit_url.clone(),
            label: place.name.clone(),
        },
        RowCell::Date {
            date: place.last_visited,
            fallback: never_label.to_owned(),
        },
        RowCell::Count(place.visit_count),
        RowCell::Date {
            date: place.last_skipped,
            fallback: never_label.to_owned(),
        },
        RowCell::Count(place.skip_count),
    ]
}

/// A `<tr>` for one place.
#[component]
pub fn PlaceRow(place: PlaceRecord) -> impl IntoView {
    let config = use_places_config();
    let style = config.date_style;
    let cells = place_row_cells(&place, &config.never_label);

    view! {
        <tr class="place-row">
            {cells
                .into_iter()
                .map(|cell| view! { <td>{render_cell(cell, style)}</td> })
                .collect::<Vec<_>>()}
        </tr>
    }
}

fn render_cell(cell: RowCell, style: DateStyle) -> AnyView {
    match cell {
        RowCell::Date { date, fallback } => view! { <PlaceDate date=date fallback=fallback/> }.into_any(),
        RowCell::Link { ref href, .. } => {
            let href = href.clone();
            view! { <a href=href>{cell.text(style)}</a> }.into_any()
        }
        RowCell::Count(_) => cell.text(style).into_any(),
    }
}
