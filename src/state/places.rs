//! Place records and the shared place list.
//!
//! DESIGN
//! ======
//! `PlaceSummary` mirrors what the places API serves; `PlaceRecord` is the
//! render-ready shape consumed by `PlaceRow`. The API store writes the zero
//! timestamp (`0001-01-01T00:00:00Z`) for "never", so conversion folds those
//! into `None`.

#[cfg(test)]
#[path = "places_test.rs"]
mod places_test;

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::config::place_edit_path;

/// Render input for a single place row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlaceRecord {
    pub edit_url: String,
    pub name: String,
    pub last_visited: Option<OffsetDateTime>,
    pub last_skipped: Option<OffsetDateTime>,
    pub visit_count: u32,
    pub skip_count: u32,
}

impl PlaceRecord {
    /// Build a record that was never visited or skipped.
    pub fn new(edit_url: impl Into<String>, name: impl Into<String>, visit_count: u32, skip_count: u32) -> Self {
        Self {
            edit_url: edit_url.into(),
            name: name.into(),
            last_visited: None,
            last_skipped: None,
            visit_count,
            skip_count,
        }
    }

    #[must_use]
    pub fn with_last_visited(mut self, date: Option<OffsetDateTime>) -> Self {
        self.last_visited = date;
        self
    }

    #[must_use]
    pub fn with_last_skipped(mut self, date: Option<OffsetDateTime>) -> Self {
        self.last_skipped = date;
        self
    }
}

/// A place as served by the places API.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceSummary {
    #[serde(alias = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub last_visited: Option<OffsetDateTime>,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub last_skipped: Option<OffsetDateTime>,
    #[serde(default)]
    pub visit_count: u32,
    #[serde(default)]
    pub skip_count: u32,
}

impl PlaceSummary {
    /// Convert to a row record linking to this place's edit route.
    pub fn to_record(&self) -> PlaceRecord {
        PlaceRecord::new(place_edit_path(&self.id), self.name.clone(), self.visit_count, self.skip_count)
            .with_last_visited(occurred(self.last_visited))
            .with_last_skipped(occurred(self.last_skipped))
    }
}

/// Drop the store's zero timestamp, which stands for "never".
fn occurred(date: Option<OffsetDateTime>) -> Option<OffsetDateTime> {
    date.filter(|d| d.year() > 1)
}

/// Errors from editing a place in the shared list.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlaceEditError {
    #[error("place name cannot be empty")]
    EmptyName,
    #[error("a place named {0:?} already exists")]
    DuplicateName(String),
    #[error("place not found: {0}")]
    NotFound(String),
}

/// Errors from decoding a place list payload.
#[derive(Debug, thiserror::Error)]
pub enum PlacesDecodeError {
    #[error("invalid place list: {0}")]
    Json(#[from] serde_json::Error),
}

/// Decode a place list payload. A `null` body (an empty list on the API side)
/// decodes to no places.
pub fn decode_places(body: &str) -> Result<Vec<PlaceSummary>, PlacesDecodeError> {
    let items: Option<Vec<PlaceSummary>> = serde_json::from_str(body)?;
    Ok(items.unwrap_or_default())
}

/// Shared place list filled by the data layer.
#[derive(Clone, Debug, Default)]
pub struct PlacesState {
    pub items: Vec<PlaceSummary>,
    pub loading: bool,
}

impl PlacesState {
    /// Replace the list wholesale and clear the loading flag.
    pub fn replace_all(&mut self, items: Vec<PlaceSummary>) {
        self.items = items;
        self.loading = false;
    }

    pub fn find(&self, id: &str) -> Option<&PlaceSummary> {
        self.items.iter().find(|p| p.id == id)
    }

    /// Row records ordered by name, ignoring case.
    pub fn records(&self) -> Vec<PlaceRecord> {
        let mut rows = self.items.iter().map(PlaceSummary::to_record).collect::<Vec<_>>();
        rows.sort_by(|a, b| {
            a.name
                .to_lowercase()
                .cmp(&b.name.to_lowercase())
                .then_with(|| a.edit_url.cmp(&b.edit_url))
        });
        rows
    }

    /// Rename a place. Names are trimmed and must be unique across the list.
    pub fn rename(&mut self, id: &str, name: &str) -> Result<(), PlaceEditError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(PlaceEditError::EmptyName);
        }
        let Some(index) = self.items.iter().position(|p| p.id == id) else {
            return Err(PlaceEditError::NotFound(id.to_owned()));
        };
        if self.items.iter().any(|p| p.id != id && p.name == name) {
            return Err(PlaceEditError::DuplicateName(name.to_owned()));
        }
        name.clone_into(&mut self.items[index].name);
        Ok(())
    }
}
