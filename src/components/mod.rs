//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render place rows and details from plain records or from the
//! shared `PlacesState` context.

pub mod place_date;
pub mod place_editor;
pub mod place_row;
pub mod place_table;
pub mod place_viewer;
pub mod sidebar;
