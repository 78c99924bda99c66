//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! The place list is the only shared model. It is provided as an
//! `RwSignal<PlacesState>` context and filled by the external data layer.

pub mod places;
