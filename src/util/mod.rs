//! Utility helpers shared across place UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pure formatting helpers live here so components stay thin and the
//! formatting rules can be tested without a reactive runtime.

pub mod place_date;
