//! Date rendering for last-visited / last-skipped cells.
//!
//! An absent date renders as the caller's fallback string. A present date
//! always renders as a calendar date, so it can never collide with the
//! fallback text.

#[cfg(test)]
#[path = "place_date_test.rs"]
mod place_date_test;

use time::OffsetDateTime;
use time::macros::format_description;

use crate::config::DateStyle;

/// Render `date` in `style`, or `fallback` when there is no date.
pub fn format_place_date(date: Option<OffsetDateTime>, fallback: &str, style: DateStyle) -> String {
    let Some(date) = date else {
        return fallback.to_owned();
    };

    let formatted = match style {
        DateStyle::Short => date.format(format_description!("[month repr:short] [day padding:none], [year]")),
        DateStyle::Long => date.format(format_description!("[month repr:long] [day padding:none], [year]")),
        DateStyle::Iso => date.format(format_description!("[year]-[month]-[day]")),
    };

    formatted.unwrap_or_else(|_| date.date().to_string())
}

/// Machine-readable `datetime` attribute value for a `<time>` element.
pub fn iso_date(date: OffsetDateTime) -> String {
    date.date().to_string()
}
