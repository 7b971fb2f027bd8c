//! HTML parsers for the AMS club directory
//!
//! Contains modules for parsing listing and detail pages, plus the
//! small text helpers they share.

pub mod detail;
pub mod listing;

pub use detail::{extract_description, extract_name, parse_detail};
pub use listing::{find_club_links, parse_club_links};

use scraper::{ElementRef, Selector};

use crate::error::{ClubsError, Result};

/// Parses a CSS selector, mapping failures to `ParseError`
pub(crate) fn selector(css: &str) -> Result<Selector> {
    Selector::parse(css)
        .map_err(|e| ClubsError::ParseError(format!("Invalid selector {}: {:?}", css, e)))
}

/// Text of an element with each text node trimmed, empty nodes dropped,
/// and the rest joined by `separator`
pub(crate) fn element_text(element: &ElementRef, separator: &str) -> String {
    element
        .text()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .collect::<Vec<_>>()
        .join(separator)
}
