//! Listing page parser
//!
//! Club cards have no stable class or id, so a card is recognised by
//! its visible "Discover" call-to-action text.

use std::collections::BTreeSet;

use scraper::Html;

use super::{element_text, selector};
use crate::error::Result;
use crate::url::normalize_club_href;

const CARD_MARKER: &str = "Discover";

/// Parses listing HTML and returns the club detail URLs it links to
///
/// # Arguments
/// * `html` - Raw HTML string from a listing page
/// * `base` - Site root used to absolutize and filter links
///
/// # Returns
/// Sorted, de-duplicated absolute URLs; empty if the page has no club cards
pub fn parse_club_links(html: &str, base: &str) -> Result<Vec<String>> {
    let document = Html::parse_document(html);
    find_club_links(&document, base)
}

/// Extracts club detail URLs from an already parsed listing page
pub fn find_club_links(document: &Html, base: &str) -> Result<Vec<String>> {
    let anchor_selector = selector("a[href]")?;

    let links: BTreeSet<String> = document
        .select(&anchor_selector)
        .filter(|a| element_text(a, " ").contains(CARD_MARKER))
        .filter_map(|a| a.value().attr("href"))
        .filter_map(|href| normalize_club_href(base, href))
        .collect();

    Ok(links.into_iter().collect())
}
