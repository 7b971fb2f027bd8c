//! Detail page parser
//!
//! Name and description are each taken from an ordered list of
//! strategies; the first strategy that yields a value wins.

use regex::Regex;
use scraper::Html;

use super::{element_text, selector};
use crate::category::classify;
use crate::error::{ClubsError, Result};
use crate::types::ClubDetail;

/// A single extraction attempt against a parsed page
type Strategy = fn(&Html) -> Result<Option<String>>;

const NAME_STRATEGIES: &[Strategy] = &[first_h1, first_h2, first_h3, title_without_suffix];

const DESCRIPTION_STRATEGIES: &[Strategy] =
    &[meta_description, first_long_paragraph, first_text_block];

const LONG_PARAGRAPH_CHARS: usize = 30;
const TEXT_BLOCK_CHARS: usize = 10;

/// Parses detail page HTML into name, description and category
///
/// # Arguments
/// * `html` - Raw HTML string from a club detail page
/// * `url` - URL the page was fetched from, used as classifier input
pub fn parse_detail(html: &str, url: &str) -> Result<ClubDetail> {
    let document = Html::parse_document(html);
    let name = extract_name(&document)?;
    let description = extract_description(&document)?;
    let category = classify(&name, &description, url);

    Ok(ClubDetail {
        name,
        description,
        category,
    })
}

/// Club name from the first non-empty h1/h2/h3, else the page title
///
/// Returns an empty string when nothing is found.
pub fn extract_name(document: &Html) -> Result<String> {
    Ok(first_match(document, NAME_STRATEGIES)?.unwrap_or_default())
}

/// Club description from the meta description, else the first
/// substantial paragraph, else any short text block
///
/// Returns an empty string when nothing is found.
pub fn extract_description(document: &Html) -> Result<String> {
    Ok(first_match(document, DESCRIPTION_STRATEGIES)?.unwrap_or_default())
}

fn first_match(document: &Html, strategies: &[Strategy]) -> Result<Option<String>> {
    for strategy in strategies {
        if let Some(value) = strategy(document)? {
            return Ok(Some(value));
        }
    }
    Ok(None)
}

fn first_heading(document: &Html, tag: &str) -> Result<Option<String>> {
    let heading = document.select(&selector(tag)?).next();
    Ok(heading
        .map(|h| element_text(&h, ""))
        .filter(|text| !text.is_empty()))
}

fn first_h1(document: &Html) -> Result<Option<String>> {
    first_heading(document, "h1")
}

fn first_h2(document: &Html) -> Result<Option<String>> {
    first_heading(document, "h2")
}

fn first_h3(document: &Html) -> Result<Option<String>> {
    first_heading(document, "h3")
}

/// Page title with a trailing " – Site Name" removed
fn title_without_suffix(document: &Html) -> Result<Option<String>> {
    let Some(title) = document.select(&selector("title")?).next() else {
        return Ok(None);
    };

    let suffix = Regex::new(r"\s*–.*$")
        .map_err(|e| ClubsError::ParseError(format!("Invalid title pattern: {}", e)))?;
    let name = suffix.replace(&element_text(&title, ""), "").into_owned();

    Ok(Some(name).filter(|n| !n.is_empty()))
}

/// Content of `<meta name="description">`, trimmed
///
/// A present, non-empty content attribute wins even if it trims to nothing.
fn meta_description(document: &Html) -> Result<Option<String>> {
    let meta = document.select(&selector(r#"meta[name="description"]"#)?).next();
    Ok(meta
        .and_then(|m| m.value().attr("content"))
        .filter(|content| !content.is_empty())
        .map(|content| content.trim().to_string()))
}

fn first_long_paragraph(document: &Html) -> Result<Option<String>> {
    first_text_longer_than(document, "p", LONG_PARAGRAPH_CHARS)
}

fn first_text_block(document: &Html) -> Result<Option<String>> {
    first_text_longer_than(document, "p, div, li", TEXT_BLOCK_CHARS)
}

fn first_text_longer_than(document: &Html, css: &str, min_chars: usize) -> Result<Option<String>> {
    let block_selector = selector(css)?;
    Ok(document
        .select(&block_selector)
        .map(|el| element_text(&el, " "))
        .find(|text| text.chars().count() > min_chars))
}
