//! Listing page walker
//!
//! Yields one listing page at a time, so the caller decides whether to
//! keep going and no page is fetched before it is asked for.

use crate::client::ClubsClient;
use crate::error::Result;
use crate::parser::parse_club_links;
use crate::url::build_listing_url;

/// Club links found on one listing page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingPage {
    /// 1-based page number
    pub number: u32,
    /// Sorted absolute detail URLs, never empty
    pub links: Vec<String>,
}

/// Walks `/all-clubs/`, `/all-clubs/pagenum/2/`, ... until the directory ends
///
/// The walk stops at the first page that is missing (HTTP 404), has no
/// club cards, or lies past `max_pages`. Any other fetch error is
/// returned to the caller.
pub struct PageWalker<'a> {
    client: &'a ClubsClient,
    next_page: u32,
    max_pages: u32,
    finished: bool,
}

impl<'a> PageWalker<'a> {
    pub fn new(client: &'a ClubsClient, max_pages: u32) -> Self {
        Self {
            client,
            next_page: 1,
            max_pages,
            finished: false,
        }
    }

    /// Fetch the next listing page
    ///
    /// # Returns
    /// `Ok(None)` once the directory is exhausted; every later call
    /// also returns `Ok(None)` without touching the network.
    ///
    /// # Errors
    /// - `HttpError` - Network failure or non-2xx status other than 404
    pub async fn next_page(&mut self) -> Result<Option<ListingPage>> {
        if self.finished || self.next_page > self.max_pages {
            self.finished = true;
            return Ok(None);
        }

        let number = self.next_page;
        let url = build_listing_url(self.client.base_url(), number);

        let html = match self.client.fetch(&url).await {
            Ok(html) => html,
            Err(e) if e.is_not_found() => {
                log::info!("Page {}: not found, end of directory", number);
                self.finished = true;
                return Ok(None);
            }
            Err(e) => return Err(e),
        };

        let links = parse_club_links(&html, self.client.base_url())?;
        log::info!("Page {}: found {} links", number, links.len());

        if links.is_empty() {
            self.finished = true;
            return Ok(None);
        }

        self.next_page += 1;
        Ok(Some(ListingPage { number, links }))
    }
}
