//! Main scraper API for the AMS club directory
//!
//! Ties the client, the page walker and the parsers into one serial
//! crawl that produces a [`ClubDirectory`].

use std::collections::HashSet;
use std::path::PathBuf;
use std::time::Duration;

use tokio::time::sleep;

use crate::client::{ClientConfig, ClubsClient};
use crate::error::Result;
use crate::pagination::PageWalker;
use crate::parser::parse_detail;
use crate::types::{Club, ClubDetail, ClubDirectory};
use crate::url::build_listing_url;

/// Crawl settings
#[derive(Debug, Clone)]
pub struct ScrapeConfig {
    /// Highest listing page number to request (default: 50)
    pub max_pages: u32,
    /// Pause after each club is recorded (default: 500ms)
    pub delay: Duration,
    /// Where the output document is written (default: `clubs.json`)
    pub output_path: PathBuf,
}

impl Default for ScrapeConfig {
    fn default() -> Self {
        Self {
            max_pages: 50,
            delay: Duration::from_millis(500),
            output_path: PathBuf::from("clubs.json"),
        }
    }
}

impl ScrapeConfig {
    /// Sets the maximum number of listing pages to fetch.
    #[must_use]
    pub const fn with_max_pages(mut self, max: u32) -> Self {
        self.max_pages = max;
        self
    }

    /// Sets the pause between detail requests.
    #[must_use]
    pub const fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Sets the output file path.
    #[must_use]
    pub fn with_output_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_path = path.into();
        self
    }
}

/// Main scraper API for the AMS club directory
///
/// All requests are awaited one after another; nothing is spawned.
pub struct ClubScraper {
    client: ClubsClient,
    config: ScrapeConfig,
}

impl ClubScraper {
    /// Create a new scraper with default configuration
    ///
    /// # Errors
    /// Returns error if HTTP client initialization fails
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default(), ScrapeConfig::default())
    }

    /// Create a new scraper with custom client and crawl configuration
    ///
    /// # Errors
    /// Returns error if HTTP client initialization fails
    pub fn with_config(client_config: ClientConfig, config: ScrapeConfig) -> Result<Self> {
        let client = ClubsClient::with_config(client_config)?;
        Ok(Self { client, config })
    }

    pub fn config(&self) -> &ScrapeConfig {
        &self.config
    }

    /// URL of the first listing page, recorded as the document source
    pub fn listing_url(&self) -> String {
        build_listing_url(self.client.base_url(), 1)
    }

    /// Fetch and parse one club detail page
    ///
    /// Never fails: any fetch or parse error is logged and turned into
    /// an empty [`ClubDetail`], which the caller then discards.
    pub async fn scrape_detail(&self, url: &str) -> ClubDetail {
        log::debug!("Fetching club page {}", url);

        let parsed = match self.client.fetch(url).await {
            Ok(html) => parse_detail(&html, url),
            Err(e) => Err(e),
        };

        parsed.unwrap_or_else(|e| {
            log::warn!("Skipping {}: {}", url, e);
            ClubDetail::default()
        })
    }

    /// Crawl every listing page and collect the clubs, unsorted
    ///
    /// Stops early when a page after the first brings no unseen links.
    ///
    /// # Errors
    /// Returns the first listing-page error other than 404
    pub async fn scrape_clubs(&self) -> Result<Vec<Club>> {
        let mut seen: HashSet<String> = HashSet::new();
        let mut clubs = Vec::new();
        let mut walker = PageWalker::new(&self.client, self.config.max_pages);

        while let Some(page) = walker.next_page().await? {
            let new_links: Vec<String> = page
                .links
                .into_iter()
                .filter(|url| !seen.contains(url))
                .collect();

            if new_links.is_empty() && page.number > 1 {
                log::info!("Page {}: no new links, stopping", page.number);
                break;
            }

            for url in new_links {
                seen.insert(url.clone());

                let Some(club) = self.scrape_detail(&url).await.into_club(&url) else {
                    log::debug!("No club name on {}, discarding", url);
                    continue;
                };

                log::debug!("{} -> {}", club.name, club.category);
                clubs.push(club);
                sleep(self.config.delay).await;
            }
        }

        log::info!("Scrape complete - {} clubs", clubs.len());
        Ok(clubs)
    }

    /// Crawl the directory and build the sorted output document
    ///
    /// # Errors
    /// Returns the first listing-page error other than 404
    pub async fn run(&self) -> Result<ClubDirectory> {
        let clubs = self.scrape_clubs().await?;
        Ok(ClubDirectory::new(self.listing_url(), clubs))
    }
}
