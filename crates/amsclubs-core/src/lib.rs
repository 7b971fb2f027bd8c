//! AMS Club Directory Scraper Core Library
//!
//! Crawls the paginated AMS club directory, extracts each club's name,
//! description and category from its detail page, and builds a sorted
//! JSON document.
//!
//! # Overview
//!
//! - HTTP client with an identifying User-Agent and request timeout
//! - Listing parser that finds club cards by their "Discover" link text
//! - Detail parser with ordered fallbacks for name and description
//! - Keyword classifier mapping each club to one of eight categories
//! - Serial crawler with a polite pause between club pages
//!
//! # Example
//!
//! ```no_run
//! use amsclubs_core::{ClubScraper, Result};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<()> {
//!     let scraper = ClubScraper::new()?;
//!     let directory = scraper.run().await?;
//!
//!     for club in &directory.clubs {
//!         println!("[{}] {}", club.category, club.name);
//!     }
//!
//!     directory.write_to("clubs.json")?;
//!     Ok(())
//! }
//! ```

mod category;
mod client;
mod error;
pub mod pagination;
pub mod parser;
mod scraper;
mod types;
pub mod url;

// Re-export category types
pub use category::{Category, KEYWORD_RULES, classify};

// Re-export client types
pub use client::{ClientConfig, ClubsClient};

// Re-export error types
pub use error::{ClubsError, Result};

// Re-export parser functions
pub use parser::{parse_club_links, parse_detail};

// Re-export pagination types
pub use pagination::{ListingPage, PageWalker};

// Re-export main scraper API
pub use scraper::{ClubScraper, ScrapeConfig};

// Re-export data types
pub use types::{Club, ClubDetail, ClubDirectory, format_timestamp, sort_clubs};

// Re-export URL helper functions for convenience
pub use url::{build_listing_url, normalize_club_href};
