//! HTTP client for the AMS club directory
//!
//! A thin wrapper around `reqwest` that carries the identifying
//! User-Agent and request timeout, and maps HTTP 404 to
//! [`ClubsError::NotFound`] so callers can treat it as "no more pages".

use std::time::Duration;

use crate::error::{ClubsError, Result};

pub(crate) const DEFAULT_BASE_URL: &str = "https://amsclubs.ca";
const DEFAULT_USER_AGENT: &str = "UBC-Club-Indexer/1.0 (+educational demo)";

/// Configuration for the HTTP client
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Site root that listing paths are appended to and links are checked against
    /// (default: `https://amsclubs.ca`)
    pub base_url: String,
    /// User-Agent header sent with every request
    pub user_agent: String,
    /// Request timeout in seconds (default: 20)
    pub timeout_secs: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout_secs: 20,
        }
    }
}

/// HTTP client used for both listing and detail pages
///
/// Requests are made one at a time by the caller; the client itself
/// holds no per-request state.
pub struct ClubsClient {
    client: reqwest::Client,
    base_url: String,
}

impl ClubsClient {
    /// Create a new client with default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a new client with custom configuration
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent)
            .build()
            .map_err(ClubsError::HttpError)?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Site root without a trailing slash
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch the body of an absolute URL
    ///
    /// # Errors
    /// - `NotFound` - Server answered 404
    /// - `HttpError` - Network failure, timeout or any other non-2xx status
    pub async fn fetch(&self, url: &str) -> Result<String> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(ClubsError::HttpError)?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(ClubsError::NotFound(url.to_string()));
        }

        let response = response.error_for_status().map_err(ClubsError::HttpError)?;
        response.text().await.map_err(ClubsError::HttpError)
    }
}
