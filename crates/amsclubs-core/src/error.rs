//! Error types for the AMS club scraper
//!
//! Provides a single error enum with human-readable messages
//! that also serializes as its display string.

use serde::{Serialize, Serializer};
use thiserror::Error;

/// Error type for all club scraper operations
#[derive(Error, Debug)]
pub enum ClubsError {
    /// HTTP request failed or returned a non-success status
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Server answered 404 for the requested URL
    #[error("Page not found: {0}")]
    NotFound(String),

    /// Failed to parse HTML content
    #[error("Failed to parse HTML: {0}")]
    ParseError(String),

    /// Writing the output document failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serializing the output document failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ClubsError {
    /// Whether this error is the "no such page" signal used to end pagination
    pub fn is_not_found(&self) -> bool {
        matches!(self, ClubsError::NotFound(_))
    }
}

impl Serialize for ClubsError {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

/// Result type alias for club scraper operations
pub type Result<T> = std::result::Result<T, ClubsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_not_found() {
        let error = ClubsError::NotFound("https://amsclubs.ca/all-clubs/pagenum/9/".to_string());
        assert_eq!(
            error.to_string(),
            "Page not found: https://amsclubs.ca/all-clubs/pagenum/9/"
        );
    }

    #[test]
    fn test_error_display_parse_error() {
        let error = ClubsError::ParseError("Invalid selector: h1".to_string());
        assert_eq!(error.to_string(), "Failed to parse HTML: Invalid selector: h1");
    }

    #[test]
    fn test_error_display_io() {
        let error = ClubsError::from(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "read-only",
        ));
        assert_eq!(error.to_string(), "I/O error: read-only");
    }

    #[test]
    fn test_is_not_found() {
        assert!(ClubsError::NotFound("x".to_string()).is_not_found());
        assert!(!ClubsError::ParseError("x".to_string()).is_not_found());
    }

    #[test]
    fn test_error_serialize() {
        let error = ClubsError::NotFound("/all-clubs/".to_string());
        let json = serde_json::to_string(&error).expect("Serialization should succeed");
        assert_eq!(json, "\"Page not found: /all-clubs/\"");
    }
}
