//! Core data types for the AMS club scraper
//!
//! Contains the club record, the per-page detail result and the
//! output document written at the end of a run.

use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::category::Category;
use crate::error::Result;

/// A club as it appears in the output document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Club {
    /// Display name, never empty
    pub name: String,

    /// Category guessed from name, description and URL
    pub category: Category,

    /// Short description, possibly empty
    pub description: String,

    /// Absolute URL of the club's detail page
    pub url: String,
}

/// Fields extracted from a single detail page
///
/// The default value is what a failed fetch degrades to.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClubDetail {
    pub name: String,
    pub description: String,
    pub category: Category,
}

impl ClubDetail {
    /// Turns the detail into a [`Club`], or `None` when the name is blank
    pub fn into_club(self, url: &str) -> Option<Club> {
        let name = self.name.trim();
        if name.is_empty() {
            return None;
        }

        Some(Club {
            name: name.to_string(),
            category: self.category,
            description: self.description.trim().to_string(),
            url: url.to_string(),
        })
    }
}

/// Orders clubs by category rank, then by name
pub fn sort_clubs(clubs: &mut [Club]) {
    clubs.sort_by(|a, b| {
        a.category
            .rank()
            .cmp(&b.category.rank())
            .then_with(|| a.name.cmp(&b.name))
    });
}

/// Formats a timestamp as ISO-8601 UTC with second precision and a trailing `Z`
pub fn format_timestamp(at: DateTime<Utc>) -> String {
    at.format("%Y-%m-%dT%H:%M:%SZ").to_string()
}

/// The document written to disk at the end of a run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClubDirectory {
    /// Listing URL the crawl started from
    pub generated_from: String,

    /// Generation time, e.g. "2025-09-01T12:00:00Z"
    pub generated_at: String,

    /// Clubs sorted by category rank, then name
    pub clubs: Vec<Club>,
}

impl ClubDirectory {
    /// Builds a directory stamped with the current time, sorting the clubs
    pub fn new(generated_from: impl Into<String>, clubs: Vec<Club>) -> Self {
        Self::at(generated_from, clubs, Utc::now())
    }

    /// Builds a directory stamped with the given time, sorting the clubs
    pub fn at(generated_from: impl Into<String>, mut clubs: Vec<Club>, at: DateTime<Utc>) -> Self {
        sort_clubs(&mut clubs);
        Self {
            generated_from: generated_from.into(),
            generated_at: format_timestamp(at),
            clubs,
        }
    }

    /// Pretty-printed JSON with two-space indentation
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Writes the document to `path`, replacing any previous file
    pub fn write_to(&self, path: impl AsRef<Path>) -> Result<()> {
        std::fs::write(path, self.to_json()?)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use proptest::prelude::*;

    fn club(name: &str, category: Category) -> Club {
        Club {
            name: name.to_string(),
            category,
            description: String::new(),
            url: format!("https://amsclubs.ca/{}/", name.to_lowercase()),
        }
    }

    #[test]
    fn test_into_club_discards_empty_name() {
        let detail = ClubDetail {
            name: "   ".to_string(),
            description: "Something".to_string(),
            category: Category::Service,
        };
        assert_eq!(detail.into_club("https://amsclubs.ca/x/"), None);
    }

    #[test]
    fn test_default_detail_is_discarded() {
        assert_eq!(ClubDetail::default().into_club("https://amsclubs.ca/x/"), None);
    }

    #[test]
    fn test_into_club_trims_fields() {
        let detail = ClubDetail {
            name: " Chess Club ".to_string(),
            description: " We play chess. ".to_string(),
            category: Category::Other,
        };
        let club = detail.into_club("https://amsclubs.ca/clubs/chess").unwrap();
        assert_eq!(club.name, "Chess Club");
        assert_eq!(club.description, "We play chess.");
        assert_eq!(club.url, "https://amsclubs.ca/clubs/chess");
    }

    #[test]
    fn test_sort_by_rank_then_name() {
        let mut clubs = vec![
            club("Zeta", Category::Other),
            club("Rowing", Category::Athletic),
            club("Anime", Category::Recreational),
            club("Basketball", Category::Athletic),
        ];
        sort_clubs(&mut clubs);
        let names: Vec<&str> = clubs.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["Basketball", "Rowing", "Anime", "Zeta"]);
    }

    #[test]
    fn test_sort_is_ordinal() {
        let mut clubs = vec![club("apple", Category::Other), club("Zebra", Category::Other)];
        sort_clubs(&mut clubs);
        assert_eq!(clubs[0].name, "Zebra");
    }

    #[test]
    fn test_format_timestamp() {
        let at = Utc.with_ymd_and_hms(2025, 9, 1, 8, 5, 3).unwrap();
        assert_eq!(format_timestamp(at), "2025-09-01T08:05:03Z");
    }

    #[test]
    fn test_directory_json_shape() {
        let at = Utc.with_ymd_and_hms(2025, 1, 2, 3, 4, 5).unwrap();
        let directory = ClubDirectory::at(
            "https://amsclubs.ca/all-clubs/",
            vec![club("Chess", Category::Other)],
            at,
        );
        let value: serde_json::Value = serde_json::from_str(&directory.to_json().unwrap()).unwrap();

        assert_eq!(value["generated_from"], "https://amsclubs.ca/all-clubs/");
        assert_eq!(value["generated_at"], "2025-01-02T03:04:05Z");
        assert_eq!(value["clubs"][0]["name"], "Chess");
        assert_eq!(value["clubs"][0]["category"], "Other");
        assert_eq!(value["clubs"][0]["description"], "");
    }

    #[test]
    fn test_directory_json_keeps_unicode() {
        let directory = ClubDirectory::new("x", vec![club("Café Society", Category::Cultural)]);
        let json = directory.to_json().unwrap();
        assert!(json.contains("Café Society"));
        assert!(json.contains("\n  \"clubs\""));
    }

    #[test]
    fn test_write_to_overwrites() {
        let path = std::env::temp_dir().join(format!("amsclubs-test-{}.json", std::process::id()));
        std::fs::write(&path, "stale").unwrap();

        let directory = ClubDirectory::new("https://amsclubs.ca/all-clubs/", Vec::new());
        directory.write_to(&path).unwrap();

        let written: ClubDirectory =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(written, directory);
        let _ = std::fs::remove_file(&path);
    }

    fn arb_category() -> impl Strategy<Value = Category> {
        (0usize..8).prop_map(|i| Category::ALL[i])
    }

    proptest! {
        #[test]
        fn prop_directory_is_sorted(entries in prop::collection::vec(("[A-Za-z ]{1,12}", arb_category()), 0..30)) {
            let clubs = entries.iter().map(|(n, c)| club(n, *c)).collect();
            let directory = ClubDirectory::new("x", clubs);
            for pair in directory.clubs.windows(2) {
                let (a, b) = (&pair[0], &pair[1]);
                prop_assert!(a.category.rank() <= b.category.rank());
                if a.category == b.category {
                    prop_assert!(a.name <= b.name);
                }
            }
        }
    }
}
