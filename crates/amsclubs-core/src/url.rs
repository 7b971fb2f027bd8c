//! URL helper functions for the AMS club directory
//!
//! Provides functions for building listing page URLs and normalizing
//! club card links.

/// Builds the listing URL for a 1-based page number
///
/// Page 1 is the plain directory; later pages use the `pagenum` variant.
///
/// # Example
/// ```
/// use amsclubs_core::url::build_listing_url;
/// assert_eq!(build_listing_url("https://amsclubs.ca", 1), "https://amsclubs.ca/all-clubs/");
/// assert_eq!(
///     build_listing_url("https://amsclubs.ca", 3),
///     "https://amsclubs.ca/all-clubs/pagenum/3/"
/// );
/// ```
pub fn build_listing_url(base: &str, page: u32) -> String {
    if page <= 1 {
        format!("{}/all-clubs/", base)
    } else {
        format!("{}/all-clubs/pagenum/{}/", base, page)
    }
}

/// Normalizes a club card href into an absolute, fragment-free URL
///
/// Root-relative hrefs are rebased onto `base`. Anything that does not
/// end up under `base` is rejected.
///
/// # Returns
/// `Some(url)` for site-internal links, `None` otherwise
///
/// # Example
/// ```
/// use amsclubs_core::url::normalize_club_href;
/// let url = normalize_club_href("https://amsclubs.ca", "/clubs/chess#top");
/// assert_eq!(url, Some("https://amsclubs.ca/clubs/chess".to_string()));
/// ```
pub fn normalize_club_href(base: &str, href: &str) -> Option<String> {
    let absolute = if href.starts_with('/') {
        format!("{}{}", base, href)
    } else {
        href.to_string()
    };

    if !absolute.starts_with(base) {
        return None;
    }

    let without_fragment = absolute.split('#').next().unwrap_or(&absolute);
    Some(without_fragment.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "https://amsclubs.ca";

    #[test]
    fn test_build_listing_url_first_page() {
        assert_eq!(build_listing_url(BASE, 1), "https://amsclubs.ca/all-clubs/");
    }

    #[test]
    fn test_build_listing_url_later_page() {
        assert_eq!(
            build_listing_url(BASE, 2),
            "https://amsclubs.ca/all-clubs/pagenum/2/"
        );
        assert_eq!(
            build_listing_url(BASE, 50),
            "https://amsclubs.ca/all-clubs/pagenum/50/"
        );
    }

    #[test]
    fn test_normalize_relative_href() {
        assert_eq!(
            normalize_club_href(BASE, "/clubs/chess"),
            Some("https://amsclubs.ca/clubs/chess".to_string())
        );
    }

    #[test]
    fn test_normalize_absolute_internal_href() {
        assert_eq!(
            normalize_club_href(BASE, "https://amsclubs.ca/ubc-rowing/"),
            Some("https://amsclubs.ca/ubc-rowing/".to_string())
        );
    }

    #[test]
    fn test_normalize_strips_fragment() {
        assert_eq!(
            normalize_club_href(BASE, "https://amsclubs.ca/ubc-rowing/#contact"),
            Some("https://amsclubs.ca/ubc-rowing/".to_string())
        );
    }

    #[test]
    fn test_normalize_rejects_external_href() {
        assert_eq!(normalize_club_href(BASE, "https://instagram.com/ubc"), None);
    }

    #[test]
    fn test_normalize_rejects_non_root_relative_href() {
        assert_eq!(normalize_club_href(BASE, "clubs/chess"), None);
        assert_eq!(normalize_club_href(BASE, "mailto:club@ubc.ca"), None);
    }
}
