// src/utils/url.rs

//! URL helpers for sources and rendered links.

use url::Url;

/// Placeholder target for controls whose link is missing.
pub const PLACEHOLDER_HREF: &str = "#";

/// Whether a location should be fetched over HTTP.
///
/// # Examples
/// ```
/// use podcast_catalog::utils::url::is_http_location;
///
/// assert!(is_http_location("https://example.com/data.json"));
/// assert!(!is_http_location("./data.json"));
/// ```
pub fn is_http_location(location: &str) -> bool {
    Url::parse(location.trim())
        .map(|u| matches!(u.scheme(), "http" | "https"))
        .unwrap_or(false)
}

/// Extract the host of a URL, lowercased and without a leading `www.`.
///
/// # Examples
/// ```
/// use podcast_catalog::utils::url::get_domain;
///
/// assert_eq!(
///     get_domain("https://www.LinkedIn.com/in/ana"),
///     Some("linkedin.com".to_string())
/// );
/// ```
pub fn get_domain(url: &str) -> Option<String> {
    let parsed = Url::parse(url.trim()).ok()?;
    let host = parsed.host_str()?.to_lowercase();
    Some(host.strip_prefix("www.").map(str::to_string).unwrap_or(host))
}

/// Return the link when present and non-blank.
pub fn non_blank(url: Option<&str>) -> Option<&str> {
    url.map(str::trim).filter(|u| !u.is_empty() && *u != PLACEHOLDER_HREF)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_http_location() {
        assert!(is_http_location("http://localhost:8000/invitados.json"));
        assert!(!is_http_location("invitados.json"));
        assert!(!is_http_location("/srv/site/data.json"));
        assert!(!is_http_location("file:///srv/site/data.json"));
    }

    #[test]
    fn test_get_domain() {
        assert_eq!(
            get_domain("https://github.com/ana"),
            Some("github.com".to_string())
        );
        assert_eq!(
            get_domain("https://sub.example.com:8080/path"),
            Some("sub.example.com".to_string())
        );
        assert_eq!(get_domain("invalid-url"), None);
    }

    #[test]
    fn test_non_blank() {
        assert_eq!(non_blank(Some(" https://x.y ")), Some("https://x.y"));
        assert_eq!(non_blank(Some("")), None);
        assert_eq!(non_blank(Some("#")), None);
        assert_eq!(non_blank(None), None);
    }
}
