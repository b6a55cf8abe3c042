//! Image reference detection.
//!
//! A line counts as an image when it is an absolute HTTP(S) URL that either
//! ends in a known image extension or points at a known image host.

use regex::Regex;
use std::sync::LazyLock;

/// Absolute HTTP or HTTPS URL.
static URL_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)^https?://.+").unwrap());

/// Image file extension at the end of the URL, optionally followed by a query string.
static IMAGE_EXTENSION_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\.(jpg|jpeg|png|gif|webp|svg|bmp)(\?.*)?$").unwrap()
});

/// Hosts whose URLs are images even without a file extension.
pub const IMAGE_HOSTS: &[&str] = &[
    "images.unsplash.com",
    "unsplash.com",
    "images.pexels.com",
    "pexels.com",
    "pixabay.com",
    "picsum.photos",
    "imgur.com",
    "i.imgur.com",
    "flickr.com",
    "staticflickr.com",
];

/// True for an absolute `http://` or `https://` URL.
pub(crate) fn is_absolute_url(text: &str) -> bool {
    URL_REGEX.is_match(text)
}

/// Check whether a piece of text is a reference to an image.
///
/// Pure and independent of slide classification, so collaborators can use it
/// to validate user-pasted URLs.
pub fn is_image_reference(text: &str) -> bool {
    if !is_absolute_url(text) {
        return false;
    }

    if IMAGE_EXTENSION_REGEX.is_match(text) {
        return true;
    }

    IMAGE_HOSTS.iter().any(|host| text.contains(host))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extension_urls() {
        assert!(is_image_reference("https://example.com/photo.jpg"));
        assert!(is_image_reference("http://example.com/a/b/diagram.PNG"));
        assert!(is_image_reference("https://cdn.example.org/logo.svg"));
        assert!(is_image_reference("https://example.com/pic.jpeg?w=800&h=600"));
        assert!(is_image_reference("https://example.com/anim.webp"));
        assert!(is_image_reference("https://example.com/old.bmp"));
        assert!(is_image_reference("https://example.com/funny.gif"));
    }

    #[test]
    fn test_known_hosts() {
        assert!(is_image_reference("https://images.unsplash.com/photo-1501785888041"));
        assert!(is_image_reference("https://picsum.photos/800/450"));
        assert!(is_image_reference("https://imgur.com/gallery/abc"));
        assert!(is_image_reference("https://live.staticflickr.com/65535/123"));
    }

    #[test]
    fn test_absolute_url() {
        assert!(is_absolute_url("HTTPS://example.com/page"));
        assert!(!is_absolute_url("httpie tips"));
        assert!(!is_absolute_url("http://"));
    }

    #[test]
    fn test_plain_page_is_not_image() {
        assert!(!is_image_reference("http://example.com/page"));
        assert!(!is_image_reference("https://example.com/photo.jpg.html"));
        assert!(!is_image_reference("https://example.com/"));
    }

    #[test]
    fn test_requires_absolute_http_url() {
        assert!(!is_image_reference("photo.jpg"));
        assert!(!is_image_reference("ftp://example.com/photo.jpg"));
        assert!(!is_image_reference("see https://example.com/photo.jpg"));
        assert!(!is_image_reference("https://"));
        assert!(!is_image_reference(""));
    }

    #[test]
    fn test_scheme_is_case_insensitive() {
        assert!(is_image_reference("HTTPS://example.com/photo.png"));
    }
}
