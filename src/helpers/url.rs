//! URL helper functions

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Characters escaped inside a single path segment
const SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Generate a URL with the root path
///
/// # Examples
/// ```ignore
/// url_for("/site/", "/blog") // -> "/site/blog"
/// ```
pub fn url_for(root: &str, path: &str) -> String {
    let root = root.trim_end_matches('/');
    let path = path.trim_start_matches('/');

    if path.is_empty() {
        format!("{}/", root)
    } else {
        format!("{}/{}", root, path)
    }
}

/// Link to a single post page, escaping the slug as one path segment
pub fn post_url(root: &str, slug: &str) -> String {
    url_for(root, &format!("blog/{}", encode_segment(slug)))
}

/// Percent-encode a path segment
pub fn encode_segment(segment: &str) -> String {
    utf8_percent_encode(segment, SEGMENT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_for() {
        assert_eq!(url_for("/", "/blog"), "/blog");
        assert_eq!(url_for("/site/", "blog"), "/site/blog");
        assert_eq!(url_for("/", ""), "/");
    }

    #[test]
    fn test_post_url() {
        assert_eq!(
            post_url("/", "welcome-to-netrun-systems"),
            "/blog/welcome-to-netrun-systems"
        );
        assert_eq!(post_url("/", "tips:&-tricks"), "/blog/tips%3A%26-tricks");
    }
}
