//! Slug derivation

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref NON_SLUG_CHARS: Regex = Regex::new(r"[^a-z0-9-]").unwrap();
}

/// Slug used when a post's front matter has none:
/// lower-cased title with spaces replaced by hyphens
pub fn slug_from_title(title: &str) -> String {
    title.to_lowercase().replace(' ', "-")
}

/// Slug used as the file name for newly created posts
///
/// Same as [`slug_from_title`] with everything outside `[a-z0-9-]` removed.
pub fn file_slug(title: &str) -> String {
    NON_SLUG_CHARS
        .replace_all(&slug_from_title(title.trim()), "")
        .into_owned()
}
