//! Front-matter parsing

use chrono::NaiveDateTime;
use indexmap::IndexMap;

use super::ContentError;
use crate::helpers::parse_post_date;

/// Line that opens and closes the front-matter block
pub const DELIMITER: &str = "---";

/// Front-matter data from a post
///
/// Keys keep the order they first appear in; a later duplicate key
/// replaces the earlier value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrontMatter {
    fields: IndexMap<String, String>,
}

impl FrontMatter {
    /// Parse front-matter from content string
    /// Returns (front_matter, remaining_content)
    pub fn parse(content: &str) -> Result<(Self, &str), ContentError> {
        let content = content.strip_prefix('\u{feff}').unwrap_or(content);
        let (block, body) = split_block(content).ok_or(ContentError::MissingFrontMatter)?;
        Ok((Self::parse_block(block), body))
    }

    /// Parse the `key: value` lines between the delimiters
    ///
    /// Lines are split on the first colon only, so values may contain
    /// colons. Lines without a colon are ignored.
    pub fn parse_block(block: &str) -> Self {
        let mut fields = IndexMap::new();
        for line in block.lines() {
            let Some((key, value)) = line.split_once(':') else {
                continue;
            };
            let key = key.trim();
            if key.is_empty() {
                continue;
            }
            fields.insert(key.to_string(), value.trim().to_string());
        }
        Self { fields }
    }

    /// Get a field value, treating blank values as absent
    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields
            .get(key)
            .map(String::as_str)
            .filter(|v| !v.is_empty())
    }

    /// Set a field, collapsing line breaks so the block stays line-oriented
    pub fn insert(&mut self, key: &str, value: &str) {
        let value = value
            .split(['\r', '\n'])
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ");
        self.fields.insert(key.trim().to_string(), value);
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Parse the `date` field (`YYYY-MM-DD`)
    pub fn parse_date(&self) -> Option<NaiveDateTime> {
        self.get("date").and_then(parse_post_date)
    }

    /// Serialize the block, delimiters included, followed by `body`
    pub fn to_document(&self, body: &str) -> String {
        let mut out = String::from(DELIMITER);
        out.push('\n');
        for (key, value) in self.iter() {
            let line = format!("{}: {}", key, value);
            out.push_str(line.trim_end());
            out.push('\n');
        }
        out.push_str(DELIMITER);
        out.push('\n');
        out.push_str(body);
        if !body.is_empty() && !body.ends_with('\n') {
            out.push('\n');
        }
        out
    }
}

/// Split `content` into (front-matter block, body)
///
/// The first line must be `---`; the block ends at the next line that is
/// exactly `---` (trailing whitespace allowed).
fn split_block(content: &str) -> Option<(&str, &str)> {
    let (first, after_open) = next_line(content)?;
    if first.trim_end() != DELIMITER {
        return None;
    }

    let mut rest = after_open;
    let mut consumed = 0;
    loop {
        let (line, remainder) = next_line(rest)?;
        if line.trim_end() == DELIMITER {
            return Some((&after_open[..consumed], remainder));
        }
        consumed += rest.len() - remainder.len();
        rest = remainder;
    }
}

/// Returns (line without terminator, text after the terminator)
fn next_line(s: &str) -> Option<(&str, &str)> {
    if s.is_empty() {
        return None;
    }
    match s.find('\n') {
        Some(pos) => Some((s[..pos].trim_end_matches('\r'), &s[pos + 1..])),
        None => Some((s, "")),
    }
}
