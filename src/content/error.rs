//! Content errors

use thiserror::Error;

/// Errors raised while reading, parsing or writing posts
#[derive(Debug, Error)]
pub enum ContentError {
    /// The text does not open with a `---` line, or the block is never closed
    #[error("missing front-matter delimiters")]
    MissingFrontMatter,

    /// The submitted title has no characters that survive slug sanitizing
    #[error("cannot derive a slug from title {0:?}")]
    EmptySlug(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
