//! Content module - parses, stores and retrieves blog posts

mod error;
mod frontmatter;
mod markdown;
mod post;
pub mod repository;

pub use error::ContentError;
pub use frontmatter::FrontMatter;
pub use markdown::{MarkdownRenderer, RenderMarkdown};
pub use post::{NewPost, ParseContext, Post, PostView};
pub use repository::{PostRepository, RepositoryConfig};

use std::path::Path;

/// List every post in `dir`, newest first.
///
/// A missing directory yields an empty list.
pub fn list_posts<P: AsRef<Path>>(dir: P) -> Vec<Post> {
    PostRepository::open(dir).list_posts()
}

/// Find the first post in `dir` whose slug equals `slug`.
pub fn get_post<P: AsRef<Path>>(dir: P, slug: &str) -> Option<Post> {
    PostRepository::open(dir).get_post(slug)
}
