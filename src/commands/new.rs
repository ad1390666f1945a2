//! Create a new post

use anyhow::{Context, Result};

use crate::content::{NewPost, Post};
use crate::Blog;

/// Write a post file built from the submitted fields
pub fn create_post(blog: &Blog, new: &NewPost) -> Result<Post> {
    let post = blog
        .repository
        .create_post(new)
        .with_context(|| format!("creating post {:?}", new.title))?;

    println!("Created: {:?}", blog.posts_dir.join(&post.source));

    Ok(post)
}
