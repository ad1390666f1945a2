//! Show a single post

use anyhow::{bail, Result};

use crate::Blog;

/// Print one post by slug
///
/// Prints the rendered HTML with `html`, otherwise a short summary.
pub fn run(blog: &Blog, slug: &str, html: bool) -> Result<()> {
    let Some(post) = blog.get_post(slug) else {
        bail!("No post with slug {:?} in {:?}", slug, blog.posts_dir);
    };

    if html {
        print!("{}", post.content);
        return Ok(());
    }

    println!("{}", post.title);
    println!("{} by {}", post.formatted_date(), post.author);
    if !post.excerpt.is_empty() {
        println!("\n{}", post.excerpt);
    }
    if !post.image.is_empty() {
        println!("Image: {}", post.image);
    }
    println!("\nSource: {}", post.source);

    Ok(())
}
