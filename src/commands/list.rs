//! List blog posts

use anyhow::Result;
use serde_json::json;

use crate::helpers::post_url;
use crate::Blog;

/// Print every post, newest first
pub fn run(blog: &Blog, as_json: bool) -> Result<()> {
    let posts = blog.list_posts();

    if as_json {
        let views: Vec<_> = posts
            .iter()
            .map(|post| {
                post.view(&blog.config.date_format, post_url(&blog.config.root, &post.slug))
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&json!({ "posts": views }))?);
        return Ok(());
    }

    println!("Posts ({}):", posts.len());
    for post in posts {
        println!(
            "  {} - {} [{}] by {}",
            post.date_string(),
            post.title,
            post.slug,
            post.author
        );
    }

    Ok(())
}
