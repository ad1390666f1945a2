//! Initialize a new blog site

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use crate::{Blog, CONFIG_FILE};

const DEFAULT_CONFIG: &str = r#"# Blog configuration

# Site
title: Netrun Systems Blog
description: Insights on Azure cross-tenant governance and cloud management
author: Netrun Systems
language: en

# URL
url: http://localhost:5000
root: /

# Blog
posts_dir: blog_posts
date_format: "%B %d, %Y"
markdown:
  tables: false
  strikethrough: false
  footnotes: false
  smart_punctuation: false

# Server
server:
  ip: 127.0.0.1
  port: 5000
"#;

/// Write a default `_config.yml` into `target_dir` unless one exists
pub fn init_site(target_dir: &Path) -> Result<()> {
    fs::create_dir_all(target_dir)
        .with_context(|| format!("creating {}", target_dir.display()))?;

    let config_path = target_dir.join(CONFIG_FILE);
    if config_path.exists() {
        tracing::debug!("Keeping existing {:?}", config_path);
    } else {
        fs::write(&config_path, DEFAULT_CONFIG)?;
        tracing::info!("Created {:?}", config_path);
    }

    Ok(())
}

/// Create the posts directory and seed the welcome post if it is empty
pub fn run(blog: &Blog) -> Result<()> {
    fs::create_dir_all(&blog.posts_dir)
        .with_context(|| format!("creating {}", blog.posts_dir.display()))?;

    if blog.repository.seed_sample_post()? {
        println!("Seeded sample post in {:?}", blog.posts_dir);
    } else {
        tracing::debug!("{:?} already has content", blog.posts_dir);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_parses() {
        let config: crate::config::SiteConfig = serde_yaml::from_str(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.posts_dir, "blog_posts");
        assert_eq!(config.date_format, "%B %d, %Y");
    }

    #[test]
    fn test_init_seeds_once() {
        let dir = tempfile::tempdir().unwrap();
        init_site(dir.path()).unwrap();
        let blog = Blog::new(dir.path()).unwrap();

        run(&blog).unwrap();
        run(&blog).unwrap();

        let posts = blog.list_posts();
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].slug, "welcome-to-netrun-systems");
    }
}
