//! Post repository - loads posts from a store and writes new ones

use std::path::Path;
use std::sync::Arc;

use super::{
    ContentError, FrontMatter, MarkdownRenderer, NewPost, ParseContext, Post, RenderMarkdown,
};
use crate::config::SiteConfig;
use crate::helpers::{file_slug, format_post_date, parse_post_date, Clock, SystemClock};
use crate::store::{FsStore, PostStore};

/// Extension a file needs to be considered a post
const POST_EXTENSION: &str = ".md";

/// File name of the post seeded into an empty directory
pub const SAMPLE_POST_NAME: &str = "welcome-to-netrun-systems.md";

const SAMPLE_POST: &str = r#"---
title: Welcome to Netrun Systems
author: Netrun Systems
date: 2025-04-24
slug: welcome-to-netrun-systems
excerpt: Welcome to the Netrun Systems blog where we'll share insights on Azure cross-tenant governance and cloud management.
---
# Welcome to Netrun Systems

Thank you for visiting the Netrun Systems blog. Here we'll share insights, best practices, and updates about our cross-tenant governance solutions for Azure.

## Our Mission

At Netrun Systems, we're dedicated to helping Azure consultants and MSPs manage multiple client environments securely and efficiently. Our flagship product, Netrun Systems Nexus, leverages Azure Lighthouse technology to provide secure cross-tenant access management without sharing credentials or adding guest accounts.

## Stay Tuned

Check back regularly for:
- Technical deep dives
- Best practices for Azure governance
- Product updates and new features
- Case studies and success stories

We're excited to have you join us on this journey!
"#;

/// Everything a [`PostRepository`] is built from
#[derive(Clone)]
pub struct RepositoryConfig {
    /// Directory of post files
    pub store: Arc<dyn PostStore>,
    pub renderer: Arc<dyn RenderMarkdown>,
    pub clock: Arc<dyn Clock>,
    /// Author for posts whose front matter names none
    pub default_author: String,
}

impl RepositoryConfig {
    /// Plain CommonMark, wall clock, default site owner
    pub fn new(store: Arc<dyn PostStore>) -> Self {
        Self {
            store,
            renderer: Arc::new(MarkdownRenderer::new()),
            clock: Arc::new(SystemClock),
            default_author: SiteConfig::default().author,
        }
    }

    /// Build from site settings, reading posts from `posts_dir`
    pub fn from_site<P: AsRef<Path>>(config: &SiteConfig, posts_dir: P) -> Self {
        Self {
            store: Arc::new(FsStore::new(posts_dir)),
            renderer: Arc::new(MarkdownRenderer::with_config(&config.markdown)),
            clock: Arc::new(SystemClock),
            default_author: config.author.clone(),
        }
    }

    pub fn with_renderer(mut self, renderer: Arc<dyn RenderMarkdown>) -> Self {
        self.renderer = renderer;
        self
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn with_default_author(mut self, author: impl Into<String>) -> Self {
        self.default_author = author.into();
        self
    }
}

/// Reads posts from a [`PostStore`]
///
/// Nothing is cached: every query re-lists and re-parses the directory.
#[derive(Clone)]
pub struct PostRepository {
    store: Arc<dyn PostStore>,
    renderer: Arc<dyn RenderMarkdown>,
    clock: Arc<dyn Clock>,
    default_author: String,
}

impl PostRepository {
    pub fn new(config: RepositoryConfig) -> Self {
        Self {
            store: config.store,
            renderer: config.renderer,
            clock: config.clock,
            default_author: config.default_author,
        }
    }

    /// Repository over a directory on disk with default settings
    pub fn open<P: AsRef<Path>>(dir: P) -> Self {
        Self::new(RepositoryConfig::new(Arc::new(FsStore::new(dir))))
    }

    /// All posts, newest first
    ///
    /// Files that fail to read or parse are logged and skipped. Posts with
    /// equal dates keep their scan order.
    pub fn list_posts(&self) -> Vec<Post> {
        let mut posts: Vec<Post> = self.scan().collect();

        // Sort by date descending (newest first)
        posts.sort_by(|a, b| b.date.cmp(&a.date));

        posts
    }

    /// First post in scan order whose slug equals `slug`
    pub fn get_post(&self, slug: &str) -> Option<Post> {
        self.scan().find(|post| post.slug == slug)
    }

    /// Write a new post file named after the title's slug
    ///
    /// An existing file with the same slug is overwritten. Returns the post
    /// as it parses back from the written file.
    pub fn create_post(&self, new: &NewPost) -> Result<Post, ContentError> {
        let slug = file_slug(&new.title);
        if slug.is_empty() {
            return Err(ContentError::EmptySlug(new.title.clone()));
        }

        let date = parse_post_date(&new.date).unwrap_or_else(|| self.clock.now());
        let author = match new.author.trim() {
            "" => self.default_author.as_str(),
            author => author,
        };

        let mut fm = FrontMatter::default();
        fm.insert("title", &new.title);
        fm.insert("author", author);
        fm.insert("date", &format_post_date(&date));
        fm.insert("slug", &slug);
        fm.insert("excerpt", &new.excerpt);
        if let Some(image) = new.image.as_deref().filter(|i| !i.trim().is_empty()) {
            fm.insert("image", image);
        }
        let document = fm.to_document(&new.body);

        let file_name = format!("{}{}", slug, POST_EXTENSION);
        self.store.write(&file_name, &document)?;
        tracing::info!("Created post {}", file_name);

        Post::parse(&document, &file_name, &self.parse_context())
    }

    /// Write the welcome post if the directory holds no files at all
    ///
    /// Returns whether the post was written.
    pub fn seed_sample_post(&self) -> Result<bool, ContentError> {
        if !self.store.list()?.is_empty() {
            return Ok(false);
        }
        self.store.write(SAMPLE_POST_NAME, SAMPLE_POST)?;
        tracing::info!("Seeded sample post {}", SAMPLE_POST_NAME);
        Ok(true)
    }

    /// Parse every post file in scan order, skipping failures
    fn scan(&self) -> impl Iterator<Item = Post> + '_ {
        let names = match self.store.list() {
            Ok(names) => names,
            Err(e) => {
                tracing::warn!("Failed to list posts: {}", e);
                Vec::new()
            }
        };

        names
            .into_iter()
            .filter(|name| is_post_file(name))
            .filter_map(move |name| match self.load_post(&name) {
                Ok(post) => Some(post),
                Err(e) => {
                    tracing::warn!("Failed to load post {:?}: {}", name, e);
                    None
                }
            })
    }

    /// Load a single post from a file
    fn load_post(&self, name: &str) -> Result<Post, ContentError> {
        let raw = self.store.read(name)?;
        let post = Post::parse(&raw, name, &self.parse_context())?;
        tracing::debug!("Loaded post {:?} as {:?}", name, post.slug);
        Ok(post)
    }

    fn parse_context(&self) -> ParseContext<'_> {
        ParseContext {
            renderer: self.renderer.as_ref(),
            clock: self.clock.as_ref(),
            default_author: &self.default_author,
        }
    }
}

/// Check if a file name is a post file
fn is_post_file(name: &str) -> bool {
    name.ends_with(POST_EXTENSION)
}
