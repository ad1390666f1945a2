//! netrun-blog: flat-file Markdown blog for the Netrun Systems site
//!
//! Posts are `.md` files with a `---`-delimited front-matter block. This
//! crate parses them into [`content::Post`] records, lists them newest
//! first, looks them up by slug, writes new ones, and serves the blog pages.

pub mod commands;
pub mod config;
pub mod content;
pub mod helpers;
pub mod server;
pub mod store;
pub mod templates;

use anyhow::Result;
use std::path::{Path, PathBuf};

use content::{NewPost, Post, PostRepository, RepositoryConfig};

/// Name of the configuration file in the base directory
pub const CONFIG_FILE: &str = "_config.yml";

/// The blog application
#[derive(Clone)]
pub struct Blog {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Base directory
    pub base_dir: PathBuf,
    /// Directory holding the post files
    pub posts_dir: PathBuf,
    /// Post access
    pub repository: PostRepository,
}

impl Blog {
    /// Create a new Blog instance from a directory
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join(CONFIG_FILE);

        let config = if config_path.exists() {
            config::SiteConfig::load(&config_path)?
        } else {
            config::SiteConfig::default()
        };

        let posts_dir = base_dir.join(&config.posts_dir);
        let repository = PostRepository::new(RepositoryConfig::from_site(&config, &posts_dir));

        Ok(Self {
            config,
            base_dir,
            posts_dir,
            repository,
        })
    }

    /// Create a Blog over an already configured repository
    pub fn with_repository<P: AsRef<Path>>(
        config: config::SiteConfig,
        base_dir: P,
        repository: PostRepository,
    ) -> Self {
        let base_dir = base_dir.as_ref().to_path_buf();
        let posts_dir = base_dir.join(&config.posts_dir);
        Self {
            config,
            base_dir,
            posts_dir,
            repository,
        }
    }

    /// Initialize the site and seed the welcome post
    pub fn init(&self) -> Result<()> {
        commands::init::run(self)
    }

    /// All posts, newest first
    pub fn list_posts(&self) -> Vec<Post> {
        self.repository.list_posts()
    }

    /// One post by slug
    pub fn get_post(&self, slug: &str) -> Option<Post> {
        self.repository.get_post(slug)
    }

    /// Create a new post
    pub fn new_post(&self, new: &NewPost) -> Result<Post> {
        commands::new::create_post(self, new)
    }
}
