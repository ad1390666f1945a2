//! Site configuration (_config.yml)

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Site
    pub title: String,
    pub description: String,
    /// Site owner, used as the author of posts that name none
    pub author: String,
    pub language: String,

    // URL
    pub url: String,
    pub root: String,

    // Blog
    /// Directory holding the post files, relative to the base directory
    pub posts_dir: String,
    /// chrono format used for dates on rendered pages
    pub date_format: String,
    #[serde(default)]
    pub markdown: MarkdownConfig,

    #[serde(default)]
    pub server: ServerConfig,

    // Store any additional fields
    #[serde(flatten)]
    pub extra: HashMap<String, serde_yaml::Value>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Netrun Systems Blog".to_string(),
            description: "Insights on Azure cross-tenant governance and cloud management"
                .to_string(),
            author: "Netrun Systems".to_string(),
            language: "en".to_string(),

            url: "http://localhost:5000".to_string(),
            root: "/".to_string(),

            posts_dir: "blog_posts".to_string(),
            date_format: "%B %d, %Y".to_string(),
            markdown: MarkdownConfig::default(),

            server: ServerConfig::default(),
            extra: HashMap::new(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content =
            fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
        let config: SiteConfig = serde_yaml::from_str(&content)
            .with_context(|| format!("parsing {}", path.display()))?;
        Ok(config)
    }
}

/// Markdown extensions enabled when rendering post bodies
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MarkdownConfig {
    pub tables: bool,
    pub strikethrough: bool,
    pub footnotes: bool,
    pub smart_punctuation: bool,
}

/// Page server settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub ip: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            ip: "127.0.0.1".to_string(),
            port: 5000,
        }
    }
}
