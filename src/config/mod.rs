//! Configuration module

mod site;

pub use site::MarkdownConfig;
pub use site::ServerConfig;
pub use site::SiteConfig;
