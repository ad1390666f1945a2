//! Helper functions shared by the repository, templates and commands

mod date;
mod slug;
mod url;

pub use date::*;
pub use slug::*;
pub use url::*;
