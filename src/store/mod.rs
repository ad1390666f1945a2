//! Post storage - the file-system capability the repository reads and writes
//! through

mod fs;
mod memory;

pub use fs::FsStore;
pub use memory::MemoryStore;

use std::io;

/// A flat directory of post files
pub trait PostStore: Send + Sync {
    /// Whether the directory exists
    fn exists(&self) -> bool;

    /// Names of the files directly inside the directory, in scan order.
    /// A missing directory lists as empty.
    fn list(&self) -> io::Result<Vec<String>>;

    /// Read a whole file as UTF-8 text
    fn read(&self, name: &str) -> io::Result<String>;

    /// Write a whole file, creating the directory if needed
    fn write(&self, name: &str, contents: &str) -> io::Result<()>;
}
