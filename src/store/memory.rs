use indexmap::IndexMap;
use std::io;
use std::sync::{Mutex, MutexGuard};

use super::PostStore;

/// In-memory directory, listed in insertion order
#[derive(Debug)]
pub struct MemoryStore {
    state: Mutex<State>,
}

#[derive(Debug)]
struct State {
    exists: bool,
    /// `None` marks a file whose bytes are not valid UTF-8
    files: IndexMap<String, Option<String>>,
}

impl MemoryStore {
    /// An empty, existing directory
    pub fn new() -> Self {
        Self::with_state(true)
    }

    /// A directory that does not exist until the first write
    pub fn missing() -> Self {
        Self::with_state(false)
    }

    /// A directory holding the given (name, contents) files
    pub fn with_files<I, N, C>(files: I) -> Self
    where
        I: IntoIterator<Item = (N, C)>,
        N: Into<String>,
        C: Into<String>,
    {
        let store = Self::new();
        for (name, contents) in files {
            store.insert(name, contents);
        }
        store
    }

    pub fn insert(&self, name: impl Into<String>, contents: impl Into<String>) {
        let mut state = self.lock();
        state.exists = true;
        state.files.insert(name.into(), Some(contents.into()));
    }

    /// Add a file that fails to read as text
    pub fn insert_unreadable(&self, name: impl Into<String>) {
        let mut state = self.lock();
        state.exists = true;
        state.files.insert(name.into(), None);
    }

    /// Raw contents of a file, if present and readable
    pub fn get(&self, name: &str) -> Option<String> {
        self.lock().files.get(name).cloned().flatten()
    }

    fn with_state(exists: bool) -> Self {
        Self {
            state: Mutex::new(State {
                exists,
                files: IndexMap::new(),
            }),
        }
    }

    fn lock(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl PostStore for MemoryStore {
    fn exists(&self) -> bool {
        self.lock().exists
    }

    fn list(&self) -> io::Result<Vec<String>> {
        Ok(self.lock().files.keys().cloned().collect())
    }

    fn read(&self, name: &str) -> io::Result<String> {
        match self.lock().files.get(name) {
            Some(Some(contents)) => Ok(contents.clone()),
            Some(None) => Err(io::Error::new(
                io::ErrorKind::InvalidData,
                "stream did not contain valid UTF-8",
            )),
            None => Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("no such file: {}", name),
            )),
        }
    }

    fn write(&self, name: &str, contents: &str) -> io::Result<()> {
        self.insert(name, contents);
        Ok(())
    }
}
