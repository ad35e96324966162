//! Most-recently-used lists persisted as JSON.
//!
//! Used for "recent files" style preferences: touching an entry moves it to
//! the front, the list never exceeds its capacity, and the whole list
//! serializes through serde so it can live in a preferences file.

use commons_core::{Result, DEFAULT_MRU_CAPACITY};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

use crate::atomic::write_atomic_json;

/// Fixed-capacity most-recently-used list, most recent first.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MruList<T> {
    capacity: usize,
    entries: Vec<T>,
}

impl<T> Default for MruList<T> {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_MRU_CAPACITY,
            entries: Vec::new(),
        }
    }
}

impl<T: PartialEq> MruList<T> {
    /// An empty list holding at most `capacity` entries.
    ///
    /// A capacity of zero is treated as one so that touching always keeps
    /// the touched entry.
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity: capacity.max(1),
            entries: Vec::new(),
        }
    }

    /// Record a use of `entry`: it moves to (or enters at) the front, and
    /// the least recently used entry falls off when over capacity.
    pub fn touch(&mut self, entry: T) {
        self.entries.retain(|e| *e != entry);
        self.entries.insert(0, entry);
        self.entries.truncate(self.capacity);
    }

    /// Remove an entry wherever it sits. Returns whether it was present.
    pub fn remove(&mut self, entry: &T) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e != entry);
        self.entries.len() != before
    }

    /// Entries, most recently used first.
    pub fn entries(&self) -> &[T] {
        &self.entries
    }

    /// The most recently used entry.
    pub fn most_recent(&self) -> Option<&T> {
        self.entries.first()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl<T: PartialEq + Serialize + DeserializeOwned> MruList<T> {
    /// Load a list from a JSON file. A missing file yields an empty list
    /// with the given capacity.
    pub fn load(path: &Path, capacity: usize) -> Result<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "MRU file missing, starting empty");
            return Ok(Self::new(capacity));
        }
        let data = std::fs::read_to_string(path)
            .map_err(|e| commons_core::Error::file_system(path.to_path_buf(), "read", e))?;
        let mut list: Self = serde_json::from_str(&data)?;
        // The stored capacity may predate a configuration change
        list.capacity = capacity.max(1);
        list.entries.truncate(list.capacity);
        Ok(list)
    }

    /// Persist the list as JSON via an atomic write.
    pub fn save(&self, path: &Path) -> Result<()> {
        write_atomic_json(path, self)
    }
}
