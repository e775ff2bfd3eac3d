//! Recently opened files, most-recent-first.

use std::path::{Path, PathBuf};

pub const DEFAULT_RECENT_CAPACITY: usize = 5;

/// Bounded MRU list of distinct paths.
///
/// Re-recording a path moves it to the front instead of duplicating it; once
/// the list is full the least recently recorded path falls off the tail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecentFiles {
    entries: Vec<PathBuf>,
    capacity: usize,
}

impl RecentFiles {
    /// A zero capacity is raised to one.
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: Vec::with_capacity(capacity + 1),
            capacity,
        }
    }

    pub fn record_access(&mut self, path: &Path) {
        if let Some(idx) = self.entries.iter().position(|p| p == path) {
            self.entries.remove(idx);
        }
        self.entries.insert(0, path.to_path_buf());
        self.entries.truncate(self.capacity);
    }

    pub fn list(&self) -> Vec<PathBuf> {
        self.entries.clone()
    }

    pub fn get(&self, index: usize) -> Option<&Path> {
        self.entries.get(index).map(PathBuf::as_path)
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
}

impl Default for RecentFiles {
    fn default() -> Self {
        Self::new(DEFAULT_RECENT_CAPACITY)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/recent.rs"]
mod tests;
