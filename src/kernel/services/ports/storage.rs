//! Storage port: where buffers are loaded from and persisted to.

use std::fmt;
use std::path::{Path, PathBuf};

pub type Result<T> = std::result::Result<T, IoError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IoErrorKind {
    Read,
    Write,
    Create,
}

impl fmt::Display for IoErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let verb = match self {
            IoErrorKind::Read => "open",
            IoErrorKind::Write => "save",
            IoErrorKind::Create => "create",
        };
        f.write_str(verb)
    }
}

/// A resource could not be read, written or created.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Could not {kind} file {}: {message}", .path.display())]
pub struct IoError {
    pub kind: IoErrorKind,
    pub path: PathBuf,
    pub message: String,
}

impl IoError {
    pub fn new(kind: IoErrorKind, path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self {
            kind,
            path: path.into(),
            message: message.into(),
        }
    }

    pub fn from_io(kind: IoErrorKind, path: &Path, err: std::io::Error) -> Self {
        Self::new(kind, path, err.to_string())
    }
}

pub trait Storage {
    /// Reads the whole resource as text.
    fn read(&self, path: &Path) -> Result<String>;

    /// Replaces the resource content, creating it if needed.
    fn write(&self, path: &Path, content: &str) -> Result<()>;

    /// Creates an empty resource, truncating any existing one.
    fn create(&self, path: &Path) -> Result<()>;
}

impl<S: Storage + ?Sized> Storage for &S {
    fn read(&self, path: &Path) -> Result<String> {
        (**self).read(path)
    }

    fn write(&self, path: &Path, content: &str) -> Result<()> {
        (**self).write(path, content)
    }

    fn create(&self, path: &Path) -> Result<()> {
        (**self).create(path)
    }
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/ports/storage.rs"]
mod tests;
