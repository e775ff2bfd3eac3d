//! Local filesystem storage.

use crate::kernel::services::ports::storage::{IoError, IoErrorKind, Result, Storage};
use std::fs;
use std::io::{self, Write};
use std::path::Path;

#[derive(Debug, Clone, Copy)]
pub struct LocalStorage;

impl LocalStorage {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl Storage for LocalStorage {
    fn read(&self, path: &Path) -> Result<String> {
        if !path.exists() {
            return Err(IoError::new(IoErrorKind::Read, path, "No such file"));
        }
        if !path.is_file() {
            return Err(IoError::new(IoErrorKind::Read, path, "Not a file"));
        }
        fs::read_to_string(path).map_err(|e| IoError::from_io(IoErrorKind::Read, path, e))
    }

    fn write(&self, path: &Path, content: &str) -> Result<()> {
        if path.is_dir() {
            return Err(IoError::new(IoErrorKind::Write, path, "Is a directory"));
        }
        replace_file(path, |file| file.write_all(content.as_bytes()))
            .map_err(|e| IoError::from_io(IoErrorKind::Write, path, e))
    }

    fn create(&self, path: &Path) -> Result<()> {
        if path.is_dir() {
            return Err(IoError::new(IoErrorKind::Create, path, "Is a directory"));
        }
        fs::File::create(path)
            .map(|_| ())
            .map_err(|e| IoError::from_io(IoErrorKind::Create, path, e))
    }
}

/// Fills a temp file next to `path`, then renames it over `path`.
///
/// Until the rename, `path` keeps its previous content; a failure removes the
/// temp file and leaves the target as it was.
fn replace_file(path: &Path, fill: impl FnOnce(&mut fs::File) -> io::Result<()>) -> io::Result<()> {
    let dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    let mut tmp = tempfile::NamedTempFile::new_in(dir)?;
    fill(tmp.as_file_mut())?;
    tmp.as_file().sync_all()?;
    if let Some(permissions) = target_permissions(path) {
        tmp.as_file().set_permissions(permissions)?;
    }
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}

/// Existing files keep their mode; temp files start out private.
fn target_permissions(path: &Path) -> Option<fs::Permissions> {
    match fs::metadata(path) {
        Ok(meta) => Some(meta.permissions()),
        Err(_) => new_file_permissions(),
    }
}

#[cfg(unix)]
fn new_file_permissions() -> Option<fs::Permissions> {
    use std::os::unix::fs::PermissionsExt;
    Some(fs::Permissions::from_mode(0o644))
}

#[cfg(not(unix))]
fn new_file_permissions() -> Option<fs::Permissions> {
    None
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/adapters/storage.rs"]
mod tests;
