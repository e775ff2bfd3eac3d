//! File session: which file is current, and how loads/saves move between states.
//!
//! The session is either *Untitled* (no path) or *Bound* to the path the buffer
//! was last loaded from or saved to, or to the path given at startup. Every
//! operation runs to completion; I/O failures are reported through the surface
//! and leave the session untouched.

use std::path::{Path, PathBuf};

use super::recent::RecentFiles;
use super::services::ports::{IoError, Notification, PathPurpose, SessionSurface, Storage};

pub const APP_TITLE: &str = "Quill";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState<'a> {
    Untitled,
    Bound(&'a Path),
}

/// What an operation ended up doing. Errors never escape an operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Done,
    Cancelled,
    Failed,
}

pub fn window_title(path: Option<&Path>) -> String {
    match path {
        Some(path) => format!("{} - {}", APP_TITLE, path.display()),
        None => APP_TITLE.to_string(),
    }
}

pub struct FileSession<S> {
    storage: S,
    current_path: Option<PathBuf>,
    recent: RecentFiles,
}

impl<S: Storage> FileSession<S> {
    pub fn new(storage: S, recent_capacity: usize) -> Self {
        Self {
            storage,
            current_path: None,
            recent: RecentFiles::new(recent_capacity),
        }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn current_path(&self) -> Option<&Path> {
        self.current_path.as_deref()
    }

    pub fn state(&self) -> SessionState<'_> {
        match self.current_path.as_deref() {
            Some(path) => SessionState::Bound(path),
            None => SessionState::Untitled,
        }
    }

    pub fn recent_files(&self) -> &RecentFiles {
        &self.recent
    }

    /// Asks for a target path, creates an empty file there and opens it.
    ///
    /// An existing file at the target is truncated without confirmation.
    pub fn new_file(&mut self, ui: &mut dyn SessionSurface) -> Outcome {
        match ui.pick_path(PathPurpose::NewFile) {
            Some(target) => self.new_file_at(&target, ui),
            None => {
                tracing::debug!("new file cancelled");
                Outcome::Cancelled
            }
        }
    }

    pub fn new_file_at(&mut self, target: &Path, ui: &mut dyn SessionSurface) -> Outcome {
        if let Err(err) = self.storage.create(target) {
            return report(err, ui);
        }
        tracing::info!(path = %target.display(), "created file");
        self.open_file(target, ui)
    }

    pub fn prompt_open(&mut self, ui: &mut dyn SessionSurface) -> Outcome {
        match ui.pick_path(PathPurpose::Open) {
            Some(path) => self.open_file(&path, ui),
            None => {
                tracing::debug!("open cancelled");
                Outcome::Cancelled
            }
        }
    }

    /// Loads `path` into the buffer and binds the session to it.
    ///
    /// The content is read in full before the buffer is touched, so a failed
    /// read leaves both the buffer and the current path as they were.
    pub fn open_file(&mut self, path: &Path, ui: &mut dyn SessionSurface) -> Outcome {
        let content = match self.storage.read(path) {
            Ok(content) => content,
            Err(err) => return report(err, ui),
        };

        ui.set_buffer_text(&content);
        self.current_path = Some(path.to_path_buf());
        ui.set_title(&window_title(Some(path)));

        self.recent.record_access(path);
        ui.show_recent_files(&self.recent.list());

        tracing::info!(path = %path.display(), bytes = content.len(), "opened file");
        Outcome::Done
    }

    /// Binds to a path supplied at startup, then loads it.
    ///
    /// The binding survives a failed load, so saving afterwards writes to
    /// `path` without asking for a target.
    pub fn open_initial(&mut self, path: &Path, ui: &mut dyn SessionSurface) -> Outcome {
        self.current_path = Some(path.to_path_buf());
        ui.set_title(&window_title(Some(path)));
        self.open_file(path, ui)
    }

    /// Re-opens the recent entry at `index`. Out-of-range indices are ignored.
    pub fn open_recent(&mut self, index: usize, ui: &mut dyn SessionSurface) -> Outcome {
        let Some(path) = self.recent.get(index).map(Path::to_path_buf) else {
            tracing::debug!(index, "no recent entry");
            return Outcome::Cancelled;
        };
        self.open_file(&path, ui)
    }

    /// Writes the buffer to the current path, or falls back to save-as when untitled.
    pub fn save_file(&mut self, ui: &mut dyn SessionSurface) -> Outcome {
        let Some(path) = self.current_path.clone() else {
            return self.save_as_file(ui);
        };

        match self.storage.write(&path, &ui.buffer_text()) {
            Ok(()) => {
                tracing::info!(path = %path.display(), "saved file");
                ui.notify(saved_notification());
                Outcome::Done
            }
            Err(err) => report(err, ui),
        }
    }

    pub fn save_as_file(&mut self, ui: &mut dyn SessionSurface) -> Outcome {
        match ui.pick_path(PathPurpose::SaveAs) {
            Some(target) => self.save_as_file_to(&target, ui),
            None => {
                tracing::debug!("save as cancelled");
                Outcome::Cancelled
            }
        }
    }

    /// Writes the buffer to `target`; only a successful write rebinds the session.
    pub fn save_as_file_to(&mut self, target: &Path, ui: &mut dyn SessionSurface) -> Outcome {
        if let Err(err) = self.storage.write(target, &ui.buffer_text()) {
            return report(err, ui);
        }

        self.current_path = Some(target.to_path_buf());
        ui.set_title(&window_title(Some(target)));
        tracing::info!(path = %target.display(), "saved file as");
        ui.notify(saved_notification());
        Outcome::Done
    }
}

fn saved_notification() -> Notification {
    Notification::info("Saved", "File saved successfully!")
}

fn report(err: IoError, ui: &mut dyn SessionSurface) -> Outcome {
    tracing::warn!(path = %err.path.display(), kind = %err.kind, error = %err.message, "file operation failed");
    ui.notify(Notification::error(err.to_string()));
    Outcome::Failed
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/session.rs"]
mod tests;
