//! UI port: everything the session needs from the frontend.
//!
//! The frontend owns the buffer text; the session only reads it before a save and
//! replaces it after a successful load.

use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathPurpose {
    NewFile,
    Open,
    SaveAs,
}

impl PathPurpose {
    pub fn title(self) -> &'static str {
        match self {
            PathPurpose::NewFile => "New File",
            PathPurpose::Open => "Open File",
            PathPurpose::SaveAs => "Save File As",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Info,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub level: NotificationLevel,
    pub title: String,
    pub message: String,
}

impl Notification {
    pub fn info(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Info,
            title: title.into(),
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Error,
            title: "Error".to_string(),
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.level == NotificationLevel::Error
    }
}

pub trait SessionSurface {
    /// Asks the user for a path. `None` means the selection was cancelled.
    fn pick_path(&mut self, purpose: PathPurpose) -> Option<PathBuf>;

    fn buffer_text(&self) -> String;

    fn set_buffer_text(&mut self, text: &str);

    fn set_title(&mut self, title: &str);

    /// Replaces the rendered recent-files entries, most-recent-first.
    fn show_recent_files(&mut self, entries: &[PathBuf]);

    fn notify(&mut self, notification: Notification);
}

/// Label shown for a recent entry: the file name without its extension.
pub fn recent_label(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}
