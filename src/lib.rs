//! quill - a single-document terminal text editor.
//!
//! Module layout:
//! - core: commands and key events
//! - kernel: recent-files tracking, the file session and its service ports/adapters
//! - models: text buffer and font style
//! - views: editor view, recents menu, path prompt
//! - tui: terminal setup/teardown and signals
//! - app: the workbench that wires everything to the terminal

pub mod core;
pub mod kernel;
pub mod models;

#[cfg(feature = "tui")]
pub mod app;
#[cfg(feature = "tui")]
pub mod tui;
#[cfg(feature = "tui")]
pub mod views;
