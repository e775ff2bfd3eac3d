//! Headless application core: file session, recent files, service ports.

pub mod recent;
pub mod services;
pub mod session;

pub use recent::{RecentFiles, DEFAULT_RECENT_CAPACITY};
pub use session::{window_title, FileSession, Outcome, SessionState, APP_TITLE};
