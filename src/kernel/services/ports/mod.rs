//! Service ports: traits + data contracts.

pub mod settings;
pub mod storage;
pub mod surface;

pub use settings::{FontSettings, Settings};
pub use storage::{IoError, IoErrorKind, Result as StorageResult, Storage};
pub use surface::{Notification, NotificationLevel, PathPurpose, SessionSurface};
