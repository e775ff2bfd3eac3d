//! Service adapters: OS specific implementations.

pub mod dirs;
#[cfg(feature = "tui")]
pub mod keybinding;
pub mod settings;
pub mod storage;

pub use dirs::{ensure_log_dir, get_log_dir};
#[cfg(feature = "tui")]
pub use keybinding::{KeybindingContext, KeybindingService};
pub use settings::{get_settings_path, load_settings, load_settings_from};
pub use storage::LocalStorage;
