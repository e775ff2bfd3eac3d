//! Terminal integration (crossterm).
//!
//! Kept apart from `kernel`/`models` so the core does not depend on terminal crates.

pub mod terminal_guard;

pub use terminal_guard::{
    CrosstermTerminalOps, TerminalGuard, TerminalOps, TerminalRestorer, TerminationSignal,
};
#[cfg(unix)]
pub use terminal_guard::install_termination_signals;
