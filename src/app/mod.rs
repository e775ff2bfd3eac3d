//! Application layer: the terminal workbench around a file session.

pub mod events;
mod render;
mod surface;
pub mod workbench;

pub use events::{CrosstermEvents, EventSource};
pub use workbench::{ExitReason, Workbench};
