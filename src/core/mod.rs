//! Core framework types shared by the kernel and the frontend.

pub mod command;
#[cfg(feature = "tui")]
pub mod event;

pub use command::Command;
