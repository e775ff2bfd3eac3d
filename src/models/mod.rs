//! Data models: text buffer and font styling.

pub mod font;
pub mod text_buffer;

pub use font::{FontAttribute, FontStyle};
pub use text_buffer::TextBuffer;
