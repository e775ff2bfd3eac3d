//! View state for the terminal frontend:
//! - EditorView: text area, font toolbar state, status notice
//! - RecentsMenu: recent-files popup
//! - PathPrompt: path input used in place of file dialogs

pub mod editor_view;
pub mod path_prompt;
pub mod recents_menu;

pub use editor_view::EditorView;
pub use path_prompt::{PathPrompt, PromptOutcome};
pub use recents_menu::RecentsMenu;
