//! Semantic commands, independent of the key that triggered them.

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Command {
    // ==================== Cursor ====================
    CursorLeft,
    CursorRight,
    CursorUp,
    CursorDown,
    CursorLineStart,
    CursorLineEnd,
    CursorFileStart,
    CursorFileEnd,
    PageUp,
    PageDown,

    // ==================== Editing ====================
    InsertChar(char),
    InsertNewline,
    InsertTab,
    DeleteBackward,
    DeleteForward,

    // ==================== File ====================
    NewFile,
    OpenFile,
    Save,
    SaveAs,
    OpenRecent(usize),

    // ==================== Recents menu ====================
    ToggleRecents,
    RecentsUp,
    RecentsDown,
    RecentsAccept,

    // ==================== Font ====================
    NextFontFamily,
    FontSizeUp,
    FontSizeDown,
    ToggleBold,
    ToggleItalic,
    ToggleUnderline,

    Quit,
}

impl Command {
    pub fn name(&self) -> &'static str {
        match self {
            Command::CursorLeft => "cursorLeft",
            Command::CursorRight => "cursorRight",
            Command::CursorUp => "cursorUp",
            Command::CursorDown => "cursorDown",
            Command::CursorLineStart => "cursorLineStart",
            Command::CursorLineEnd => "cursorLineEnd",
            Command::CursorFileStart => "cursorFileStart",
            Command::CursorFileEnd => "cursorFileEnd",
            Command::PageUp => "pageUp",
            Command::PageDown => "pageDown",
            Command::InsertChar(_) => "insertChar",
            Command::InsertNewline => "insertNewline",
            Command::InsertTab => "insertTab",
            Command::DeleteBackward => "deleteBackward",
            Command::DeleteForward => "deleteForward",
            Command::NewFile => "newFile",
            Command::OpenFile => "openFile",
            Command::Save => "save",
            Command::SaveAs => "saveAs",
            Command::OpenRecent(_) => "openRecent",
            Command::ToggleRecents => "toggleRecents",
            Command::RecentsUp => "recentsUp",
            Command::RecentsDown => "recentsDown",
            Command::RecentsAccept => "recentsAccept",
            Command::NextFontFamily => "nextFontFamily",
            Command::FontSizeUp => "fontSizeUp",
            Command::FontSizeDown => "fontSizeDown",
            Command::ToggleBold => "toggleBold",
            Command::ToggleItalic => "toggleItalic",
            Command::ToggleUnderline => "toggleUnderline",
            Command::Quit => "quit",
        }
    }

    pub fn is_file_command(&self) -> bool {
        matches!(
            self,
            Command::NewFile
                | Command::OpenFile
                | Command::Save
                | Command::SaveAs
                | Command::OpenRecent(_)
        )
    }
}
