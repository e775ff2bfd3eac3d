//! Keys -> commands, per context.

use crate::core::event::{Key, KeyCode};
use crate::core::Command;
use rustc_hash::FxHashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeybindingContext {
    Global,
    Editor,
    RecentsMenu,
}

pub struct KeybindingService {
    global: FxHashMap<Key, Command>,
    editor: FxHashMap<Key, Command>,
    recents_menu: FxHashMap<Key, Command>,
}

impl KeybindingService {
    pub fn new() -> Self {
        Self::with_defaults()
    }

    pub fn with_defaults() -> Self {
        Self {
            global: default_global_keybindings(),
            editor: default_editor_keybindings(),
            recents_menu: default_recents_menu_keybindings(),
        }
    }

    /// Context bindings first, then global ones.
    pub fn resolve(&self, context: KeybindingContext, key: &Key) -> Option<&Command> {
        match context {
            KeybindingContext::Global => self.global.get(key),
            KeybindingContext::Editor => self.editor.get(key).or_else(|| self.global.get(key)),
            KeybindingContext::RecentsMenu => self
                .recents_menu
                .get(key)
                .or_else(|| self.global.get(key)),
        }
    }
}

impl Default for KeybindingService {
    fn default() -> Self {
        Self::new()
    }
}

fn default_global_keybindings() -> FxHashMap<Key, Command> {
    let mut map = FxHashMap::default();

    map.insert(Key::ctrl(KeyCode::Char('n')), Command::NewFile);
    map.insert(Key::ctrl(KeyCode::Char('o')), Command::OpenFile);
    map.insert(Key::ctrl(KeyCode::Char('s')), Command::Save);
    map.insert(Key::ctrl_shift(KeyCode::Char('s')), Command::SaveAs);
    map.insert(Key::simple(KeyCode::F(12)), Command::SaveAs);
    map.insert(Key::ctrl(KeyCode::Char('r')), Command::ToggleRecents);
    map.insert(Key::ctrl(KeyCode::Char('q')), Command::Quit);

    map.insert(Key::alt(KeyCode::Char('b')), Command::ToggleBold);
    map.insert(Key::alt(KeyCode::Char('i')), Command::ToggleItalic);
    map.insert(Key::alt(KeyCode::Char('u')), Command::ToggleUnderline);
    map.insert(Key::alt(KeyCode::Char('f')), Command::NextFontFamily);
    map.insert(Key::alt(KeyCode::Char('=')), Command::FontSizeUp);
    map.insert(Key::alt(KeyCode::Char('+')), Command::FontSizeUp);
    map.insert(Key::alt(KeyCode::Char('-')), Command::FontSizeDown);

    map
}

fn default_editor_keybindings() -> FxHashMap<Key, Command> {
    let mut map = FxHashMap::default();

    map.insert(Key::simple(KeyCode::Left), Command::CursorLeft);
    map.insert(Key::simple(KeyCode::Right), Command::CursorRight);
    map.insert(Key::simple(KeyCode::Up), Command::CursorUp);
    map.insert(Key::simple(KeyCode::Down), Command::CursorDown);
    map.insert(Key::simple(KeyCode::Home), Command::CursorLineStart);
    map.insert(Key::simple(KeyCode::End), Command::CursorLineEnd);
    map.insert(Key::ctrl(KeyCode::Home), Command::CursorFileStart);
    map.insert(Key::ctrl(KeyCode::End), Command::CursorFileEnd);
    map.insert(Key::simple(KeyCode::PageUp), Command::PageUp);
    map.insert(Key::simple(KeyCode::PageDown), Command::PageDown);

    map.insert(Key::simple(KeyCode::Enter), Command::InsertNewline);
    map.insert(Key::simple(KeyCode::Tab), Command::InsertTab);
    map.insert(Key::simple(KeyCode::Backspace), Command::DeleteBackward);
    map.insert(Key::simple(KeyCode::Delete), Command::DeleteForward);

    map
}

fn default_recents_menu_keybindings() -> FxHashMap<Key, Command> {
    let mut map = FxHashMap::default();

    map.insert(Key::simple(KeyCode::Up), Command::RecentsUp);
    map.insert(Key::simple(KeyCode::Down), Command::RecentsDown);
    map.insert(Key::simple(KeyCode::Enter), Command::RecentsAccept);
    map.insert(Key::simple(KeyCode::Esc), Command::ToggleRecents);

    map
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/adapters/keybinding.rs"]
mod tests;
