//! Text area state: buffer, font, viewport and the transient status notice.

use crate::core::Command;
use crate::kernel::services::ports::Notification;
use crate::kernel::APP_TITLE;
use crate::models::{FontAttribute, FontStyle, TextBuffer};
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

use super::recents_menu::RecentsMenu;

pub const TAB_WIDTH: usize = 4;

pub fn grapheme_width(g: &str) -> usize {
    if g == "\t" {
        TAB_WIDTH
    } else {
        g.width()
    }
}

/// Display columns `[scroll_x, scroll_x + width)` of `line`, tabs expanded.
pub fn visible_slice(line: &str, scroll_x: usize, width: usize) -> String {
    let mut out = String::new();
    let mut x = 0usize;
    for g in line.graphemes(true) {
        let w = grapheme_width(g);
        if x >= scroll_x + width {
            break;
        }
        if x >= scroll_x && x + w <= scroll_x + width {
            if g == "\t" {
                out.extend(std::iter::repeat(' ').take(w));
            } else {
                out.push_str(g);
            }
        }
        x += w;
    }
    out
}

pub struct EditorView {
    buffer: TextBuffer,
    font: FontStyle,
    title: String,
    notification: Option<Notification>,
    recents: RecentsMenu,
    scroll_row: usize,
    scroll_x: usize,
    view_height: usize,
}

impl EditorView {
    pub fn new(font: FontStyle) -> Self {
        Self {
            buffer: TextBuffer::new(),
            font,
            title: APP_TITLE.to_string(),
            notification: None,
            recents: RecentsMenu::default(),
            scroll_row: 0,
            scroll_x: 0,
            view_height: 1,
        }
    }

    pub fn buffer(&self) -> &TextBuffer {
        &self.buffer
    }

    pub fn buffer_mut(&mut self) -> &mut TextBuffer {
        &mut self.buffer
    }

    /// Replaces the buffer content and scrolls back to the top.
    pub fn load_text(&mut self, text: &str) {
        self.buffer.set_text(text);
        self.scroll_row = 0;
        self.scroll_x = 0;
    }

    pub fn font(&self) -> &FontStyle {
        &self.font
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn set_title(&mut self, title: &str) {
        self.title = title.to_string();
    }

    pub fn notification(&self) -> Option<&Notification> {
        self.notification.as_ref()
    }

    pub fn set_notification(&mut self, notification: Notification) {
        self.notification = Some(notification);
    }

    pub fn clear_notification(&mut self) -> bool {
        self.notification.take().is_some()
    }

    pub fn recents(&self) -> &RecentsMenu {
        &self.recents
    }

    pub fn recents_mut(&mut self) -> &mut RecentsMenu {
        &mut self.recents
    }

    pub fn scroll(&self) -> (usize, usize) {
        (self.scroll_row, self.scroll_x)
    }

    /// Applies an editing, cursor or font command. Returns whether the view changed.
    pub fn apply(&mut self, command: &Command) -> bool {
        let page = self.view_height.max(1) as isize;
        match command {
            Command::CursorLeft => self.buffer.move_left(),
            Command::CursorRight => self.buffer.move_right(),
            Command::CursorUp => self.buffer.move_lines(-1),
            Command::CursorDown => self.buffer.move_lines(1),
            Command::CursorLineStart => self.buffer.move_line_start(),
            Command::CursorLineEnd => self.buffer.move_line_end(),
            Command::CursorFileStart => self.buffer.move_file_start(),
            Command::CursorFileEnd => self.buffer.move_file_end(),
            Command::PageUp => self.buffer.move_lines(-page),
            Command::PageDown => self.buffer.move_lines(page),
            Command::InsertChar(ch) => {
                self.buffer.insert_char(*ch);
                true
            }
            Command::InsertNewline => {
                self.buffer.insert_newline();
                true
            }
            Command::InsertTab => {
                self.buffer.insert_char('\t');
                true
            }
            Command::DeleteBackward => self.buffer.delete_backward(),
            Command::DeleteForward => self.buffer.delete_forward(),
            Command::NextFontFamily => {
                self.font.cycle_family();
                true
            }
            Command::FontSizeUp => self.font.step_size(1),
            Command::FontSizeDown => self.font.step_size(-1),
            Command::ToggleBold => {
                self.font.toggle(FontAttribute::Bold);
                true
            }
            Command::ToggleItalic => {
                self.font.toggle(FontAttribute::Italic);
                true
            }
            Command::ToggleUnderline => {
                self.font.toggle(FontAttribute::Underline);
                true
            }
            _ => false,
        }
    }

    /// Display column of the cursor within its line.
    pub fn cursor_x(&self) -> usize {
        let (row, col) = self.buffer.cursor();
        let line = self.buffer.line(row).unwrap_or_default();
        line.graphemes(true).take(col).map(grapheme_width).sum()
    }

    /// Scrolls so the cursor lies inside a `width` x `height` viewport.
    pub fn ensure_cursor_visible(&mut self, width: usize, height: usize) {
        let width = width.max(1);
        let height = height.max(1);
        self.view_height = height;

        let row = self.buffer.cursor().0;
        if row < self.scroll_row {
            self.scroll_row = row;
        } else if row >= self.scroll_row + height {
            self.scroll_row = row + 1 - height;
        }

        let x = self.cursor_x();
        if x < self.scroll_x {
            self.scroll_x = x;
        } else if x >= self.scroll_x + width {
            self.scroll_x = x + 1 - width;
        }
    }

    /// Lines currently inside the viewport, clipped horizontally.
    pub fn visible_lines(&self, width: usize, height: usize) -> Vec<String> {
        (self.scroll_row..self.buffer.len_lines())
            .take(height)
            .map(|row| {
                let line = self.buffer.line(row).unwrap_or_default();
                visible_slice(&line, self.scroll_x, width)
            })
            .collect()
    }
}

impl Default for EditorView {
    fn default() -> Self {
        Self::new(FontStyle::default())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/views/editor_view.rs"]
mod tests;
