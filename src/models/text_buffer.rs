//! Text buffer model behind the text area.
//!
//! - text storage (Rope)
//! - grapheme cursor `(row, col)`
//! - row/col <-> char offset mapping

use ropey::{Rope, RopeSlice};
use std::borrow::Cow;
use unicode_segmentation::UnicodeSegmentation;

/// Borrow the slice as `&str` when it is contiguous, otherwise copy it.
pub fn slice_to_cow(slice: RopeSlice<'_>) -> Cow<'_, str> {
    match slice.as_str() {
        Some(s) => Cow::Borrowed(s),
        None => Cow::Owned(slice.to_string()),
    }
}

/// The breaks ropey splits lines on with its default `unicode_lines` feature.
fn is_line_break(ch: char) -> bool {
    matches!(
        ch,
        '\n' | '\r' | '\u{000B}' | '\u{000C}' | '\u{0085}' | '\u{2028}' | '\u{2029}'
    )
}

fn strip_line_ending(line: &str) -> &str {
    if let Some(rest) = line.strip_suffix("\r\n") {
        return rest;
    }
    line.strip_suffix(is_line_break).unwrap_or(line)
}

#[derive(Clone, Debug)]
pub struct TextBuffer {
    rope: Rope,
    cursor: (usize, usize),
}

impl TextBuffer {
    pub fn new() -> Self {
        Self {
            rope: Rope::new(),
            cursor: (0, 0),
        }
    }

    pub fn from_text(text: &str) -> Self {
        Self {
            rope: Rope::from_str(text),
            cursor: (0, 0),
        }
    }

    pub fn text(&self) -> String {
        self.rope.to_string()
    }

    /// Replaces the whole content and moves the cursor to the start.
    pub fn set_text(&mut self, text: &str) {
        self.rope = Rope::from_str(text);
        self.cursor = (0, 0);
    }

    pub fn cursor(&self) -> (usize, usize) {
        self.cursor
    }

    pub fn set_cursor(&mut self, row: usize, col: usize) {
        let row = row.min(self.len_lines().saturating_sub(1));
        let col = col.min(self.line_grapheme_len(row));
        self.cursor = (row, col);
    }

    pub fn len_lines(&self) -> usize {
        self.rope.len_lines()
    }

    /// Line content without its line ending.
    pub fn line(&self, row: usize) -> Option<String> {
        if row >= self.rope.len_lines() {
            return None;
        }
        let slice = self.rope.line(row);
        let line = slice_to_cow(slice);
        Some(strip_line_ending(&line).to_string())
    }

    pub fn pos_to_char(&self, pos: (usize, usize)) -> usize {
        self.rope.line_to_char(pos.0) + self.grapheme_to_char_index(pos.0, pos.1)
    }

    /// Inverse of `pos_to_char`; a char inside a grapheme maps past that grapheme.
    pub fn char_to_pos(&self, char_idx: usize) -> (usize, usize) {
        let char_idx = char_idx.min(self.rope.len_chars());
        let row = self.rope.char_to_line(char_idx);
        let line_start = self.rope.line_to_char(row);
        let prefix = slice_to_cow(self.rope.slice(line_start..char_idx));
        (row, prefix.graphemes(true).count())
    }

    pub fn grapheme_to_char_index(&self, row: usize, grapheme_index: usize) -> usize {
        let slice = self.rope.line(row);
        let line = slice_to_cow(slice);
        strip_line_ending(&line)
            .graphemes(true)
            .take(grapheme_index)
            .map(|g| g.chars().count())
            .sum()
    }

    pub fn line_grapheme_len(&self, row: usize) -> usize {
        if row >= self.rope.len_lines() {
            return 0;
        }
        let slice = self.rope.line(row);
        let line = slice_to_cow(slice);
        strip_line_ending(&line).graphemes(true).count()
    }

    // ==================== Editing ====================

    pub fn insert_char(&mut self, c: char) {
        let char_offset = self.pos_to_char(self.cursor);
        self.rope.insert_char(char_offset, c);
        self.cursor = self.char_to_pos(char_offset + 1);
    }

    pub fn insert_str(&mut self, s: &str) {
        let char_offset = self.pos_to_char(self.cursor);
        self.rope.insert(char_offset, s);
        self.cursor = self.char_to_pos(char_offset + s.chars().count());
    }

    pub fn insert_newline(&mut self) {
        self.insert_char('\n');
    }

    /// Backspace. Returns false when there was nothing to delete.
    pub fn delete_backward(&mut self) -> bool {
        let (row, col) = self.cursor;

        if col > 0 {
            let start = self.pos_to_char((row, col - 1));
            let end = self.pos_to_char((row, col));
            self.rope.remove(start..end);
            self.cursor = (row, col - 1);
            true
        } else if row > 0 {
            let prev_len = self.line_grapheme_len(row - 1);
            let end = self.rope.line_to_char(row);
            let start = end - self.line_ending_len(row - 1);
            self.rope.remove(start..end);
            self.cursor = (row - 1, prev_len);
            true
        } else {
            false
        }
    }

    /// Delete. The cursor does not move.
    pub fn delete_forward(&mut self) -> bool {
        let (row, col) = self.cursor;

        if col < self.line_grapheme_len(row) {
            let start = self.pos_to_char((row, col));
            let end = self.pos_to_char((row, col + 1));
            self.rope.remove(start..end);
            true
        } else if row + 1 < self.len_lines() {
            let start = self.pos_to_char((row, col));
            let end = start + self.line_ending_len(row);
            self.rope.remove(start..end);
            true
        } else {
            false
        }
    }

    fn line_ending_len(&self, row: usize) -> usize {
        let line = self.rope.line(row);
        let len = line.len_chars();
        if len >= 2 && line.char(len - 2) == '\r' && line.char(len - 1) == '\n' {
            2
        } else if len >= 1 && is_line_break(line.char(len - 1)) {
            1
        } else {
            0
        }
    }

    // ==================== Cursor ====================

    pub fn move_left(&mut self) -> bool {
        let (row, col) = self.cursor;
        if col > 0 {
            self.cursor = (row, col - 1);
        } else if row > 0 {
            self.cursor = (row - 1, self.line_grapheme_len(row - 1));
        } else {
            return false;
        }
        true
    }

    pub fn move_right(&mut self) -> bool {
        let (row, col) = self.cursor;
        if col < self.line_grapheme_len(row) {
            self.cursor = (row, col + 1);
        } else if row + 1 < self.len_lines() {
            self.cursor = (row + 1, 0);
        } else {
            return false;
        }
        true
    }

    /// Moves by `delta` rows, clamping the column to the target line.
    pub fn move_lines(&mut self, delta: isize) -> bool {
        let (row, col) = self.cursor;
        let last = self.len_lines().saturating_sub(1);
        let target = if delta < 0 {
            row.saturating_sub(delta.unsigned_abs())
        } else {
            row.saturating_add(delta as usize).min(last)
        };
        if target == row {
            return false;
        }
        self.cursor = (target, col.min(self.line_grapheme_len(target)));
        true
    }

    pub fn move_line_start(&mut self) -> bool {
        let prev = self.cursor;
        self.cursor.1 = 0;
        prev != self.cursor
    }

    pub fn move_line_end(&mut self) -> bool {
        let prev = self.cursor;
        self.cursor.1 = self.line_grapheme_len(self.cursor.0);
        prev != self.cursor
    }

    pub fn move_file_start(&mut self) -> bool {
        let prev = self.cursor;
        self.cursor = (0, 0);
        prev != self.cursor
    }

    pub fn move_file_end(&mut self) -> bool {
        let prev = self.cursor;
        let last = self.len_lines().saturating_sub(1);
        self.cursor = (last, self.line_grapheme_len(last));
        prev != self.cursor
    }
}

impl Default for TextBuffer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/models/text_buffer.rs"]
mod tests;
