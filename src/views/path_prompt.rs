//! Single-line path input, standing in for a file dialog.

use crate::core::event::{text_input, KeyCode, KeyEvent};
use crate::kernel::services::ports::PathPurpose;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptOutcome {
    Pending,
    Accepted(PathBuf),
    Cancelled,
}

#[derive(Debug, Clone)]
pub struct PathPrompt {
    purpose: PathPurpose,
    base_dir: PathBuf,
    value: String,
    /// Byte offset into `value`.
    cursor: usize,
}

impl PathPrompt {
    pub fn new(purpose: PathPurpose, base_dir: &Path) -> Self {
        Self {
            purpose,
            base_dir: base_dir.to_path_buf(),
            value: String::new(),
            cursor: 0,
        }
    }

    pub fn purpose(&self) -> PathPurpose {
        self.purpose
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn handle_key(&mut self, event: &KeyEvent) -> PromptOutcome {
        if let Some(ch) = text_input(event) {
            self.value.insert(self.cursor, ch);
            self.cursor += ch.len_utf8();
            return PromptOutcome::Pending;
        }

        match event.code {
            KeyCode::Enter => self.accept(),
            KeyCode::Esc => PromptOutcome::Cancelled,
            KeyCode::Backspace => {
                if let Some(prev) = self.prev_boundary() {
                    self.value.drain(prev..self.cursor);
                    self.cursor = prev;
                }
                PromptOutcome::Pending
            }
            KeyCode::Delete => {
                if let Some(next) = self.next_boundary() {
                    self.value.drain(self.cursor..next);
                }
                PromptOutcome::Pending
            }
            KeyCode::Left => {
                if let Some(prev) = self.prev_boundary() {
                    self.cursor = prev;
                }
                PromptOutcome::Pending
            }
            KeyCode::Right => {
                if let Some(next) = self.next_boundary() {
                    self.cursor = next;
                }
                PromptOutcome::Pending
            }
            KeyCode::Home => {
                self.cursor = 0;
                PromptOutcome::Pending
            }
            KeyCode::End => {
                self.cursor = self.value.len();
                PromptOutcome::Pending
            }
            _ => PromptOutcome::Pending,
        }
    }

    /// Blank input counts as "no selection"; relative input resolves against `base_dir`.
    fn accept(&self) -> PromptOutcome {
        let value = self.value.trim();
        if value.is_empty() {
            return PromptOutcome::Cancelled;
        }
        let path = Path::new(value);
        if path.is_absolute() {
            PromptOutcome::Accepted(path.to_path_buf())
        } else {
            PromptOutcome::Accepted(self.base_dir.join(path))
        }
    }

    fn prev_boundary(&self) -> Option<usize> {
        self.value[..self.cursor].char_indices().last().map(|(i, _)| i)
    }

    fn next_boundary(&self) -> Option<usize> {
        self.value[self.cursor..]
            .chars()
            .next()
            .map(|ch| self.cursor + ch.len_utf8())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/views/path_prompt.rs"]
mod tests;
