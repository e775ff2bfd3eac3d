use crate::kernel::services::ports::surface::recent_label;
use std::path::{Path, PathBuf};

/// Popup listing recent files; entries mirror the session's recent list.
#[derive(Debug, Default)]
pub struct RecentsMenu {
    entries: Vec<PathBuf>,
    visible: bool,
    selected: usize,
}

impl RecentsMenu {
    pub fn set_entries(&mut self, entries: &[PathBuf]) {
        self.entries = entries.to_vec();
        self.selected = 0;
    }

    pub fn entries(&self) -> &[PathBuf] {
        &self.entries
    }

    pub fn labels(&self) -> Vec<String> {
        self.entries.iter().map(|p| recent_label(p)).collect()
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn toggle(&mut self) {
        self.visible = !self.visible;
        self.selected = 0;
    }

    pub fn close(&mut self) {
        self.visible = false;
    }

    pub fn move_selection(&mut self, delta: isize) -> bool {
        if self.entries.is_empty() {
            return false;
        }
        let last = self.entries.len() - 1;
        let next = if delta < 0 {
            self.selected.saturating_sub(delta.unsigned_abs())
        } else {
            self.selected.saturating_add(delta as usize).min(last)
        };
        let changed = next != self.selected;
        self.selected = next;
        changed
    }

    pub fn selected_index(&self) -> Option<usize> {
        (self.selected < self.entries.len()).then_some(self.selected)
    }

    pub fn selected_path(&self) -> Option<&Path> {
        self.entries.get(self.selected).map(PathBuf::as_path)
    }
}
