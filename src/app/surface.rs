use super::events::EventSource;
use super::render::render;
use crate::core::event::{Event, KeyEventKind};
use crate::kernel::services::ports::{Notification, PathPurpose, SessionSurface};
use crate::views::{EditorView, PathPrompt, PromptOutcome};
use ratatui::backend::Backend;
use ratatui::Terminal;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

const PROMPT_POLL: Duration = Duration::from_millis(250);

/// Terminal-backed UI collaborator for one session operation.
///
/// Path selection runs a nested event loop over a [`PathPrompt`]. A terminal
/// failure during that loop counts as "no selection" and is kept in `error`
/// so the caller can surface it after the operation returns.
pub struct TuiSurface<'a, B: Backend, E: EventSource> {
    view: &'a mut EditorView,
    terminal: &'a mut Terminal<B>,
    events: &'a mut E,
    base_dir: &'a Path,
    error: Option<io::Error>,
}

impl<'a, B: Backend, E: EventSource> TuiSurface<'a, B, E> {
    pub fn new(
        view: &'a mut EditorView,
        terminal: &'a mut Terminal<B>,
        events: &'a mut E,
        base_dir: &'a Path,
    ) -> Self {
        Self {
            view,
            terminal,
            events,
            base_dir,
            error: None,
        }
    }

    pub fn finish(self) -> io::Result<()> {
        match self.error {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    fn run_prompt(&mut self, purpose: PathPurpose) -> io::Result<Option<PathBuf>> {
        let mut prompt = PathPrompt::new(purpose, self.base_dir);
        loop {
            let view = &mut *self.view;
            self.terminal.draw(|frame| render(frame, view, Some(&prompt)))?;

            let Some(event) = self.events.next_event(PROMPT_POLL)? else {
                continue;
            };
            match event {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    match prompt.handle_key(&key) {
                        PromptOutcome::Pending => {}
                        PromptOutcome::Accepted(path) => return Ok(Some(path)),
                        PromptOutcome::Cancelled => return Ok(None),
                    }
                }
                Event::Resize(_, _) => {
                    self.terminal.autoresize()?;
                }
                _ => {}
            }
        }
    }
}

impl<B: Backend, E: EventSource> SessionSurface for TuiSurface<'_, B, E> {
    fn pick_path(&mut self, purpose: PathPurpose) -> Option<PathBuf> {
        match self.run_prompt(purpose) {
            Ok(path) => path,
            Err(err) => {
                tracing::error!(error = %err, ?purpose, "path prompt failed");
                self.error = Some(err);
                None
            }
        }
    }

    fn buffer_text(&self) -> String {
        self.view.buffer().text()
    }

    fn set_buffer_text(&mut self, text: &str) {
        self.view.load_text(text);
    }

    fn set_title(&mut self, title: &str) {
        self.view.set_title(title);
    }

    fn show_recent_files(&mut self, files: &[PathBuf]) {
        self.view.recents_mut().set_entries(files);
    }

    fn notify(&mut self, notification: Notification) {
        self.view.set_notification(notification);
    }
}
