//! Workbench: owns the session, the view and the terminal, and routes input.

use super::events::EventSource;
use super::render::render;
use super::surface::TuiSurface;
use crate::core::event::{text_input, Event, Key, KeyEvent, KeyEventKind};
use crate::core::Command;
use crate::kernel::services::adapters::{KeybindingContext, KeybindingService};
use crate::kernel::services::ports::Storage;
use crate::kernel::session::{window_title, FileSession, Outcome};
use crate::tui::{TerminalRestorer, TerminationSignal};
use crate::views::EditorView;
use ratatui::backend::Backend;
use ratatui::Terminal;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::mpsc::{Receiver, TryRecvError};
use std::time::Duration;

const POLL_INTERVAL: Duration = Duration::from_millis(250);

/// How the main loop ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitReason {
    Quit,
    Signal(TerminationSignal),
}

pub struct Workbench<S: Storage, B: Backend, E: EventSource> {
    session: FileSession<S>,
    view: EditorView,
    keybindings: KeybindingService,
    terminal: Terminal<B>,
    events: E,
    base_dir: PathBuf,
    shutdown: Option<Receiver<TerminationSignal>>,
    restorer: Option<TerminalRestorer>,
    last_title: Option<String>,
    should_quit: bool,
}

impl<S: Storage, B: Backend, E: EventSource> Workbench<S, B, E> {
    pub fn new(
        session: FileSession<S>,
        mut view: EditorView,
        terminal: Terminal<B>,
        events: E,
        base_dir: &Path,
    ) -> Self {
        view.set_title(&window_title(session.current_path()));
        view.recents_mut().set_entries(&session.recent_files().list());
        Self {
            session,
            view,
            keybindings: KeybindingService::with_defaults(),
            terminal,
            events,
            base_dir: base_dir.to_path_buf(),
            shutdown: None,
            restorer: None,
            last_title: None,
            should_quit: false,
        }
    }

    pub fn with_shutdown(mut self, shutdown: Receiver<TerminationSignal>) -> Self {
        self.shutdown = Some(shutdown);
        self
    }

    /// Mirrors title changes into the host terminal window.
    pub fn with_restorer(mut self, restorer: TerminalRestorer) -> Self {
        self.restorer = Some(restorer);
        self
    }

    pub fn session(&self) -> &FileSession<S> {
        &self.session
    }

    pub fn view(&self) -> &EditorView {
        &self.view
    }

    pub fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn open_initial(&mut self, path: &Path) -> io::Result<Outcome> {
        let mut surface = TuiSurface::new(
            &mut self.view,
            &mut self.terminal,
            &mut self.events,
            &self.base_dir,
        );
        let outcome = self.session.open_initial(path, &mut surface);
        surface.finish()?;
        Ok(outcome)
    }

    pub fn run(&mut self) -> io::Result<ExitReason> {
        while !self.should_quit {
            if let Some(signal) = self.poll_shutdown() {
                tracing::info!(?signal, "shutting down on signal");
                return Ok(ExitReason::Signal(signal));
            }

            self.draw()?;

            let Some(event) = self.events.next_event(POLL_INTERVAL)? else {
                continue;
            };
            self.handle_event(event)?;
        }
        Ok(ExitReason::Quit)
    }

    pub fn draw(&mut self) -> io::Result<()> {
        self.sync_title();
        let view = &mut self.view;
        self.terminal.draw(|frame| render(frame, view, None))?;
        Ok(())
    }

    pub fn handle_event(&mut self, event: Event) -> io::Result<()> {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key(&key),
            Event::Paste(text) => {
                if !self.view.recents().is_visible() {
                    self.view.buffer_mut().insert_str(&text);
                }
                Ok(())
            }
            Event::Resize(_, _) => {
                self.terminal.autoresize()?;
                Ok(())
            }
            _ => Ok(()),
        }
    }

    pub fn handle_key(&mut self, event: &KeyEvent) -> io::Result<()> {
        self.view.clear_notification();

        let context = if self.view.recents().is_visible() {
            KeybindingContext::RecentsMenu
        } else {
            KeybindingContext::Editor
        };
        let key = Key::from(*event);
        if let Some(command) = self.keybindings.resolve(context, &key).cloned() {
            return self.dispatch(command);
        }

        if context == KeybindingContext::Editor {
            if let Some(ch) = text_input(event) {
                self.view.apply(&Command::InsertChar(ch));
            }
        }
        Ok(())
    }

    pub fn dispatch(&mut self, command: Command) -> io::Result<()> {
        tracing::debug!(command = command.name(), "dispatch");
        match command {
            command if command.is_file_command() => self.run_file_command(&command),
            Command::ToggleRecents => {
                self.view.recents_mut().toggle();
                Ok(())
            }
            Command::RecentsUp => {
                self.view.recents_mut().move_selection(-1);
                Ok(())
            }
            Command::RecentsDown => {
                self.view.recents_mut().move_selection(1);
                Ok(())
            }
            Command::RecentsAccept => {
                let selected = self.view.recents().selected_index();
                self.view.recents_mut().close();
                match selected {
                    Some(index) => self.run_file_command(&Command::OpenRecent(index)),
                    None => Ok(()),
                }
            }
            Command::Quit => {
                self.should_quit = true;
                Ok(())
            }
            other => {
                self.view.apply(&other);
                Ok(())
            }
        }
    }

    fn run_file_command(&mut self, command: &Command) -> io::Result<()> {
        let mut surface = TuiSurface::new(
            &mut self.view,
            &mut self.terminal,
            &mut self.events,
            &self.base_dir,
        );
        let outcome = match command {
            Command::NewFile => self.session.new_file(&mut surface),
            Command::OpenFile => self.session.prompt_open(&mut surface),
            Command::Save => self.session.save_file(&mut surface),
            Command::SaveAs => self.session.save_as_file(&mut surface),
            Command::OpenRecent(index) => self.session.open_recent(*index, &mut surface),
            _ => Outcome::Cancelled,
        };
        surface.finish()?;
        tracing::debug!(command = command.name(), ?outcome, "file command finished");
        Ok(())
    }

    fn poll_shutdown(&mut self) -> Option<TerminationSignal> {
        let rx = self.shutdown.as_ref()?;
        match rx.try_recv() {
            Ok(signal) => Some(signal),
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => {
                self.shutdown = None;
                None
            }
        }
    }

    fn sync_title(&mut self) {
        if self.last_title.as_deref() == Some(self.view.title()) {
            return;
        }
        let title = self.view.title().to_string();
        if let Some(restorer) = &self.restorer {
            if let Err(err) = restorer.set_title(&title) {
                tracing::warn!(error = %err, "failed to set terminal title");
            }
        }
        self.last_title = Some(title);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/app/workbench.rs"]
mod tests;
