//! Terminal lifetime for the editor.
//!
//! `TerminalGuard` puts the terminal into raw mode on the alternate screen and
//! puts it back when dropped. `TerminalRestorer` is a cloneable handle to the
//! same teardown, shared with the signal watcher and the workbench (which also
//! uses it to keep the window title in sync with the open file).

use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// How long the signal watcher waits for the main loop before forcing an exit.
#[cfg(unix)]
const SIGNAL_GRACE: std::time::Duration = std::time::Duration::from_secs(2);

pub trait TerminalOps: Send + Sync + 'static {
    fn setup(&self) -> io::Result<()>;
    fn restore(&self) -> io::Result<()>;
    fn set_title(&self, title: &str) -> io::Result<()>;
}

#[derive(Debug, Default)]
pub struct CrosstermTerminalOps;

impl TerminalOps for CrosstermTerminalOps {
    fn setup(&self) -> io::Result<()> {
        use crossterm::cursor::SetCursorStyle;
        use crossterm::event::EnableBracketedPaste;
        use crossterm::terminal::{enable_raw_mode, EnterAlternateScreen};

        enable_raw_mode()?;
        crossterm::execute!(
            io::stdout(),
            EnterAlternateScreen,
            EnableBracketedPaste,
            SetCursorStyle::BlinkingBar
        )
    }

    fn restore(&self) -> io::Result<()> {
        use crossterm::cursor::SetCursorStyle;
        use crossterm::event::DisableBracketedPaste;
        use crossterm::terminal::{disable_raw_mode, LeaveAlternateScreen};

        // Both steps run; the first failure is reported.
        let raw = disable_raw_mode();
        let screen = crossterm::execute!(
            io::stdout(),
            DisableBracketedPaste,
            LeaveAlternateScreen,
            SetCursorStyle::DefaultUserShape
        );
        raw.and(screen)
    }

    fn set_title(&self, title: &str) -> io::Result<()> {
        crossterm::execute!(io::stdout(), crossterm::terminal::SetTitle(title))
    }
}

#[derive(Clone)]
pub struct TerminalRestorer {
    restored: Arc<AtomicBool>,
    ops: Arc<dyn TerminalOps>,
}

impl TerminalRestorer {
    /// Restores the terminal once; later calls do nothing.
    pub fn restore(&self) -> io::Result<()> {
        if self.restored.swap(true, Ordering::SeqCst) {
            return Ok(());
        }
        self.ops.restore()
    }

    /// Ignored once the terminal has been handed back.
    pub fn set_title(&self, title: &str) -> io::Result<()> {
        if self.restored.load(Ordering::SeqCst) {
            return Ok(());
        }
        self.ops.set_title(title)
    }
}

pub struct TerminalGuard {
    restorer: TerminalRestorer,
}

impl TerminalGuard {
    pub fn new() -> io::Result<Self> {
        Self::with_ops(Arc::new(CrosstermTerminalOps))
    }

    pub fn with_ops(ops: Arc<dyn TerminalOps>) -> io::Result<Self> {
        ops.setup()?;
        let restorer = TerminalRestorer {
            restored: Arc::new(AtomicBool::new(false)),
            ops,
        };
        Ok(Self { restorer })
    }

    pub fn restorer(&self) -> TerminalRestorer {
        self.restorer.clone()
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if let Err(err) = self.restorer.restore() {
            tracing::warn!(error = %err, "failed to restore terminal");
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminationSignal {
    SigInt,
    SigTerm,
}

impl TerminationSignal {
    /// 128 + signal number.
    pub fn exit_code(self) -> i32 {
        match self {
            TerminationSignal::SigInt => 130,
            TerminationSignal::SigTerm => 143,
        }
    }
}

/// Spawns a watcher that reports SIGINT/SIGTERM on `tx`.
///
/// The main loop is expected to notice and quit. If it is still running after
/// `SIGNAL_GRACE`, the watcher restores the terminal and exits the process.
#[cfg(unix)]
pub fn install_termination_signals(
    restorer: TerminalRestorer,
    tx: std::sync::mpsc::Sender<TerminationSignal>,
) -> io::Result<std::thread::JoinHandle<()>> {
    use signal_hook::consts::signal::{SIGINT, SIGTERM};
    use signal_hook::iterator::Signals;

    let mut signals = Signals::new([SIGINT, SIGTERM])?;
    let handle = std::thread::Builder::new()
        .name("quill-signals".to_string())
        .spawn(move || {
            let Some(signal) = signals.forever().find_map(|raw| match raw {
                SIGINT => Some(TerminationSignal::SigInt),
                SIGTERM => Some(TerminationSignal::SigTerm),
                _ => None,
            }) else {
                return;
            };

            tracing::info!(?signal, "termination signal received");
            if tx.send(signal).is_err() {
                tracing::debug!("main loop already gone");
            }

            std::thread::sleep(SIGNAL_GRACE);
            tracing::warn!(?signal, "main loop did not exit in time, forcing exit");
            let _ = restorer.restore();
            std::process::exit(signal.exit_code());
        })?;
    Ok(handle)
}

#[cfg(test)]
#[path = "../../tests/unit/tui/terminal_guard.rs"]
mod tests;
