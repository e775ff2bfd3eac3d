use anyhow::Context;
use quill::app::{CrosstermEvents, ExitReason, Workbench};
use quill::kernel::services::adapters::{load_settings, LocalStorage};
use quill::kernel::FileSession;
use quill::models::FontStyle;
use quill::tui::TerminalGuard;
use quill::views::EditorView;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::path::{Path, PathBuf};

mod logging;

/// The optional positional argument, resolved against `cwd`.
fn resolve_startup_path(cwd: &Path, arg: Option<&str>) -> Option<PathBuf> {
    let arg = arg.map(str::trim).filter(|arg| !arg.is_empty())?;
    let path = Path::new(arg);
    if path.is_absolute() {
        Some(path.to_path_buf())
    } else {
        Some(cwd.join(path))
    }
}

fn main() -> anyhow::Result<()> {
    let logging = logging::init();
    if let Some(guard) = &logging {
        tracing::debug!(log_dir = %guard.log_dir().display(), "logging ready");
    }

    let cwd = std::env::current_dir().context("cannot determine working directory")?;
    let arg = std::env::args().nth(1);
    let startup_path = resolve_startup_path(&cwd, arg.as_deref());

    let settings = load_settings();
    tracing::info!(
        recent_capacity = settings.recent_capacity,
        startup = ?startup_path,
        "starting quill"
    );

    let guard = TerminalGuard::new().context("failed to set up terminal")?;
    let restorer = guard.restorer();

    let (shutdown_tx, shutdown_rx) = std::sync::mpsc::channel();
    #[cfg(unix)]
    quill::tui::install_termination_signals(restorer.clone(), shutdown_tx)
        .context("failed to install signal handlers")?;
    #[cfg(not(unix))]
    drop(shutdown_tx);

    let terminal = Terminal::new(CrosstermBackend::new(std::io::stdout()))
        .context("failed to create terminal")?;
    let session = FileSession::new(LocalStorage, settings.recent_capacity);
    let view = EditorView::new(FontStyle::new(settings.font.families, settings.font.size));

    let mut workbench = Workbench::new(session, view, terminal, CrosstermEvents, &cwd)
        .with_shutdown(shutdown_rx)
        .with_restorer(restorer);

    if let Some(path) = startup_path {
        workbench
            .open_initial(&path)
            .context("failed to open startup file")?;
    }

    let reason = workbench.run().context("editor loop failed")?;
    drop(workbench);
    drop(guard);

    tracing::info!(?reason, "quill exited");
    if let ExitReason::Signal(signal) = reason {
        std::process::exit(signal.exit_code());
    }
    Ok(())
}

#[cfg(test)]
#[path = "../tests/unit/cli_startup_paths.rs"]
mod cli_startup_paths_tests;
