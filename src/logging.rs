//! File logging for the `quill` binary.
//!
//! The editor owns the terminal, so nothing is written to stderr. Events go to
//! a daily `quill.log` under the platform log directory. `RUST_LOG` overrides
//! the default `quill=info` filter.

use std::io;
use std::path::{Path, PathBuf};

use quill::kernel::services::adapters::ensure_log_dir;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::fmt;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

const LOG_FILE: &str = "quill.log";
const DEFAULT_FILTER: &str = "quill=info";

/// Keeps the background writer alive; dropping it flushes pending lines.
pub struct LoggingGuard {
    _worker: WorkerGuard,
    log_dir: PathBuf,
}

impl LoggingGuard {
    pub fn log_dir(&self) -> &Path {
        &self.log_dir
    }
}

/// Installs the global subscriber. Returns `None` when no log directory can
/// be created or a subscriber is already set; the editor runs without logs.
pub fn init() -> Option<LoggingGuard> {
    let log_dir = resolve_log_dir().ok()?;

    let (writer, worker) =
        tracing_appender::non_blocking(tracing_appender::rolling::daily(&log_dir, LOG_FILE));
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let file_layer = fmt::layer()
        .with_writer(writer)
        .with_ansi(false)
        .with_file(true)
        .with_line_number(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .try_init()
        .ok()?;

    std::panic::set_hook(Box::new(|info| {
        tracing::error!(panic = %info, "quill panicked");
    }));
    tracing::info!(
        log_dir = %log_dir.display(),
        version = env!("CARGO_PKG_VERSION"),
        "logging initialized"
    );

    Some(LoggingGuard {
        _worker: worker,
        log_dir,
    })
}

/// Platform log dir, or `<tmp>/quill/logs` if that cannot be created.
fn resolve_log_dir() -> io::Result<PathBuf> {
    ensure_log_dir().or_else(|_| {
        let fallback = std::env::temp_dir().join("quill").join("logs");
        std::fs::create_dir_all(&fallback)?;
        Ok(fallback)
    })
}
