//! Tracing setup.
//!
//! `RUST_LOG` wins when set; otherwise the configured filter applies.
//! The TUI owns the terminal, so it logs to a file. Batch commands log
//! to stderr.

use std::ffi::OsStr;
use std::fs;
use std::io;
use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

fn filter(fallback: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback))
}

/// Log to `path`, appending. Keep the guard alive until exit or buffered
/// lines are lost.
pub fn init_file(path: &Path, fallback: &str) -> io::Result<Option<WorkerGuard>> {
    let dir = path.parent().unwrap_or_else(|| Path::new("."));
    fs::create_dir_all(dir)?;
    let name = path.file_name().unwrap_or_else(|| OsStr::new("tally.log"));

    let appender = tracing_appender::rolling::never(dir, name);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter(fallback))
        .with_ansi(false)
        .with_writer(writer)
        .try_init()
        .is_ok();

    // Another subscriber is already installed; drop the guard so the writer shuts down.
    Ok(installed.then_some(guard))
}

/// Log to stderr.
pub fn init_stderr(fallback: &str) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter(fallback))
        .with_target(false)
        .with_writer(io::stderr)
        .try_init();
}
