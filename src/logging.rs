//! Tracing setup.
//!
//! The TUI owns the terminal, so events go to a log file in the data
//! directory. Plain-text runs may also mirror them to stderr.

use std::fs::OpenOptions;
use std::io;
use std::path::Path;

use color_eyre::{Result, eyre::WrapErr};
use tracing_appender::non_blocking::{self, WorkerGuard};
use tracing_subscriber::{
    EnvFilter,
    filter::LevelFilter,
    fmt,
    fmt::writer::{BoxMakeWriter, MakeWriterExt},
};

use crate::state::platform::AppPaths;

/// Keeps the background log writer alive; flushes when dropped.
pub struct LoggingHandles {
    _guard: Option<WorkerGuard>,
}

/// Installs the global subscriber.
///
/// `RUST_LOG` takes precedence over `level`. When the log file cannot be
/// opened, events go to stderr if `console` is set and are dropped otherwise.
///
/// # Errors
///
/// Returns an error if `level` is not a valid filter directive.
pub fn init_tracing(level: &str, console: bool) -> Result<LoggingHandles> {
    let env_filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => filter_from_level(level)?,
    };

    let file_writer = match AppPaths::new()
        .log_file()
        .and_then(|path| create_file_writer(&path))
    {
        Ok(writer) => Some(writer),
        Err(e) => {
            if console {
                eprintln!("lazysui: file logging disabled: {e}");
            }
            None
        }
    };

    let (writer, guard) = match (file_writer, console) {
        (Some((file, guard)), true) => (BoxMakeWriter::new(io::stderr.and(file)), Some(guard)),
        (Some((file, guard)), false) => (BoxMakeWriter::new(file), Some(guard)),
        (None, true) => (BoxMakeWriter::new(io::stderr), None),
        (None, false) => (BoxMakeWriter::new(io::sink), None),
    };

    let _ = fmt()
        .with_env_filter(env_filter)
        .with_writer(writer)
        .with_ansi(false)
        .try_init();

    Ok(LoggingHandles { _guard: guard })
}

/// Builds the filter for a `--log-level` / config value.
///
/// A bare level also applies to this crate's own targets; anything else is
/// taken as a full directive list such as `warn,lazysui=debug`.
fn filter_from_level(level: &str) -> Result<EnvFilter> {
    let trimmed = level.trim();
    let directives = if trimmed.parse::<LevelFilter>().is_ok() {
        format!("{trimmed},lazysui={trimmed}")
    } else {
        trimmed.to_string()
    };
    EnvFilter::try_new(directives).wrap_err_with(|| format!("invalid log level '{level}'"))
}

fn create_file_writer(path: &Path) -> Result<(non_blocking::NonBlocking, WorkerGuard)> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .wrap_err_with(|| format!("failed to open log file {}", path.display()))?;
    Ok(tracing_appender::non_blocking(file))
}
