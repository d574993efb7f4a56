//! File logging setup.
//!
//! Logs go to a file rather than the terminal so the TUI screen and the
//! one-shot YAML output stay clean.

use std::ffi::OsStr;
use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};

const DEFAULT_LOG_FILE: &str = "lumenrig.log";

/// Initialize tracing with a non-blocking file writer.
///
/// The returned guard flushes buffered log lines when dropped; hold it for
/// the life of the process.
pub fn init_logging(log_path: Option<&Path>, level: &str) -> WorkerGuard {
    let log_path = log_path.unwrap_or(Path::new(DEFAULT_LOG_FILE));
    let dir = log_path.parent().unwrap_or(Path::new("."));
    let file = log_path
        .file_name()
        .unwrap_or(OsStr::new(DEFAULT_LOG_FILE));

    let (writer, guard) = tracing_appender::non_blocking(tracing_appender::rolling::never(dir, file));

    // Filter to this crate only; a bad level string falls back to info
    let filter = EnvFilter::try_new(format!("lumenrig={level}"))
        .unwrap_or_else(|_| EnvFilter::new("lumenrig=info"));

    let layer = fmt::layer().with_writer(writer).with_ansi(false);

    // Span enter/close events carry real overhead, debug builds only
    #[cfg(debug_assertions)]
    let layer = layer.with_span_events(fmt::format::FmtSpan::ENTER | fmt::format::FmtSpan::CLOSE);

    tracing_subscriber::registry().with(filter).with(layer).init();

    guard
}
