//! Logging system initialization
//!
//! While the TUI owns the terminal, nothing may be written to stdout or
//! stderr, so log output goes to a file when one is configured and is
//! discarded otherwise.

use std::io;
use std::path::Path;

use tracing_subscriber::EnvFilter;

/// Initialize the tracing subscriber.
///
/// **Note**: This should be called only once during application startup,
/// before the terminal is put into raw mode.
///
/// # Arguments
/// * `log_file` - Optional log file path; `None` discards all output
/// * `level` - Filter directive string (e.g. "info", "linkboard=debug")
///
/// # Returns
/// * `WorkerGuard` - Must be kept alive for the duration of the program
///   to ensure non-blocking log writes are flushed
///
/// # Panics
/// * If the log file cannot be opened
/// * If setting the global subscriber fails (e.g., already initialized)
pub fn init_logging(
    log_file: Option<&Path>,
    level: &str,
) -> tracing_appender::non_blocking::WorkerGuard {
    let writer: Box<dyn io::Write + Send + Sync> = match log_file {
        Some(path) => {
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .expect("Failed to open log file");
            Box::new(file)
        }
        None => Box::new(io::sink()),
    };

    let (non_blocking_writer, guard) = tracing_appender::non_blocking(writer);
    let filter = EnvFilter::new(level);

    tracing_subscriber::fmt()
        .with_writer(non_blocking_writer)
        .with_env_filter(filter)
        .with_level(true)
        .with_ansi(false)
        .init();

    guard
}
