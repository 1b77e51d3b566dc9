//! Logging system initialization
//!
//! Sets up the tracing subscriber for server mode. CLI mode stays silent
//! and prints its own diagnostics.

use crate::config::Config;
use tracing_appender::non_blocking::WorkerGuard;

/// Initialize the tracing subscriber from configuration.
///
/// Call once during server startup, after the configuration has been
/// loaded. The returned guard must be kept alive for the duration of the
/// program so non-blocking log writes are flushed.
pub fn init_logging(config: &Config) -> WorkerGuard {
    let writer: Box<dyn std::io::Write + Send + Sync> = match config.log_file.as_deref() {
        Some(log_file) => {
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(log_file)
                .expect("Failed to open log file");
            Box::new(file)
        }
        None => Box::new(std::io::stdout()),
    };

    let (non_blocking_writer, guard) = tracing_appender::non_blocking(writer);
    let filter = tracing_subscriber::EnvFilter::new(config.log_level.clone());

    tracing_subscriber::fmt()
        .with_writer(non_blocking_writer)
        .with_env_filter(filter)
        .with_level(true)
        .with_ansi(config.log_file.is_none())
        .init();

    guard
}
