//! Logging Infrastructure
//!
//! Structured logging via `tracing`; stdout by default, a daily rolling file
//! when a log directory is configured and exists.

use std::path::Path;

use tracing_appender::rolling::RollingFileAppender;

const LOG_FILE_PREFIX: &str = "kiosk";

/// Initialize the logger
pub fn init_logger() {
    init_logger_with_file(None, None);
}

/// Initialize the logger with optional file output
///
/// Safe to call more than once; later calls are ignored.
pub fn init_logger_with_file(log_level: Option<&str>, log_dir: Option<&str>) {
    let level = log_level.unwrap_or("info");

    let subscriber = tracing_subscriber::fmt()
        .with_max_level(level.parse().unwrap_or(tracing::Level::INFO))
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_target(false);

    if let Some(appender) = log_dir.and_then(file_appender) {
        let _ = subscriber.with_ansi(false).with_writer(appender).try_init();
        return;
    }

    let _ = subscriber.try_init();
}

/// Daily rolling appender for an existing directory
pub fn file_appender(dir: &str) -> Option<RollingFileAppender> {
    let log_path = Path::new(dir);
    if !log_path.is_dir() {
        return None;
    }
    Some(tracing_appender::rolling::daily(log_path, LOG_FILE_PREFIX))
}
