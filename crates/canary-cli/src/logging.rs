// Rust guideline compliant 2026-10-19

//! Tracing setup for the canary CLI.

use canary_app::AppError;
use std::fs::OpenOptions;
use std::path::Path;
use tracing::Level;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::fmt;

/// Parses a log level name.
///
/// # Errors
///
/// Returns an error if the level is not one of error, warn, info, debug, trace.
pub fn parse_log_level(level: &str) -> Result<Level, AppError> {
    match level.to_lowercase().as_str() {
        "error" => Ok(Level::ERROR),
        "warn" => Ok(Level::WARN),
        "info" => Ok(Level::INFO),
        "debug" => Ok(Level::DEBUG),
        "trace" => Ok(Level::TRACE),
        other => Err(AppError::InvalidInput(format!("Invalid log level: {}", other))),
    }
}

/// Installs a JSON tracing subscriber.
///
/// Logs go to `log_file` through a non-blocking writer when given, otherwise
/// to stderr so stdout stays reserved for command output. The returned guard
/// must be held until exit to flush file logs.
///
/// # Errors
///
/// Returns an error if the level is invalid or the log file cannot be opened.
pub fn init_tracing(
    level: &str,
    log_file: Option<&Path>,
) -> Result<Option<WorkerGuard>, AppError> {
    let level = parse_log_level(level)?;

    if let Some(path) = log_file {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        let (writer, guard) = tracing_appender::non_blocking(file);
        let subscriber = fmt()
            .with_max_level(level)
            .with_target(false)
            .json()
            .with_writer(writer)
            .finish();
        let _ = tracing::subscriber::set_global_default(subscriber);
        return Ok(Some(guard));
    }

    let subscriber = fmt()
        .with_max_level(level)
        .with_target(false)
        .json()
        .with_writer(std::io::stderr)
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
    Ok(None)
}
