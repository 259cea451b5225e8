//! Logging setup for the bot binary.
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// File name of the log inside the log directory.
pub const LOG_FILE: &str = "hkdle.log";

/// Setup logging to both stderr and file.
///
/// Keep the returned guard alive for the lifetime of the process; dropping it
/// flushes and closes the file writer.
pub fn setup_logging(log_dir: Option<&Path>) -> Result<WorkerGuard> {
    let log_dir = log_dir.map_or_else(default_log_dir, Path::to_path_buf);
    std::fs::create_dir_all(&log_dir)
        .with_context(|| format!("Failed to create log directory {}", log_dir.display()))?;

    // Setup file appender
    let file_appender = tracing_appender::rolling::never(&log_dir, LOG_FILE);
    let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

    // RUST_LOG wins; plain `info` otherwise.
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false);

    // stdout carries replies; logs go to stderr.
    let stderr_layer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .with(stderr_layer)
        .try_init()
        .context("Failed to install tracing subscriber")?;

    tracing::info!("Log file: {}", log_dir.join(LOG_FILE).display());

    Ok(guard)
}

/// Get the platform-specific log directory
///
/// Follows platform conventions:
/// - macOS: `~/Library/Caches/hkdle/logs`
/// - Linux: `~/.cache/hkdle/logs` (or `$XDG_CACHE_HOME/hkdle/logs`)
/// - Windows: `%LOCALAPPDATA%\hkdle\logs`
/// - Fallback: `/tmp/hkdle/logs`
pub fn default_log_dir() -> PathBuf {
    directories::ProjectDirs::from("", "", "hkdle")
        .map(|dirs| dirs.cache_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("/tmp/hkdle"))
        .join("logs")
}
