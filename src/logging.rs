//! Subscriber setup for the binary.

use std::path::Path;
use tracing::debug;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::EnvFilter;

use crate::error::{DashboardError, Result};

/// Install the global `tracing` subscriber.
///
/// `RUST_LOG` wins when set; otherwise `debug` with `verbose`, else `info`.
/// Output goes to stderr, or is appended to `log_file` through a non-blocking
/// writer. The returned guard flushes that writer on drop and must be held
/// until the program exits.
pub fn init_logging(verbose: bool, log_file: Option<&Path>) -> Result<Option<WorkerGuard>> {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false);

    // A subscriber may already be installed (tests, embedding); keep it
    match log_file {
        Some(path) => {
            let file_appender = file_appender(path)?;
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

            if let Err(e) = builder
                .with_ansi(false)
                .with_writer(non_blocking)
                .try_init()
            {
                debug!(
                    "Keeping existing subscriber, not logging to {}: {}",
                    path.display(),
                    e
                );
            }
            Ok(Some(guard))
        }
        None => {
            if let Err(e) = builder.with_writer(std::io::stderr).try_init() {
                debug!("Keeping existing subscriber: {}", e);
            }
            Ok(None)
        }
    }
}

/// Single, never-rotated log file at exactly `path`, opened for append
fn file_appender(path: &Path) -> Result<RollingFileAppender> {
    let file_name = path
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| {
            DashboardError::InvalidFormat(format!("Invalid log file path: {}", path.display()))
        })?;

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(dir)?;

    let appender = RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(file_name)
        .build(dir)?;

    Ok(appender)
}
