//! Logging infrastructure for geopin.
//!
//! Provides structured logging with file output and console output:
//! - Writes to `logs/geopin.log` (cleared on session start)
//! - Also prints to stderr so stdout stays clean for scripting
//! - Configurable via RUST_LOG environment variable

use std::fs;
use std::io;
use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Guard that must be kept alive for the duration of logging.
///
/// Dropping this guard will flush and close the log file writer.
pub struct LoggingGuard {
    _file_guard: WorkerGuard,
}

/// Initialize the logging system.
///
/// Creates the logs directory if needed, clears the previous log file, and
/// sets up dual output to both file and stderr. When `debug_mode` is set the
/// filter is forced to `debug` regardless of `RUST_LOG`.
///
/// # Errors
///
/// Returns an error if the log directory cannot be created or the log file
/// cannot be cleared.
pub fn init_logging(log_dir: &str, log_file: &str, debug_mode: bool) -> io::Result<LoggingGuard> {
    fs::create_dir_all(log_dir)?;

    // Clear the previous session's log file.
    let log_path = Path::new(log_dir).join(log_file);
    fs::write(&log_path, "")?;

    let file_appender = tracing_appender::rolling::never(log_dir, log_file);
    let (non_blocking_file, file_guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false);

    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_writer(io::stderr)
        .with_ansi(true);

    let env_filter = if debug_mode {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .with(stderr_layer)
        .init();

    Ok(LoggingGuard {
        _file_guard: file_guard,
    })
}

/// Default log directory path.
pub fn default_log_dir() -> &'static str {
    "logs"
}

/// Default log file name.
pub fn default_log_file() -> &'static str {
    "geopin.log"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_paths() {
        assert_eq!(default_log_dir(), "logs");
        assert_eq!(default_log_file(), "geopin.log");
    }

    #[test]
    fn test_creates_directory_and_clears_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let log_dir = dir.path().join("nested").join("logs");
        let log_dir_str = log_dir.to_str().unwrap();

        // Can't call init_logging twice in one process (global subscriber),
        // so exercise the file operations it performs.
        fs::create_dir_all(log_dir_str).expect("create log dir");
        let log_path = log_dir.join("geopin.log");
        fs::write(&log_path, "old session data").expect("seed log file");
        fs::write(&log_path, "").expect("clear log file");

        assert!(log_dir.exists());
        assert_eq!(fs::read_to_string(&log_path).unwrap(), "");
    }
}
