//! Tracing setup.
//!
//! The terminal belongs to the dashboard, so tracing output goes to a
//! log file; `tail -f` it from another terminal. `RUST_LOG` picks the
//! level, defaulting to "info".

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Why logging could not be initialized.
#[derive(Debug, Error)]
pub enum LoggingError {
    /// The log directory could not be created.
    #[error("Cannot create log directory {path:?}: {source}")]
    CreateDir {
        /// Directory that failed.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The log path has no usable file name or parent directory.
    #[error("Unusable log path: {0:?}")]
    BadPath(PathBuf),

    /// A global subscriber is already installed.
    #[error("Tracing subscriber already initialized")]
    AlreadyInitialized,
}

/// Point tracing at `log_path`, creating the directory if needed.
pub fn init(log_path: &Path) -> Result<(), LoggingError> {
    use tracing_subscriber::EnvFilter;

    let directory = log_path
        .parent()
        .ok_or_else(|| LoggingError::BadPath(log_path.to_path_buf()))?;
    let file_name = log_path
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| LoggingError::BadPath(log_path.to_path_buf()))?;

    std::fs::create_dir_all(directory).map_err(|source| LoggingError::CreateDir {
        path: directory.to_path_buf(),
        source,
    })?;

    let writer = tracing_appender::rolling::never(directory, file_name);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false) // log files stay plain text
        .try_init()
        .map_err(|_| LoggingError::AlreadyInitialized)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::fs;

    fn scratch(name: &str) -> PathBuf {
        std::env::temp_dir().join(name)
    }

    #[test]
    #[serial(tracing_init)]
    fn init_creates_the_log_directory() {
        let dir = scratch("darc_logs_create");
        let _ = fs::remove_dir_all(&dir);

        // A subscriber may already be installed by a sibling test; the
        // directory is created either way.
        let _ = init(&dir.join("darc.log"));

        assert!(dir.exists(), "log directory should exist: {dir:?}");
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    #[serial(tracing_init)]
    fn init_accepts_an_existing_directory() {
        let dir = scratch("darc_logs_existing");
        let _ = fs::create_dir_all(&dir);
        let _ = init(&dir.join("darc.log"));
        assert!(dir.exists());
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    #[serial(tracing_init)]
    fn second_init_reports_already_initialized() {
        let dir = scratch("darc_logs_twice");
        let _ = init(&dir.join("darc.log"));
        let second = init(&dir.join("darc.log"));
        assert!(matches!(second, Err(LoggingError::AlreadyInitialized)));
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn root_path_is_rejected() {
        let result = init(Path::new("/"));
        assert!(matches!(result, Err(LoggingError::BadPath(_))));
    }
}
