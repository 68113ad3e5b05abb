//! Logging infrastructure for outagemap.
//!
//! Provides structured logging to stderr and, optionally, to a file:
//! - stdout is reserved for the scraped JSON, so console output goes to stderr
//! - A log file, when configured, is truncated at startup
//! - Configurable via RUST_LOG environment variable

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Guard that must be kept alive for the duration of logging.
///
/// Dropping this guard will flush and close the log file writer.
pub struct LoggingGuard {
    _file_guard: Option<WorkerGuard>,
}

/// Options for [`init_logging`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoggingOptions {
    /// Log file to write in addition to stderr
    pub file: Option<PathBuf>,
    /// Log at debug level regardless of RUST_LOG
    pub verbose: bool,
}

/// Initialize logging system.
///
/// # Errors
///
/// Returns error if the log file's directory cannot be created or the file
/// cannot be truncated.
pub fn init_logging(options: &LoggingOptions) -> Result<LoggingGuard, io::Error> {
    let env_filter = if options.verbose {
        EnvFilter::new("debug")
    } else {
        // Defaults to INFO if RUST_LOG not set
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_writer(io::stderr)
        .with_target(false);

    let (file_layer, file_guard) = match &options.file {
        Some(path) => {
            let (dir, name) = prepare_log_file(path)?;
            let file_appender = tracing_appender::rolling::never(dir, name);
            let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);
            let layer = tracing_subscriber::fmt::layer()
                .with_writer(non_blocking_file)
                .with_ansi(false);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer)
        .with(file_layer)
        .init();

    Ok(LoggingGuard {
        _file_guard: file_guard,
    })
}

/// Creates the log directory and truncates the log file.
///
/// Returns the directory and file name for the appender.
fn prepare_log_file(path: &Path) -> Result<(PathBuf, PathBuf), io::Error> {
    let name = path.file_name().ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("log path '{}' has no file name", path.display()),
        )
    })?;
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
        _ => PathBuf::from("."),
    };

    fs::create_dir_all(&dir)?;
    fs::write(path, "")?;

    Ok((dir, PathBuf::from(name)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_prepare_creates_directory_and_clears_file() {
        let temp_dir = TempDir::new().unwrap();
        let log_path = temp_dir.path().join("nested/logs/outagemap.log");

        let (dir, name) = prepare_log_file(&log_path).unwrap();
        assert_eq!(dir, temp_dir.path().join("nested/logs"));
        assert_eq!(name, PathBuf::from("outagemap.log"));
        assert_eq!(fs::read_to_string(&log_path).unwrap(), "");

        fs::write(&log_path, "old log data").unwrap();
        prepare_log_file(&log_path).unwrap();
        assert_eq!(fs::read_to_string(&log_path).unwrap(), "", "File should be cleared");
    }

    #[test]
    fn test_prepare_rejects_path_without_file_name() {
        let err = prepare_log_file(Path::new("/")).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
    }

    #[test]
    fn test_guard_structure() {
        use tracing_appender::non_blocking::NonBlocking;

        let (non_blocking, guard) = NonBlocking::new(std::io::sink());
        drop(non_blocking);

        let _logging_guard = LoggingGuard {
            _file_guard: Some(guard),
        };
    }

    // Actual log output needs a global subscriber, which can only be set once
    // per process, so it is not exercised here.
}
