//! CLI runner for common setup and operations.
//!
//! Encapsulates config loading, logging initialization and HTTP client
//! creation so `main` only deals with flags and output.

use std::path::{Path, PathBuf};

use tracing::info;

use outagemap::config::ConfigFile;
use outagemap::fetch::AsyncReqwestClient;
use outagemap::logging::{init_logging, LoggingGuard, LoggingOptions};

use crate::error::CliError;

/// Runner that manages CLI lifecycle and common operations.
pub struct CliRunner {
    /// Logging guard - keeps logging active while runner exists
    #[allow(dead_code)]
    logging_guard: LoggingGuard,
    /// Loaded configuration file
    config: ConfigFile,
}

impl CliRunner {
    /// Load configuration and initialize logging.
    ///
    /// # Arguments
    ///
    /// * `config_path` - Config file to load instead of ~/.outagemap/config.ini
    /// * `log_file` - Log file overriding the configured one
    /// * `verbose` - When true, enables debug-level logging regardless of RUST_LOG
    pub fn new(
        config_path: Option<&Path>,
        log_file: Option<PathBuf>,
        verbose: bool,
    ) -> Result<Self, CliError> {
        let config = match config_path {
            Some(path) => ConfigFile::load_from(path)?,
            None => ConfigFile::load()?,
        };

        let options = LoggingOptions {
            file: log_file.or_else(|| config.logging.file.clone()),
            verbose,
        };
        let logging_guard =
            init_logging(&options).map_err(|e| CliError::LoggingInit(e.to_string()))?;

        Ok(Self {
            logging_guard,
            config,
        })
    }

    /// Get the loaded configuration.
    pub fn config(&self) -> &ConfigFile {
        &self.config
    }

    /// Log startup information.
    pub fn log_startup(&self) {
        info!("outagemap v{}", outagemap::VERSION);
    }

    /// Create the HTTP client used for every request of the run.
    pub fn create_client(&self, timeout_secs: u64) -> Result<AsyncReqwestClient, CliError> {
        AsyncReqwestClient::with_timeout(timeout_secs).map_err(CliError::HttpClient)
    }
}
