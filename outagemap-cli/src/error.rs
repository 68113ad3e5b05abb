//! CLI error handling with user-friendly messages.
//!
//! Centralizes error handling for the CLI, providing consistent formatting
//! and appropriate exit codes.

use std::fmt;
use std::process;

use outagemap::config::ConfigFileError;
use outagemap::fetch::FetchError;
use outagemap::scraper::ScrapeError;

/// CLI-specific errors with user-friendly messages.
#[derive(Debug)]
pub enum CliError {
    /// Failed to initialize logging
    LoggingInit(String),
    /// Configuration error
    Config(ConfigFileError),
    /// Failed to create the HTTP client
    HttpClient(FetchError),
    /// Scrape failed
    Scrape(ScrapeError),
    /// Failed to write the result to stdout
    Output(std::io::Error),
}

impl CliError {
    /// Exit the process with an appropriate error message and code.
    pub fn exit(&self) -> ! {
        eprintln!("Error: {}", self);

        if let CliError::Config(ConfigFileError::InvalidValue { .. }) = self {
            eprintln!();
            eprintln!(
                "Check {} or pass --config with a valid file.",
                outagemap::config::config_file_path().display()
            );
        }

        process::exit(1)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::LoggingInit(msg) => write!(f, "Failed to initialize logging: {}", msg),
            CliError::Config(e) => write!(f, "Configuration error: {}", e),
            CliError::HttpClient(e) => write!(f, "Failed to create HTTP client: {}", e),
            CliError::Scrape(e) => write!(f, "Scrape failed: {}", e),
            CliError::Output(e) => write!(f, "Failed to write output: {}", e),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Config(e) => Some(e),
            CliError::HttpClient(e) => Some(e),
            CliError::Scrape(e) => Some(e),
            CliError::Output(e) => Some(e),
            CliError::LoggingInit(_) => None,
        }
    }
}

impl From<ConfigFileError> for CliError {
    fn from(e: ConfigFileError) -> Self {
        CliError::Config(e)
    }
}

impl From<ScrapeError> for CliError {
    fn from(e: ScrapeError) -> Self {
        CliError::Scrape(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_cause() {
        let err = CliError::HttpClient(FetchError::Transport {
            url: String::new(),
            reason: "no TLS backend".to_string(),
        });
        assert!(err.to_string().starts_with("Failed to create HTTP client"));
        assert!(err.to_string().contains("no TLS backend"));
    }

    #[test]
    fn test_config_error_source() {
        use std::error::Error;

        let err = CliError::from(ConfigFileError::InvalidValue {
            section: "http".to_string(),
            key: "timeout".to_string(),
            value: "0".to_string(),
            reason: "must be a positive number of seconds".to_string(),
        });
        assert!(err.source().is_some());
        assert!(err.to_string().contains("http.timeout"));
    }
}
