//! Settings structs for all configuration sections.
//!
//! Each struct represents one `[section]` of the INI config file.
//! These are pure data types with no parsing logic.

use std::path::PathBuf;

use crate::tile::TileId;

/// Complete application configuration loaded from config.ini.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigFile {
    /// Where the outage map is published
    pub source: SourceSettings,
    /// Tile walk limits
    pub traversal: TraversalSettings,
    /// HTTP client settings
    pub http: HttpSettings,
    /// Logging settings
    pub logging: LoggingSettings,
}

/// Data source configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceSettings {
    /// URL holding `metadata.json` and the published data directories
    pub base_url: String,
    /// Top-level tiles the walk starts from
    pub seeds: Vec<TileId>,
}

/// Traversal configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraversalSettings {
    /// Deepest level below a seed to expand (None = unbounded)
    pub max_depth: Option<usize>,
}

/// HTTP client configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpSettings {
    /// Per-request timeout in seconds
    pub timeout: u64,
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingSettings {
    /// Log file path (None = stderr only)
    pub file: Option<PathBuf>,
}
