//! Configuration for the outage map scraper.
//!
//! Settings are read from `~/.outagemap/config.ini` when present:
//!
//! ```text
//! [source]
//! base_url = http://outagemap.nspower.ca/resources/data/external/interval_generation_data
//! seeds = 030231, 030233, 030320, 030321, 030322, 030323
//!
//! [traversal]
//! max_depth =
//!
//! [http]
//! timeout = 30
//!
//! [logging]
//! file =
//! ```
//!
//! Missing sections and empty values fall back to the defaults in
//! [`defaults`].

pub mod defaults;
mod file;
mod parser;
mod settings;

pub use defaults::{default_seeds, DEFAULT_BASE_URL, DEFAULT_HTTP_TIMEOUT_SECS, DEFAULT_SEEDS};
pub use file::{config_directory, config_file_path, ConfigFileError};
pub use parser::parse_seeds;
pub use settings::{ConfigFile, HttpSettings, LoggingSettings, SourceSettings, TraversalSettings};
