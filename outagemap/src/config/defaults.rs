//! Default values and constants for all configuration settings.

use super::settings::*;
use crate::tile::TileId;

/// Publication root of the Nova Scotia Power outage map.
pub const DEFAULT_BASE_URL: &str =
    "http://outagemap.nspower.ca/resources/data/external/interval_generation_data";

/// Top-level tiles requested by the map at its full view.
pub const DEFAULT_SEEDS: [&str; 6] = ["030231", "030233", "030320", "030321", "030322", "030323"];

/// Default HTTP request timeout in seconds.
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = crate::fetch::DEFAULT_TIMEOUT_SECS;

/// Returns [`DEFAULT_SEEDS`] as tile ids.
pub fn default_seeds() -> Vec<TileId> {
    DEFAULT_SEEDS
        .iter()
        .filter_map(|s| TileId::parse(s).ok())
        .collect()
}

impl Default for ConfigFile {
    fn default() -> Self {
        Self {
            source: SourceSettings {
                base_url: DEFAULT_BASE_URL.to_string(),
                seeds: default_seeds(),
            },
            traversal: TraversalSettings { max_depth: None },
            http: HttpSettings {
                timeout: DEFAULT_HTTP_TIMEOUT_SECS,
            },
            logging: LoggingSettings { file: None },
        }
    }
}
