//! Scraper configuration types.

use crate::config::{default_seeds, DEFAULT_BASE_URL};
use crate::tile::TileId;
use crate::traversal::TraversalConfig;

/// Configuration for an [`OutageScraper`](super::OutageScraper).
///
/// # Example
///
/// ```
/// use outagemap::scraper::ScraperConfig;
/// use outagemap::tile::TileId;
///
/// let config = ScraperConfig::builder()
///     .base_url("http://localhost:8080/data")
///     .seeds(vec![TileId::parse("0302").unwrap()])
///     .max_depth(Some(10))
///     .build();
///
/// assert_eq!(config.base_url(), "http://localhost:8080/data");
/// assert_eq!(config.seeds().len(), 1);
/// assert_eq!(config.traversal().max_depth(), Some(10));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScraperConfig {
    /// URL holding `metadata.json` and the published data directories
    base_url: String,
    /// Top-level tiles the walk starts from
    seeds: Vec<TileId>,
    /// Traversal limits
    traversal: TraversalConfig,
}

impl ScraperConfig {
    /// Create a new configuration builder.
    pub fn builder() -> ScraperConfigBuilder {
        ScraperConfigBuilder::default()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn seeds(&self) -> &[TileId] {
        &self.seeds
    }

    pub fn traversal(&self) -> TraversalConfig {
        self.traversal
    }
}

impl Default for ScraperConfig {
    fn default() -> Self {
        ScraperConfigBuilder::default().build()
    }
}

/// Builder for [`ScraperConfig`].
#[derive(Debug, Clone, Default)]
pub struct ScraperConfigBuilder {
    base_url: Option<String>,
    seeds: Option<Vec<TileId>>,
    max_depth: Option<usize>,
}

impl ScraperConfigBuilder {
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    pub fn seeds(mut self, seeds: Vec<TileId>) -> Self {
        self.seeds = Some(seeds);
        self
    }

    pub fn max_depth(mut self, max_depth: Option<usize>) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn build(self) -> ScraperConfig {
        ScraperConfig {
            base_url: self
                .base_url
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            seeds: self.seeds.unwrap_or_else(default_seeds),
            traversal: TraversalConfig::new().with_max_depth(self.max_depth),
        }
    }
}
