//! Outage scraper facade implementation.

use tracing::info;

use super::config::ScraperConfig;
use super::error::ScrapeError;
use crate::fetch::{AsyncHttpClient, HttpTileFetcher};
use crate::metadata::resolve_data_url;
use crate::output::flatten;
use crate::tile::TileRecord;
use crate::traversal::traverse;

/// Scrapes the outage map into one flat list of records.
///
/// Each call performs a full run: resolve the active data directory, walk
/// the tile quadtree from the configured seeds, and flatten the result.
pub struct OutageScraper<C> {
    client: C,
    config: ScraperConfig,
}

impl<C: AsyncHttpClient> OutageScraper<C> {
    pub fn new(client: C, config: ScraperConfig) -> Self {
        Self { client, config }
    }

    pub fn config(&self) -> &ScraperConfig {
        &self.config
    }

    /// Runs one full scrape.
    ///
    /// # Errors
    ///
    /// Fails if the data directory cannot be resolved or if any tile fetch
    /// fails with something other than "not found". No partial result is
    /// returned.
    pub async fn scrape(&self) -> Result<Vec<TileRecord>, ScrapeError> {
        let data_url = resolve_data_url(&self.client, self.config.base_url()).await?;
        info!(
            data_url = %data_url,
            seeds = self.config.seeds().len(),
            "Starting tile traversal"
        );

        let fetcher = HttpTileFetcher::new(&self.client, data_url);
        let store = traverse(&fetcher, self.config.seeds(), self.config.traversal()).await?;

        Ok(flatten(store))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetch::{FetchError, MockAsyncHttpClient};
    use crate::metadata::MetadataError;
    use crate::tile::TileId;
    use crate::traversal::TraversalError;

    const BASE: &str = "http://map.test/data";

    fn config(seeds: &[&str]) -> ScraperConfig {
        ScraperConfig::builder()
            .base_url(BASE)
            .seeds(seeds.iter().map(|s| TileId::parse(s).unwrap()).collect())
            .build()
    }

    fn tile_url(tile: &str) -> String {
        format!("{}/dir/outages/{}.json", BASE, tile)
    }

    #[tokio::test]
    async fn test_scrape_resolves_directory_and_walks() {
        let client = MockAsyncHttpClient::new()
            .with_body("http://map.test/data/metadata.json", r#"{"directory":"dir"}"#)
            .with_body(
                &tile_url("A"),
                r#"{"file_data":[{"id":"a","desc":{"cluster":true}}]}"#,
            )
            .with_body(&tile_url("A3"), r#"{"file_data":[{"id":"a3"}]}"#);
        let scraper = OutageScraper::new(client, config(&["A"]));

        let records = scraper.scrape().await.unwrap();

        let bodies: Vec<&str> = records.iter().map(|r| r.body().get()).collect();
        assert_eq!(bodies, vec![r#"{"id":"a3"}"#]);
    }

    #[tokio::test]
    async fn test_metadata_failure_aborts_before_traversal() {
        let client = MockAsyncHttpClient::new();
        let scraper = OutageScraper::new(client, config(&["A"]));

        let err = scraper.scrape().await.unwrap_err();

        assert_eq!(
            err,
            ScrapeError::Metadata(MetadataError::NotFound(
                "http://map.test/data/metadata.json".to_string()
            ))
        );
        assert_eq!(scraper.client.requests().len(), 1);
    }

    #[tokio::test]
    async fn test_tile_failure_aborts_scrape() {
        let url = tile_url("B");
        let client = MockAsyncHttpClient::new()
            .with_body("http://map.test/data/metadata.json", r#"{"directory":"dir"}"#)
            .with_body(&tile_url("A"), r#"{"file_data":[{"id":"a"}]}"#)
            .with_error(
                &url,
                FetchError::Transport {
                    url: url.clone(),
                    reason: "connection reset".to_string(),
                },
            );
        let scraper = OutageScraper::new(client, config(&["A", "B"]));

        let err = scraper.scrape().await.unwrap_err();

        assert!(matches!(
            err,
            ScrapeError::Traversal(TraversalError::Fetch { ref tile, .. }) if tile.as_str() == "B"
        ));
        assert!(err.to_string().contains("connection reset"));
    }
}
