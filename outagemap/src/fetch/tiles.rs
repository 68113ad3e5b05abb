//! HTTP-backed tile fetcher.

use tracing::trace;

use super::envelope::decode_tile_file;
use super::http::AsyncHttpClient;
use super::types::{FetchError, TileFetcher};
use crate::tile::{TileId, TileRecord};

/// Fetches tile files from `{data_url}/outages/{tile}.json`.
pub struct HttpTileFetcher<C> {
    client: C,
    data_url: String,
}

impl<C: AsyncHttpClient> HttpTileFetcher<C> {
    /// Creates a fetcher rooted at a resolved data directory URL.
    pub fn new(client: C, data_url: impl Into<String>) -> Self {
        Self {
            client,
            data_url: data_url.into(),
        }
    }

    /// Returns the URL a tile is fetched from.
    pub fn tile_url(&self, tile: &TileId) -> String {
        format!("{}/outages/{}.json", self.data_url, tile)
    }
}

impl<C: AsyncHttpClient> TileFetcher for HttpTileFetcher<C> {
    async fn fetch_tile(&self, tile: &TileId) -> Result<Option<Vec<TileRecord>>, FetchError> {
        let url = self.tile_url(tile);

        let body = match self.client.get(&url).await? {
            Some(body) if !body.is_empty() => body,
            _ => {
                trace!(tile = %tile, "Tile not present");
                return Ok(None);
            }
        };

        let records =
            decode_tile_file(&body).map_err(|reason| FetchError::Decode { url, reason })?;

        if records.is_empty() {
            Ok(None)
        } else {
            Ok(Some(records))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetch::MockAsyncHttpClient;

    const DATA_URL: &str = "http://map.test/data/current";

    fn tile(s: &str) -> TileId {
        TileId::parse(s).unwrap()
    }

    #[test]
    fn test_tile_url() {
        let fetcher = HttpTileFetcher::new(MockAsyncHttpClient::new(), DATA_URL);
        assert_eq!(
            fetcher.tile_url(&tile("030231")),
            "http://map.test/data/current/outages/030231.json"
        );
    }

    #[tokio::test]
    async fn test_fetch_decodes_records() {
        let client = MockAsyncHttpClient::new().with_body(
            "http://map.test/data/current/outages/030231.json",
            r#"{"file_data":[{"desc":{"cluster":true},"id":"a"},{"id":"b"}]}"#,
        );
        let fetcher = HttpTileFetcher::new(client, DATA_URL);

        let records = fetcher.fetch_tile(&tile("030231")).await.unwrap().unwrap();
        assert_eq!(records.len(), 2);
        assert!(records[0].is_cluster());
        assert!(!records[1].is_cluster());
    }

    #[tokio::test]
    async fn test_not_found_is_absent() {
        let fetcher = HttpTileFetcher::new(MockAsyncHttpClient::new(), DATA_URL);

        assert_eq!(fetcher.fetch_tile(&tile("0302")).await.map(|r| r.is_none()), Ok(true));
    }

    #[tokio::test]
    async fn test_empty_body_and_empty_file_data_are_absent() {
        let client = MockAsyncHttpClient::new()
            .with_body("http://map.test/data/current/outages/A.json", "")
            .with_body(
                "http://map.test/data/current/outages/B.json",
                r#"{"file_data":[]}"#,
            );
        let fetcher = HttpTileFetcher::new(client, DATA_URL);

        assert!(fetcher.fetch_tile(&tile("A")).await.unwrap().is_none());
        assert!(fetcher.fetch_tile(&tile("B")).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_malformed_body_is_decode_error() {
        let client = MockAsyncHttpClient::new()
            .with_body("http://map.test/data/current/outages/A.json", "not json");
        let fetcher = HttpTileFetcher::new(client, DATA_URL);

        let err = fetcher.fetch_tile(&tile("A")).await.unwrap_err();
        assert!(matches!(err, FetchError::Decode { ref url, .. } if url.ends_with("/A.json")));
    }

    #[tokio::test]
    async fn test_transport_errors_propagate() {
        let url = "http://map.test/data/current/outages/A.json";
        let client = MockAsyncHttpClient::new().with_error(
            url,
            FetchError::Status {
                url: url.to_string(),
                status: 503,
            },
        );
        let fetcher = HttpTileFetcher::new(client, DATA_URL);

        let err = fetcher.fetch_tile(&tile("A")).await.unwrap_err();
        assert_eq!(
            err,
            FetchError::Status {
                url: url.to_string(),
                status: 503
            }
        );
    }
}
