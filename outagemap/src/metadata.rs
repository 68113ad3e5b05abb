//! Resolution of the currently published data directory.
//!
//! The outage map republishes its tiles into a fresh directory on every
//! interval. `{base}/metadata.json` names the active one:
//!
//! ```text
//! { "directory": "2024_01_17_12_30_00" }
//! ```

use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use crate::fetch::{AsyncHttpClient, FetchError};

/// Errors that can occur while resolving the data directory.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MetadataError {
    /// Request for the metadata document failed
    #[error("Failed to fetch metadata: {0}")]
    Fetch(#[from] FetchError),
    /// The metadata document does not exist
    #[error("Metadata not found at {0}")]
    NotFound(String),
    /// The metadata document could not be decoded
    #[error("Failed to decode metadata from {url}: {reason}")]
    Decode { url: String, reason: String },
    /// The metadata document names no directory
    #[error("Metadata at {0} does not name a data directory")]
    MissingDirectory(String),
}

#[derive(Deserialize)]
struct Metadata {
    #[serde(default, alias = "Directory")]
    directory: String,
}

/// Returns the URL of the active data directory under `base_url`.
pub async fn resolve_data_url<C: AsyncHttpClient>(
    client: &C,
    base_url: &str,
) -> Result<String, MetadataError> {
    let base_url = base_url.trim_end_matches('/');
    let url = format!("{}/metadata.json", base_url);

    let body = client
        .get(&url)
        .await?
        .ok_or_else(|| MetadataError::NotFound(url.clone()))?;

    let metadata: Metadata =
        serde_json::from_slice(&body).map_err(|e| MetadataError::Decode {
            url: url.clone(),
            reason: e.to_string(),
        })?;

    let directory = metadata.directory.trim().trim_matches('/');
    if directory.is_empty() {
        return Err(MetadataError::MissingDirectory(url));
    }

    debug!(directory = directory, "Resolved data directory");
    Ok(format!("{}/{}", base_url, directory))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetch::MockAsyncHttpClient;

    const BASE: &str = "http://map.test/data";
    const METADATA_URL: &str = "http://map.test/data/metadata.json";

    #[tokio::test]
    async fn test_resolves_directory() {
        let client =
            MockAsyncHttpClient::new().with_body(METADATA_URL, r#"{"directory":"current-directory"}"#);

        let url = resolve_data_url(&client, BASE).await.unwrap();
        assert_eq!(url, "http://map.test/data/current-directory");
    }

    #[tokio::test]
    async fn test_accepts_capitalized_key_and_trailing_slash() {
        let client = MockAsyncHttpClient::new().with_body(METADATA_URL, r#"{"Directory":"d1"}"#);

        let url = resolve_data_url(&client, "http://map.test/data/").await.unwrap();
        assert_eq!(url, "http://map.test/data/d1");
        assert_eq!(client.requests(), vec![METADATA_URL]);
    }

    #[tokio::test]
    async fn test_missing_metadata_is_fatal() {
        let client = MockAsyncHttpClient::new();

        let err = resolve_data_url(&client, BASE).await.unwrap_err();
        assert_eq!(err, MetadataError::NotFound(METADATA_URL.to_string()));
    }

    #[tokio::test]
    async fn test_bad_status_is_fatal() {
        let client = MockAsyncHttpClient::new().with_error(
            METADATA_URL,
            FetchError::Status {
                url: METADATA_URL.to_string(),
                status: 502,
            },
        );

        let err = resolve_data_url(&client, BASE).await.unwrap_err();
        assert!(matches!(err, MetadataError::Fetch(FetchError::Status { status: 502, .. })));
    }

    #[tokio::test]
    async fn test_malformed_metadata_is_fatal() {
        let client = MockAsyncHttpClient::new().with_body(METADATA_URL, "{");

        let err = resolve_data_url(&client, BASE).await.unwrap_err();
        assert!(matches!(err, MetadataError::Decode { .. }));
    }

    #[tokio::test]
    async fn test_empty_directory_is_fatal() {
        let client = MockAsyncHttpClient::new().with_body(METADATA_URL, r#"{"directory":""}"#);

        let err = resolve_data_url(&client, BASE).await.unwrap_err();
        assert_eq!(err, MetadataError::MissingDirectory(METADATA_URL.to_string()));
    }
}
