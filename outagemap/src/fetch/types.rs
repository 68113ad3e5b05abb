//! Fetcher types and traits

use std::future::Future;

use thiserror::Error;

use crate::tile::{TileId, TileRecord};

/// Errors that can occur while fetching a tile or metadata document.
///
/// A 404 is not an error; fetchers report it as an absent resource.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// Network-level failure or the response body could not be read
    #[error("Request to {url} failed: {reason}")]
    Transport { url: String, reason: String },
    /// Server answered with a status other than 2xx or 404
    #[error("HTTP {status} from {url}")]
    Status { url: String, status: u16 },
    /// Body is not a well-formed tile envelope
    #[error("Malformed tile file at {url}: {reason}")]
    Decode { url: String, reason: String },
}

/// Source of tile files for the traversal.
///
/// Returns `Ok(None)` when the tile does not exist or holds no records.
pub trait TileFetcher: Send + Sync {
    /// Fetches and decodes one tile.
    fn fetch_tile(
        &self,
        tile: &TileId,
    ) -> impl Future<Output = Result<Option<Vec<TileRecord>>, FetchError>> + Send;
}
