//! Tile file retrieval
//!
//! This module provides the [`TileFetcher`] trait consumed by the traversal,
//! its HTTP implementation, and the transport abstraction underneath it.
//!
//! ```ignore
//! use outagemap::fetch::{AsyncReqwestClient, HttpTileFetcher, TileFetcher};
//!
//! let client = AsyncReqwestClient::new()?;
//! let fetcher = HttpTileFetcher::new(client, data_url);
//! let records = fetcher.fetch_tile(&tile).await?;
//! ```

mod envelope;
mod http;
mod tiles;
mod types;

pub use envelope::decode_tile_file;
pub use http::{AsyncHttpClient, AsyncReqwestClient, DEFAULT_TIMEOUT_SECS};
pub use tiles::HttpTileFetcher;
pub use types::{FetchError, TileFetcher};

#[cfg(test)]
pub use http::tests::MockAsyncHttpClient;
