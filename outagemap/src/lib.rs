//! outagemap - flatten a tiled outage map into one list of outages
//!
//! The outage map publishes its data as an implicit quadtree of per-tile
//! JSON files. Tiles holding cluster records have more specific data below
//! them, to a depth the dataset does not advertise. This library walks the
//! tree breadth-first, keeps only the deepest data found on each branch, and
//! flattens the result.
//!
//! # High-Level API
//!
//! ```ignore
//! use outagemap::fetch::AsyncReqwestClient;
//! use outagemap::scraper::{OutageScraper, ScraperConfig};
//!
//! let client = AsyncReqwestClient::new()?;
//! let scraper = OutageScraper::new(client, ScraperConfig::default());
//! let records = scraper.scrape().await?;
//! outagemap::output::write_records(std::io::stdout().lock(), &records, false)?;
//! ```
//!
//! # Components
//!
//! - [`tile`] - tile ids and records
//! - [`fetch`] - HTTP transport and tile file decoding
//! - [`metadata`] - resolution of the active data directory
//! - [`traversal`] - the adaptive quadtree walk
//! - [`merge`] - per-tile store with supersede semantics
//! - [`output`] - flattening and JSON output

pub mod config;
pub mod fetch;
pub mod logging;
pub mod merge;
pub mod metadata;
pub mod output;
pub mod scraper;
pub mod tile;
pub mod traversal;

/// Version of the outagemap library and CLI.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
