//! High-level scraper facade.
//!
//! Wires directory resolution, the tile walk and flattening into one call.
//!
//! # Example
//!
//! ```ignore
//! use outagemap::fetch::AsyncReqwestClient;
//! use outagemap::scraper::{OutageScraper, ScraperConfig};
//!
//! let client = AsyncReqwestClient::with_timeout(30)?;
//! let scraper = OutageScraper::new(client, ScraperConfig::default());
//! let records = scraper.scrape().await?;
//! ```

mod config;
mod error;
mod facade;

pub use config::{ScraperConfig, ScraperConfigBuilder};
pub use error::ScrapeError;
pub use facade::OutageScraper;
