//! Scraper error types.

use std::fmt;

use crate::metadata::MetadataError;
use crate::traversal::TraversalError;

/// Errors that abort a scrape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScrapeError {
    /// The active data directory could not be resolved
    Metadata(MetadataError),
    /// The tile walk failed
    Traversal(TraversalError),
}

impl fmt::Display for ScrapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Metadata(e) => write!(f, "Directory resolution failed: {}", e),
            Self::Traversal(e) => write!(f, "Traversal failed: {}", e),
        }
    }
}

impl std::error::Error for ScrapeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Metadata(e) => Some(e),
            Self::Traversal(e) => Some(e),
        }
    }
}

impl From<MetadataError> for ScrapeError {
    fn from(e: MetadataError) -> Self {
        Self::Metadata(e)
    }
}

impl From<TraversalError> for ScrapeError {
    fn from(e: TraversalError) -> Self {
        Self::Traversal(e)
    }
}
