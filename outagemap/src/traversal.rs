//! Adaptive breadth-first walk over the tile quadtree.
//!
//! The dataset does not advertise its depth. A tile holding any cluster
//! record may have more specific data below it, so the walk descends into its
//! four children; a tile with no cluster records is a leaf. Each branch stops
//! at the deepest tile that returned data.
//!
//! # Algorithm
//!
//! ```text
//! worklist = seeds
//! while let Some(tile) = worklist.pop_front():
//!     records = fetch(tile)            // absent / empty -> skip
//!     if tile is not a seed:
//!         store.delete(parent(tile))   // deeper data supersedes
//!     store.put(tile, records)
//!     if any record is a cluster:
//!         worklist.push_back(children(tile))
//! ```
//!
//! Tiles are processed strictly one at a time. Any fetch error aborts the
//! walk; no partial result is returned.

use std::collections::VecDeque;

use thiserror::Error;
use tracing::{debug, info, warn};

use crate::fetch::{FetchError, TileFetcher};
use crate::merge::MergeStore;
use crate::tile::{PendingTile, TileId};

/// Errors that abort a traversal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TraversalError {
    /// A tile fetch failed with something other than "not found"
    #[error("Failed to fetch tile {tile}: {source}")]
    Fetch {
        tile: TileId,
        #[source]
        source: FetchError,
    },
}

/// Configuration for a traversal.
///
/// # Example
///
/// ```
/// use outagemap::traversal::TraversalConfig;
///
/// let config = TraversalConfig::default();
/// assert_eq!(config.max_depth(), None);
///
/// let config = TraversalConfig::new().with_max_depth(Some(8));
/// assert_eq!(config.max_depth(), Some(8));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TraversalConfig {
    /// Deepest level below a seed that may be expanded
    max_depth: Option<usize>,
}

impl TraversalConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Caps how far below a seed the walk descends.
    ///
    /// A cluster tile at the cap is kept as a leaf instead of being
    /// expanded. `None` (the default) lets the data decide.
    pub fn with_max_depth(mut self, max_depth: Option<usize>) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn max_depth(&self) -> Option<usize> {
        self.max_depth
    }
}

/// Counters collected during a traversal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TraversalStats {
    /// Tiles requested from the fetcher
    pub tiles_fetched: usize,
    /// Tiles that were not found or held no records
    pub tiles_absent: usize,
    /// Tiles whose children were enqueued
    pub tiles_expanded: usize,
    /// Cluster tiles left unexpanded because of the depth cap
    pub tiles_capped: usize,
    /// Parent entries dropped in favour of deeper data
    pub superseded: usize,
    /// Deepest level below a seed that returned data
    pub deepest: usize,
}

/// State of one traversal: the worklist, the merge store and counters.
pub struct Traversal<'a, F> {
    fetcher: &'a F,
    config: TraversalConfig,
    worklist: VecDeque<PendingTile>,
    store: MergeStore,
    stats: TraversalStats,
}

impl<'a, F: TileFetcher> Traversal<'a, F> {
    /// Creates a traversal seeded with `seeds`, in order.
    ///
    /// Repeated seeds and seeds lying under another seed are dropped; the
    /// walk from the outer seed reaches them at their real depth.
    pub fn new(
        fetcher: &'a F,
        seeds: impl IntoIterator<Item = TileId>,
        config: TraversalConfig,
    ) -> Self {
        Self {
            fetcher,
            config,
            worklist: distinct_seeds(seeds)
                .into_iter()
                .map(PendingTile::seed)
                .collect(),
            store: MergeStore::new(),
            stats: TraversalStats::default(),
        }
    }

    /// Number of tiles waiting to be fetched.
    pub fn pending(&self) -> usize {
        self.worklist.len()
    }

    pub fn store(&self) -> &MergeStore {
        &self.store
    }

    pub fn stats(&self) -> &TraversalStats {
        &self.stats
    }

    /// Processes the tile at the head of the worklist.
    ///
    /// Returns `Ok(false)` once the worklist is empty.
    pub async fn step(&mut self) -> Result<bool, TraversalError> {
        let Some(tile) = self.worklist.pop_front() else {
            return Ok(false);
        };

        self.stats.tiles_fetched += 1;
        let records = self
            .fetcher
            .fetch_tile(&tile.id)
            .await
            .map_err(|source| TraversalError::Fetch {
                tile: tile.id.clone(),
                source,
            })?;

        let records = match records {
            Some(records) if !records.is_empty() => records,
            _ => {
                self.stats.tiles_absent += 1;
                return Ok(true);
            }
        };

        let any_cluster = records.iter().any(|r| r.is_cluster());
        debug!(
            tile = %tile.id,
            depth = tile.depth,
            records = records.len(),
            cluster = any_cluster,
            "Tile fetched"
        );

        if tile.is_seed() {
            self.store.put(tile.id.clone(), records);
        } else if self.store.supersede(tile.id.clone(), records) {
            self.stats.superseded += 1;
        }
        self.stats.deepest = self.stats.deepest.max(tile.depth);

        if any_cluster {
            match self.config.max_depth {
                Some(max) if tile.depth >= max => {
                    warn!(
                        tile = %tile.id,
                        depth = tile.depth,
                        max_depth = max,
                        "Cluster tile at depth limit, keeping it as a leaf"
                    );
                    self.stats.tiles_capped += 1;
                }
                _ => {
                    self.worklist.extend(tile.children());
                    self.stats.tiles_expanded += 1;
                }
            }
        }

        Ok(true)
    }

    /// Runs until the worklist is empty.
    pub async fn run(&mut self) -> Result<(), TraversalError> {
        while self.step().await? {}

        let stats = &self.stats;
        info!(
            tiles_fetched = stats.tiles_fetched,
            tiles_absent = stats.tiles_absent,
            tiles_expanded = stats.tiles_expanded,
            tiles_capped = stats.tiles_capped,
            superseded = stats.superseded,
            deepest = stats.deepest,
            tiles_kept = self.store.len(),
            records = self.store.record_count(),
            "Traversal complete"
        );
        Ok(())
    }

    /// Consumes the traversal, returning its merge store.
    pub fn into_store(self) -> MergeStore {
        self.store
    }
}

/// Keeps the first occurrence of each seed that is not nested under another.
fn distinct_seeds(seeds: impl IntoIterator<Item = TileId>) -> Vec<TileId> {
    let seeds: Vec<TileId> = seeds.into_iter().collect();
    let mut kept: Vec<TileId> = Vec::with_capacity(seeds.len());

    for seed in &seeds {
        if kept.contains(seed) {
            warn!(seed = %seed, "Ignoring repeated seed");
        } else if let Some(outer) = seeds.iter().find(|other| seed.is_descendant_of(other)) {
            warn!(seed = %seed, outer = %outer, "Ignoring seed nested under another seed");
        } else {
            kept.push(seed.clone());
        }
    }

    kept
}

/// Walks the quadtree from `seeds` and returns the deepest data per branch.
pub async fn traverse<F: TileFetcher>(
    fetcher: &F,
    seeds: &[TileId],
    config: TraversalConfig,
) -> Result<MergeStore, TraversalError> {
    let mut traversal = Traversal::new(fetcher, seeds.iter().cloned(), config);
    traversal.run().await?;
    Ok(traversal.into_store())
}
