//! Tile identifiers and records
//!
//! The outage map is published as an implicit quadtree of JSON tile files.
//! Tiles are addressed by path-like ids (see [`TileId`]); each tile file
//! holds a list of [`TileRecord`]s, some of which may be clusters that
//! point at deeper tiles.

mod record;
mod types;

pub use record::TileRecord;
pub use types::{PendingTile, TileId, TileIdError, CHILD_SUFFIXES};
