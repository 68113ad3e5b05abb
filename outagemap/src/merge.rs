//! Merge store holding the best-known records per tile.
//!
//! Entries are kept in the order their tile was first stored so that the
//! flattened output of a run is deterministic.

use std::collections::{BTreeMap, HashMap};

use crate::tile::{TileId, TileRecord};

/// Mapping from tile id to the records fetched at that tile.
///
/// Deeper data supersedes shallower data: storing a non-seed tile through
/// [`MergeStore::supersede`] drops its immediate parent's entry in the same
/// call.
#[derive(Debug, Default)]
pub struct MergeStore {
    /// Insertion sequence -> (tile, records)
    entries: BTreeMap<u64, (TileId, Vec<TileRecord>)>,
    /// Tile -> insertion sequence
    index: HashMap<TileId, u64>,
    next_seq: u64,
}

impl MergeStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `records` as the entry for `id`, replacing any earlier entry.
    ///
    /// A replaced entry keeps its original position in iteration order.
    pub fn put(&mut self, id: TileId, records: impl IntoIterator<Item = TileRecord>) {
        let records: Vec<TileRecord> = records.into_iter().collect();
        match self.index.get(&id) {
            Some(seq) => {
                self.entries.insert(*seq, (id, records));
            }
            None => {
                let seq = self.next_seq;
                self.next_seq += 1;
                self.index.insert(id.clone(), seq);
                self.entries.insert(seq, (id, records));
            }
        }
    }

    /// Removes the entry for the parent of `id`.
    ///
    /// Returns the removed records, or `None` if the parent had no entry or
    /// `id` has no parent.
    pub fn delete_parent_of(&mut self, id: &TileId) -> Option<Vec<TileRecord>> {
        let parent = id.parent()?;
        self.remove(&parent)
    }

    /// Stores a non-seed tile's records in place of its parent's.
    ///
    /// Returns true if a parent entry was dropped.
    pub fn supersede(&mut self, id: TileId, records: impl IntoIterator<Item = TileRecord>) -> bool {
        let dropped = self.delete_parent_of(&id).is_some();
        self.put(id, records);
        dropped
    }

    /// Removes the entry for `id`, returning its records.
    pub fn remove(&mut self, id: &TileId) -> Option<Vec<TileRecord>> {
        let seq = self.index.remove(id)?;
        self.entries.remove(&seq).map(|(_, records)| records)
    }

    /// Returns the records stored for `id`.
    pub fn get(&self, id: &TileId) -> Option<&[TileRecord]> {
        let seq = self.index.get(id)?;
        self.entries.get(seq).map(|(_, records)| records.as_slice())
    }

    pub fn contains(&self, id: &TileId) -> bool {
        self.index.contains_key(id)
    }

    /// Number of tiles with an entry.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total number of records across all tiles.
    pub fn record_count(&self) -> usize {
        self.entries.values().map(|(_, records)| records.len()).sum()
    }

    /// Iterates stored tile ids in insertion order.
    pub fn tile_ids(&self) -> impl Iterator<Item = &TileId> {
        self.entries.values().map(|(id, _)| id)
    }

    /// Iterates stored record sequences in insertion order.
    pub fn values(&self) -> impl Iterator<Item = &[TileRecord]> {
        self.entries.values().map(|(_, records)| records.as_slice())
    }

    /// Consumes the store, yielding record sequences in insertion order.
    pub fn into_values(self) -> impl Iterator<Item = Vec<TileRecord>> {
        self.entries.into_values().map(|(_, records)| records)
    }
}
