//! Tile identifier type definitions

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Suffix digits appended to a tile id to address its four children.
pub const CHILD_SUFFIXES: [char; 4] = ['0', '1', '2', '3'];

/// Identifier of one tile in the outage map's quadtree.
///
/// The id is a path key: a child is its parent's id with one of
/// [`CHILD_SUFFIXES`] appended, so the parent is recovered by stripping the
/// last character. No geometry is attached to it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TileId(String);

impl TileId {
    /// Parses a tile id, rejecting values that cannot form a fetch path.
    pub fn parse(id: &str) -> Result<Self, TileIdError> {
        if id.is_empty() {
            return Err(TileIdError::Empty);
        }
        if let Some(c) = id.chars().find(|c| *c == '/' || c.is_whitespace()) {
            return Err(TileIdError::InvalidCharacter {
                id: id.to_string(),
                character: c,
            });
        }
        Ok(Self(id.to_string()))
    }

    /// Returns the id as a string slice.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the id with its last character stripped.
    ///
    /// `None` for single-character ids, which have no addressable parent.
    pub fn parent(&self) -> Option<TileId> {
        let mut chars = self.0.chars();
        chars.next_back()?;
        let parent = chars.as_str();
        if parent.is_empty() {
            None
        } else {
            Some(Self(parent.to_string()))
        }
    }

    /// Returns the four child ids in suffix order.
    pub fn children(&self) -> [TileId; 4] {
        CHILD_SUFFIXES.map(|suffix| {
            let mut child = String::with_capacity(self.0.len() + 1);
            child.push_str(&self.0);
            child.push(suffix);
            Self(child)
        })
    }

    /// Returns true if `other` is a strict ancestor of this tile.
    pub fn is_descendant_of(&self, other: &TileId) -> bool {
        self.0.len() > other.0.len() && self.0.starts_with(&other.0)
    }
}

impl fmt::Display for TileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for TileId {
    type Err = TileIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for TileId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A tile waiting in the traversal worklist.
///
/// Depth counts levels below the seed the tile was expanded from, so seeds
/// sit at depth 0 regardless of how long their ids are.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingTile {
    pub id: TileId,
    pub depth: usize,
}

impl PendingTile {
    /// Creates a worklist entry for a seed tile.
    pub fn seed(id: TileId) -> Self {
        Self { id, depth: 0 }
    }

    /// Returns true if this tile was part of the seed set.
    #[inline]
    pub fn is_seed(&self) -> bool {
        self.depth == 0
    }

    /// Returns worklist entries for the four children of this tile.
    pub fn children(&self) -> impl Iterator<Item = PendingTile> {
        let depth = self.depth + 1;
        self.id
            .children()
            .into_iter()
            .map(move |id| PendingTile { id, depth })
    }
}

/// Errors that can occur when parsing a tile id.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TileIdError {
    /// The id is an empty string
    #[error("Tile id must not be empty")]
    Empty,
    /// The id contains a character that cannot appear in a fetch path
    #[error("Invalid tile id '{id}': character {character:?} is not allowed")]
    InvalidCharacter { id: String, character: char },
}
