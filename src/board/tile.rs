//! Tiles and tile identity.
//!
//! A `TileId` is the tile's index in the board arena. It stays valid for
//! the whole game, which is what lets memory stores key on it.

use serde::{Deserialize, Serialize};

use crate::core::Color;

/// Stable tile identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TileId(pub u16);

impl TileId {
    #[must_use]
    pub const fn new(id: u16) -> Self {
        Self(id)
    }

    /// Arena index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for TileId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Tile({})", self.0)
    }
}

/// One board cell.
///
/// A removed tile keeps its color but is never revealed or selected again.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tile {
    pub id: TileId,
    pub color: Color,
    revealed: bool,
    removed: bool,
}

impl Tile {
    #[must_use]
    pub fn new(id: TileId, color: Color) -> Self {
        Self {
            id,
            color,
            revealed: false,
            removed: false,
        }
    }

    #[must_use]
    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    #[must_use]
    pub fn is_removed(&self) -> bool {
        self.removed
    }

    /// Can this tile be picked?
    #[must_use]
    pub fn is_selectable(&self) -> bool {
        !self.removed
    }

    /// Turn the tile face up. Returns false for removed tiles.
    pub(crate) fn reveal(&mut self) -> bool {
        if self.removed {
            return false;
        }
        self.revealed = true;
        true
    }

    pub(crate) fn hide(&mut self) {
        self.revealed = false;
    }

    /// Retire the tile from play.
    pub(crate) fn remove(&mut self) {
        self.revealed = false;
        self.removed = true;
    }
}
