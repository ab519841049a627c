//! Agent memory of revealed tiles.
//!
//! A `MemoryStore` maps tile ids to the color last seen when that tile was
//! turned over. Only the computer seat keeps one, and it only learns from
//! its own reveals.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::board::TileId;
use crate::core::Color;

/// Last observed color per tile.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemoryStore {
    seen: FxHashMap<TileId, Color>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store or overwrite an observation.
    pub fn record(&mut self, tile: TileId, color: Color) {
        self.seen.insert(tile, color);
    }

    /// Remembered color, or `None` if the tile was never observed.
    #[must_use]
    pub fn color_of(&self, tile: TileId) -> Option<Color> {
        self.seen.get(&tile).copied()
    }

    #[must_use]
    pub fn knows(&self, tile: TileId) -> bool {
        self.seen.contains_key(&tile)
    }

    /// Drop an observation. Returns the forgotten color.
    pub fn forget(&mut self, tile: TileId) -> Option<Color> {
        self.seen.remove(&tile)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.seen.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }

    /// All observations, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (TileId, Color)> + '_ {
        self.seen.iter().map(|(&tile, &color)| (tile, color))
    }

    pub fn clear(&mut self) {
        self.seen.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_by_default() {
        let memory = MemoryStore::new();
        assert_eq!(memory.color_of(TileId::new(0)), None);
        assert!(memory.is_empty());
    }

    #[test]
    fn test_record_overwrites() {
        let mut memory = MemoryStore::new();
        memory.record(TileId::new(7), Color::RED);
        memory.record(TileId::new(7), Color::BLUE);

        assert_eq!(memory.color_of(TileId::new(7)), Some(Color::BLUE));
        assert_eq!(memory.len(), 1);
        assert!(memory.knows(TileId::new(7)));
    }

    #[test]
    fn test_forget() {
        let mut memory = MemoryStore::new();
        memory.record(TileId::new(1), Color::GREEN);
        memory.record(TileId::new(2), Color::BLACK);

        assert_eq!(memory.forget(TileId::new(1)), Some(Color::GREEN));
        assert_eq!(memory.forget(TileId::new(1)), None);
        assert_eq!(memory.color_of(TileId::new(1)), None);
        assert_eq!(memory.iter().collect::<Vec<_>>(), vec![(TileId::new(2), Color::BLACK)]);

        memory.clear();
        assert!(memory.is_empty());
    }
}
