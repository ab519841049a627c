//! The board: a fixed arena of tiles laid out on a square grid.
//!
//! Tiles are stored row-major in an `im::Vector`, so a tile's id is also
//! its grid index and cloning the board for a snapshot is O(1). Tiles are
//! never added or dropped after construction; play only flips their flags.

use im::Vector;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::position::Position;
use super::tile::{Tile, TileId};
use crate::core::{BoardConfig, Color, ConfigError, GameRng, MAX_TILES};

/// Square grid of tiles.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    grid_size: usize,
    tiles: Vector<Tile>,
}

impl Board {
    /// Build a shuffled board.
    ///
    /// Lays out `tiles_per_color` copies of every configured color, shuffles
    /// them uniformly and assigns one per cell in row-major order.
    pub fn initialize(config: &BoardConfig, rng: &mut GameRng) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut colors: Vec<Color> = config
            .colors
            .iter()
            .flat_map(|&color| std::iter::repeat(color).take(config.tiles_per_color))
            .collect();
        rng.shuffle(&mut colors);

        Self::from_colors(config.grid_size, &colors)
    }

    /// Build a board with a known layout, row-major.
    pub fn from_colors(grid_size: usize, colors: &[Color]) -> Result<Self, ConfigError> {
        let shape_error = ConfigError::BoardShape {
            tiles: colors.len(),
            grid_size,
        };
        if grid_size == 0 || grid_size.checked_mul(grid_size) != Some(colors.len()) {
            return Err(shape_error);
        }
        if colors.len() > MAX_TILES {
            return Err(shape_error);
        }

        let tiles = colors
            .iter()
            .enumerate()
            .map(|(i, &color)| Tile::new(TileId(i as u16), color))
            .collect();

        Ok(Self { grid_size, tiles })
    }

    /// Tiles per side.
    #[must_use]
    pub fn grid_size(&self) -> usize {
        self.grid_size
    }

    /// Total number of tiles, removed ones included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    #[must_use]
    pub fn tile(&self, id: TileId) -> Option<&Tile> {
        self.tiles.get(id.index())
    }

    #[must_use]
    pub fn tile_at(&self, position: Position) -> Option<&Tile> {
        position
            .to_index(self.grid_size)
            .and_then(|index| self.tiles.get(index))
    }

    /// Grid position of a tile.
    #[must_use]
    pub fn position_of(&self, id: TileId) -> Option<Position> {
        (id.index() < self.tiles.len()).then(|| Position::from_index(id.index(), self.grid_size))
    }

    /// All tiles in row-major order.
    pub fn tiles(&self) -> impl Iterator<Item = &Tile> {
        self.tiles.iter()
    }

    /// Tiles that can still be picked.
    pub fn selectable(&self) -> impl Iterator<Item = &Tile> {
        self.tiles.iter().filter(|tile| tile.is_selectable())
    }

    /// Number of tiles still in play.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.selectable().count()
    }

    #[must_use]
    pub fn removed_count(&self) -> usize {
        self.len() - self.remaining()
    }

    /// True once every tile has been removed.
    #[must_use]
    pub fn is_cleared(&self) -> bool {
        self.remaining() == 0
    }

    /// How many tiles of each color the board holds, removed ones included.
    #[must_use]
    pub fn color_counts(&self) -> FxHashMap<Color, usize> {
        let mut counts = FxHashMap::default();
        for tile in &self.tiles {
            *counts.entry(tile.color).or_insert(0) += 1;
        }
        counts
    }

    /// True for a well-formed board no tile of which has been touched: the
    /// grid is full, every id matches its index and nothing is revealed or
    /// removed.
    #[must_use]
    pub fn is_unplayed(&self) -> bool {
        self.grid_size.checked_mul(self.grid_size) == Some(self.tiles.len())
            && self.tiles.iter().enumerate().all(|(i, tile)| {
                tile.id.index() == i && !tile.is_revealed() && !tile.is_removed()
            })
    }

    pub(crate) fn tile_mut(&mut self, id: TileId) -> Option<&mut Tile> {
        self.tiles.get_mut(id.index())
    }
}
