//! Board, tiles and grid positions.
//!
//! The board is an arena: tiles live in a fixed vector and are referred to
//! by `TileId` everywhere else in the crate.

mod grid;
mod position;
mod tile;

pub use grid::Board;
pub use position::Position;
pub use tile::{Tile, TileId};
