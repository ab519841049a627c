//! Error types.
//!
//! - `ConfigError`: bad board sizing. Fatal, the game does not start.
//! - `PickError`: a pick on a removed or nonexistent tile. The same agent is
//!   asked again and no state changes.
//! - `GameError`: everything `TurnEngine` can return, including actions
//!   attempted after the game ended or out of phase.

use thiserror::Error;

use super::color::Color;
use crate::board::{Position, TileId};
use crate::engine::Phase;

/// Board configuration rejected at initialization.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("grid size must be at least 1")]
    ZeroGridSize,

    #[error("at least one color is required")]
    NoColors,

    #[error("color {0} is listed more than once")]
    DuplicateColor(Color),

    #[error("tiles per color must be at least 1")]
    ZeroTilesPerColor,

    #[error("{colors} colors x {tiles_per_color} tiles does not fill {cells} cells")]
    SizeMismatch {
        colors: usize,
        tiles_per_color: usize,
        cells: usize,
    },

    #[error("a {grid_size}x{grid_size} grid is larger than any board can be")]
    TooLarge { grid_size: usize },

    #[error("{tiles} tiles cannot form a {grid_size}x{grid_size} grid")]
    BoardShape { tiles: usize, grid_size: usize },

    #[error("board layout does not match the configured colors")]
    LayoutMismatch,
}

/// Rejected tile selection.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickError {
    #[error("{0} is outside the board")]
    OffBoard(Position),

    #[error("{0} is not on this board")]
    UnknownTile(TileId),

    #[error("{0} has already been removed")]
    Removed(TileId),
}

/// Any error returned by the turn engine.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("invalid pick: {0}")]
    InvalidPick(#[from] PickError),

    #[error("game already ended, no new actions are accepted")]
    GameOver,

    #[error("cannot {action} while {phase}")]
    WrongPhase { action: &'static str, phase: Phase },
}

impl GameError {
    /// Whether the caller may simply retry with a different action.
    ///
    /// Only configuration errors are fatal.
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        !matches!(self, GameError::Config(_))
    }
}

pub type Result<T> = std::result::Result<T, GameError>;
