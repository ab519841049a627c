//! # memory-chess
//!
//! Turn engine for a dice-driven memory matching game.
//!
//! A square board of face-down colored tiles sits between a human and a
//! computer opponent. Each turn the active seat rolls a color die and turns
//! over one tile. A tile of the rolled color is removed and scores a point,
//! and the same seat rolls again. Any other color is turned back over and
//! the turn passes. The game ends when the board is empty.
//!
//! ## Design Principles
//!
//! 1. **Deterministic**: One seeded `GameRng` drives the shuffle, the die
//!    and the computer's tie-breaks, so games replay exactly.
//!
//! 2. **Arena identity**: Tiles live in a fixed vector and are named by
//!    `TileId`, which is what the computer's `MemoryStore` keys on.
//!
//! 3. **Instant transitions**: The engine never waits. Shells add
//!    reveal/hide delays around `roll`/`pick` using `PickOutcome` and
//!    `GameSnapshot`.
//!
//! ## Modules
//!
//! - `core`: Colors, players, RNG, configuration, errors
//! - `board`: Tiles, positions and the board arena
//! - `dice`: The color die
//! - `memory`: Per-agent memory of revealed tiles
//! - `engine`: Phases, state, snapshots and `TurnEngine`
//! - `agents`: `Agent` trait with human and computer strategies

pub mod agents;
pub mod board;
pub mod core;
pub mod dice;
pub mod engine;
pub mod memory;

// Re-export commonly used types
pub use crate::core::{
    BoardConfig, Color, ConfigError, GameConfig, GameError, GameRng, GameRngState, PickError,
    Player, PlayerMap, Result,
};

pub use crate::board::{Board, Position, Tile, TileId};

pub use crate::dice::Die;

pub use crate::memory::MemoryStore;

pub use crate::engine::{
    GameResult, GameSnapshot, GameState, Phase, PickOutcome, TileView, TurnEngine,
};

pub use crate::agents::{Agent, Candidates, ComputerAgent, HumanAgent, Tier, TurnView};
