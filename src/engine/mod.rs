//! Turn engine: phases, state, snapshots and the state machine itself.
//!
//! `TurnEngine` is the only thing that mutates a game. Shells call
//! `roll`/`pick`, agents are consulted through `request_pick`, and
//! everything else reads `GameSnapshot`s.

mod phase;
mod state;
mod turn;

pub use phase::Phase;
pub use state::{GameResult, GameSnapshot, GameState, PickOutcome, TileView};
pub use turn::TurnEngine;
