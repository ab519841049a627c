//! Agents that choose which tile to turn over.
//!
//! The engine never decides for a seat. It hands the active agent a
//! read-only `TurnView` and applies whatever position comes back:
//! - `HumanAgent`: relays a position submitted by the shell
//! - `ComputerAgent`: picks from memory, then unknown tiles, then anything

mod computer;
mod human;

pub use computer::{Candidates, ComputerAgent, Tier};
pub use human::HumanAgent;

use crate::board::{Board, Position};
use crate::core::{Color, GameRng, Player};
use crate::memory::MemoryStore;

/// Everything an agent may look at when picking.
#[derive(Clone, Copy, Debug)]
pub struct TurnView<'a> {
    pub board: &'a Board,
    pub player: Player,
    pub rolled: Color,
    /// The acting seat's memory, if it keeps one.
    pub memory: Option<&'a MemoryStore>,
}

/// Tile selection strategy.
pub trait Agent {
    /// Choose a tile to reveal.
    ///
    /// Returns `None` when the agent is waiting for external input; the
    /// engine stays in the same phase and asks again later.
    fn select(&mut self, view: &TurnView<'_>, rng: &mut GameRng) -> Option<Position>;
}
