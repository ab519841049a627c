//! Memory-driven computer player.
//!
//! Prefers tiles it remembers in the rolled color, then tiles it has never
//! seen, and only then any tile still in play. Ties break uniformly.

use log::trace;

use super::{Agent, TurnView};
use crate::board::{Position, TileId};
use crate::core::GameRng;

/// Which rule produced the candidate set.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tier {
    /// Tiles remembered as the rolled color.
    Remembered,
    /// Tiles never seen.
    Unknown,
    /// Every remaining tile; all of them are remembered as other colors.
    Forced,
}

/// Tiles the computer will choose from, uniformly.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Candidates {
    pub tier: Tier,
    pub tiles: Vec<TileId>,
}

/// Memory-driven opponent.
///
/// Picks a tile remembered as the rolled color if there is one, otherwise
/// a tile it has never seen, otherwise any remaining tile. Ties are broken
/// uniformly at random with the game RNG. Without a memory store every
/// tile is unknown, so it plays uniformly at random.
#[derive(Clone, Copy, Debug, Default)]
pub struct ComputerAgent;

impl ComputerAgent {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Candidate set for this turn. Removed tiles are never candidates, even
    /// if the memory still holds them.
    #[must_use]
    pub fn candidates(view: &TurnView<'_>) -> Candidates {
        let remembered = |id: TileId| view.memory.and_then(|memory| memory.color_of(id));
        let remaining: Vec<TileId> = view.board.selectable().map(|tile| tile.id).collect();

        let matching: Vec<TileId> = remaining
            .iter()
            .copied()
            .filter(|&id| remembered(id) == Some(view.rolled))
            .collect();
        if !matching.is_empty() {
            return Candidates {
                tier: Tier::Remembered,
                tiles: matching,
            };
        }

        let unknown: Vec<TileId> = remaining
            .iter()
            .copied()
            .filter(|&id| remembered(id).is_none())
            .collect();
        if !unknown.is_empty() {
            return Candidates {
                tier: Tier::Unknown,
                tiles: unknown,
            };
        }

        Candidates {
            tier: Tier::Forced,
            tiles: remaining,
        }
    }
}

impl Agent for ComputerAgent {
    fn select(&mut self, view: &TurnView<'_>, rng: &mut GameRng) -> Option<Position> {
        let candidates = Self::candidates(view);
        trace!(
            "{} looking for {}: {:?} tier, {} candidates",
            view.player,
            view.rolled,
            candidates.tier,
            candidates.tiles.len()
        );

        let tile = match candidates.tiles.as_slice() {
            [only] => *only,
            tiles => *rng.choose(tiles)?,
        };
        view.board.position_of(tile)
    }
}
