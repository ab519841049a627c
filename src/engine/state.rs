//! Game state, pick outcomes and the read-only snapshot handed to shells.
//!
//! ## GameState
//!
//! Owned and mutated only by `TurnEngine`:
//! - Board and die
//! - Scores per seat
//! - Active seat, phase and turn counter
//! - History of resolved picks
//!
//! ## GameSnapshot
//!
//! What a presentation shell needs to draw one frame. Hidden tile colors are
//! not part of it.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::phase::Phase;
use crate::board::{Board, Position, Tile, TileId};
use crate::core::{Color, Player, PlayerMap};
use crate::dice::Die;

/// Final result of a finished game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    Winner(Player),
    Draw,
}

impl GameResult {
    /// Decide the result from final scores.
    #[must_use]
    pub fn from_scores(scores: &PlayerMap<u32>) -> Self {
        let human = scores[Player::Human];
        let computer = scores[Player::Computer];
        match human.cmp(&computer) {
            std::cmp::Ordering::Greater => GameResult::Winner(Player::Human),
            std::cmp::Ordering::Less => GameResult::Winner(Player::Computer),
            std::cmp::Ordering::Equal => GameResult::Draw,
        }
    }

    #[must_use]
    pub fn is_winner(&self, player: Player) -> bool {
        matches!(self, GameResult::Winner(p) if *p == player)
    }
}

/// One resolved pick.
///
/// Returned from every successful pick so the shell can play the
/// reveal-then-hide (or remove) sequence after the fact, and kept in the
/// game history.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PickOutcome {
    /// Turn the pick was made in.
    pub turn: u32,
    pub player: Player,
    pub tile: TileId,
    pub position: Position,
    /// Color the die showed.
    pub rolled: Color,
    /// Color the tile turned out to be.
    pub revealed: Color,
    pub matched: bool,
    /// Phase the engine moved to.
    pub next: Phase,
}

/// Complete engine-owned game state.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GameState {
    pub(crate) board: Board,
    pub(crate) die: Die,
    pub(crate) scores: PlayerMap<u32>,
    pub(crate) active_player: Player,
    pub(crate) phase: Phase,
    pub(crate) turn_number: u32,
    pub(crate) history: Vector<PickOutcome>,
}

impl GameState {
    pub(crate) fn new(board: Board, starting_player: Player) -> Self {
        Self {
            board,
            die: Die::new(),
            scores: PlayerMap::with_default(),
            active_player: starting_player,
            phase: Phase::AwaitingRoll(starting_player),
            turn_number: 1,
            history: Vector::new(),
        }
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn die(&self) -> &Die {
        &self.die
    }

    #[must_use]
    pub fn scores(&self) -> &PlayerMap<u32> {
        &self.scores
    }

    #[must_use]
    pub fn score(&self, player: Player) -> u32 {
        self.scores[player]
    }

    /// Seat whose turn it is. After the game ends, the seat that made the
    /// last pick.
    #[must_use]
    pub fn active_player(&self) -> Player {
        self.active_player
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Starts at 1, advances each time the turn passes.
    #[must_use]
    pub fn turn_number(&self) -> u32 {
        self.turn_number
    }

    /// Resolved picks, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<PickOutcome> {
        &self.history
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.phase.is_over()
    }

    /// Result, once the game is over.
    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        self.is_over().then(|| GameResult::from_scores(&self.scores))
    }
}

/// How a tile looks to someone at the table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TileView {
    Hidden,
    Revealed(Color),
    Removed,
}

impl TileView {
    #[must_use]
    pub fn of(tile: &Tile) -> Self {
        if tile.is_removed() {
            TileView::Removed
        } else if tile.is_revealed() {
            TileView::Revealed(tile.color)
        } else {
            TileView::Hidden
        }
    }
}

/// Read-only view of the game after a transition.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub grid_size: usize,
    /// Row-major.
    pub tiles: Vec<TileView>,
    pub scores: PlayerMap<u32>,
    pub active_player: Player,
    pub phase: Phase,
    /// Last die result.
    pub rolled: Option<Color>,
    pub turn_number: u32,
    pub last_pick: Option<PickOutcome>,
    pub over: bool,
    pub result: Option<GameResult>,
}

impl GameSnapshot {
    pub(crate) fn capture(state: &GameState) -> Self {
        Self {
            grid_size: state.board.grid_size(),
            tiles: state.board.tiles().map(TileView::of).collect(),
            scores: state.scores.clone(),
            active_player: state.active_player,
            phase: state.phase,
            rolled: state.die.current(),
            turn_number: state.turn_number,
            last_pick: state.history.last().copied(),
            over: state.is_over(),
            result: state.result(),
        }
    }

    #[must_use]
    pub fn tile_at(&self, position: Position) -> Option<TileView> {
        position
            .to_index(self.grid_size)
            .and_then(|index| self.tiles.get(index).copied())
    }

    /// Tiles still in play.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.tiles.iter().filter(|view| **view != TileView::Removed).count()
    }
}
