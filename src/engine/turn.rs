//! The turn state machine.
//!
//! `TurnEngine` owns the game state, the single RNG stream and the computer
//! seat's memory. Shells drive it synchronously:
//!
//! ```
//! use memory_chess::{ComputerAgent, GameConfig, Phase, TurnEngine};
//!
//! let mut engine = TurnEngine::new(GameConfig::default(), 42).unwrap();
//! let rolled = engine.roll().unwrap();
//! assert!(matches!(engine.phase(), Phase::AwaitingPick { .. }));
//!
//! let outcome = engine.request_pick(&mut ComputerAgent::new()).unwrap().unwrap();
//! assert_eq!(outcome.rolled, rolled);
//! ```
//!
//! Every transition is instant. Reveal/hide timing belongs to the shell,
//! which replays it from the returned `PickOutcome`.

use log::{debug, info, warn};

use super::phase::Phase;
use super::state::{GameResult, GameSnapshot, GameState, PickOutcome};
use crate::agents::{Agent, TurnView};
use crate::board::{Board, Position, TileId};
use crate::core::{
    Color, ConfigError, GameConfig, GameError, GameRng, GameRngState, PickError, Player,
    PlayerMap, Result,
};
use crate::memory::MemoryStore;

/// Turn engine for one game.
#[derive(Clone, Debug)]
pub struct TurnEngine {
    config: GameConfig,
    state: GameState,
    /// Per-seat memory. Only the computer seat keeps one.
    memories: PlayerMap<Option<MemoryStore>>,
    rng: GameRng,
}

impl TurnEngine {
    /// Start a game on a freshly shuffled board.
    ///
    /// Fails with `GameError::Config` if the board sizing is invalid.
    pub fn new(config: GameConfig, seed: u64) -> Result<Self> {
        let mut rng = GameRng::new(seed);
        let board = Board::initialize(&config.board, &mut rng)?;
        Ok(Self::start(config, board, rng))
    }

    /// Start a game on a board with a known layout.
    ///
    /// The layout must be unplayed and hold exactly `tiles_per_color`
    /// copies of each configured color on a grid of the configured size.
    pub fn with_board(config: GameConfig, board: Board, seed: u64) -> Result<Self> {
        config.board.validate()?;

        let counts = board.color_counts();
        let layout_matches = board.is_unplayed()
            && board.grid_size() == config.board.grid_size
            && counts.len() == config.board.colors.len()
            && config
                .board
                .colors
                .iter()
                .all(|color| counts.get(color) == Some(&config.board.tiles_per_color));
        if !layout_matches {
            return Err(ConfigError::LayoutMismatch.into());
        }

        Ok(Self::start(config, board, GameRng::new(seed)))
    }

    fn start(config: GameConfig, board: Board, rng: GameRng) -> Self {
        info!(
            "new game: {0}x{0} board, {1} colors, seed {2}, {3} to start",
            board.grid_size(),
            config.board.colors.len(),
            rng.seed(),
            config.starting_player
        );

        let state = GameState::new(board, config.starting_player);
        let memories = PlayerMap::new(|player| match player {
            Player::Human => None,
            Player::Computer => Some(MemoryStore::new()),
        });

        Self {
            config,
            state,
            memories,
            rng,
        }
    }

    // === Accessors ===

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.state.board
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.state.phase
    }

    #[must_use]
    pub fn active_player(&self) -> Player {
        self.state.active_player
    }

    #[must_use]
    pub fn scores(&self) -> &PlayerMap<u32> {
        &self.state.scores
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.state.is_over()
    }

    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        self.state.result()
    }

    /// A seat's memory store, if it keeps one.
    #[must_use]
    pub fn memory(&self, player: Player) -> Option<&MemoryStore> {
        self.memories[player].as_ref()
    }

    /// Current position of the RNG stream.
    #[must_use]
    pub fn rng_state(&self) -> GameRngState {
        self.rng.state()
    }

    /// Read-only view for rendering.
    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot::capture(&self.state)
    }

    // === Transitions ===

    /// Roll the die for the active seat.
    ///
    /// `AwaitingRoll(p)` moves to `AwaitingPick(p, color)`.
    pub fn roll(&mut self) -> Result<Color> {
        let player = match self.state.phase {
            Phase::AwaitingRoll(player) => player,
            phase => return Err(self.reject("roll", phase)),
        };

        let color = self
            .state
            .die
            .roll(&self.config.board.colors, &mut self.rng)
            .ok_or(ConfigError::NoColors)?;
        self.state.phase = Phase::AwaitingPick {
            player,
            rolled: color,
        };

        debug!("{player} rolled {color}");
        Ok(color)
    }

    /// Pick the tile at a grid position.
    pub fn pick(&mut self, position: Position) -> Result<PickOutcome> {
        self.ensure_picking()?;

        let tile = match self.state.board.tile_at(position) {
            Some(tile) => tile.id,
            None => return Err(self.reject_pick(PickError::OffBoard(position))),
        };
        self.pick_tile(tile)
    }

    /// Pick a tile by id and resolve it against the rolled color.
    ///
    /// A match removes the tile, scores a point and keeps the turn; the last
    /// match ends the game. A miss turns the tile back over and passes the
    /// turn. Rejected picks leave the state untouched.
    pub fn pick_tile(&mut self, tile: TileId) -> Result<PickOutcome> {
        let (player, rolled) = self.ensure_picking()?;

        let position = match self.state.board.position_of(tile) {
            Some(position) => position,
            None => return Err(self.reject_pick(PickError::UnknownTile(tile))),
        };
        let revealed = self
            .state
            .board
            .tile_mut(tile)
            .and_then(|t| t.reveal().then_some(t.color));
        let Some(revealed) = revealed else {
            return Err(self.reject_pick(PickError::Removed(tile)));
        };

        if let Some(memory) = self.memories[player].as_mut() {
            memory.record(tile, revealed);
        }

        let turn = self.state.turn_number;
        let matched = revealed == rolled;
        let next = if matched {
            self.resolve_match(player, tile)
        } else {
            self.resolve_miss(player, tile)
        };
        self.state.phase = next;

        let outcome = PickOutcome {
            turn,
            player,
            tile,
            position,
            rolled,
            revealed,
            matched,
            next,
        };
        self.state.history.push_back(outcome);

        debug!(
            "{player} picked {tile} at {position}: {revealed} vs {rolled}, {}",
            if matched { "match" } else { "miss" }
        );
        if let Some(result) = self.state.result() {
            info!(
                "game over after {} picks: {:?}, {} {} - {} {}",
                self.state.history.len(),
                result,
                Player::Human,
                self.state.scores[Player::Human],
                Player::Computer,
                self.state.scores[Player::Computer]
            );
        }

        Ok(outcome)
    }

    fn resolve_match(&mut self, player: Player, tile: TileId) -> Phase {
        if let Some(t) = self.state.board.tile_mut(tile) {
            t.remove();
        }
        self.state.scores[player] += 1;

        if self.config.forget_on_removal {
            for (_, memory) in self.memories.iter_mut() {
                if let Some(memory) = memory.as_mut() {
                    memory.forget(tile);
                }
            }
        }

        if self.state.board.is_cleared() {
            Phase::GameOver
        } else {
            Phase::AwaitingRoll(player)
        }
    }

    fn resolve_miss(&mut self, player: Player, tile: TileId) -> Phase {
        if let Some(t) = self.state.board.tile_mut(tile) {
            t.hide();
        }

        let next = player.other();
        self.state.active_player = next;
        self.state.turn_number += 1;
        debug!("turn {} passes to {next}", self.state.turn_number);

        Phase::AwaitingRoll(next)
    }

    // === Agents ===

    /// Ask an agent to pick for the active seat and apply its choice.
    ///
    /// Returns `Ok(None)` if the agent is still waiting for input.
    pub fn request_pick(&mut self, agent: &mut dyn Agent) -> Result<Option<PickOutcome>> {
        let (player, rolled) = self.ensure_picking()?;

        let view = TurnView {
            board: &self.state.board,
            player,
            rolled,
            memory: self.memories[player].as_ref(),
        };
        match agent.select(&view, &mut self.rng) {
            Some(position) => self.pick(position).map(Some),
            None => Ok(None),
        }
    }

    /// Roll if needed, then ask the agent to pick.
    pub fn play_turn(&mut self, agent: &mut dyn Agent) -> Result<Option<PickOutcome>> {
        if let Phase::AwaitingRoll(_) = self.state.phase {
            self.roll()?;
        }
        self.request_pick(agent)
    }

    /// Play until the game ends, each seat driven by its agent.
    ///
    /// Returns `Ok(None)` if an agent stops to wait for input.
    pub fn play_out(
        &mut self,
        human: &mut dyn Agent,
        computer: &mut dyn Agent,
    ) -> Result<Option<GameResult>> {
        while !self.is_over() {
            let agent: &mut dyn Agent = match self.state.active_player {
                Player::Human => &mut *human,
                Player::Computer => &mut *computer,
            };
            if self.play_turn(agent)?.is_none() {
                return Ok(None);
            }
        }
        Ok(self.result())
    }

    // === Guards ===

    fn ensure_picking(&self) -> Result<(Player, Color)> {
        match self.state.phase {
            Phase::AwaitingPick { player, rolled } => Ok((player, rolled)),
            phase => Err(self.reject("pick", phase)),
        }
    }

    fn reject(&self, action: &'static str, phase: Phase) -> GameError {
        let err = if phase.is_over() {
            GameError::GameOver
        } else {
            GameError::WrongPhase { action, phase }
        };
        warn!("{action} rejected: {err}");
        err
    }

    fn reject_pick(&self, err: PickError) -> GameError {
        warn!("{} must pick again: {err}", self.state.active_player);
        err.into()
    }
}
