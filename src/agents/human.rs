//! Human player: picks come from outside the engine.

use log::warn;

use super::{Agent, TurnView};
use crate::board::Position;
use crate::core::{GameRng, PickError};

/// Seat driven by external input.
///
/// The shell maps a pointer event to a grid position and `submit`s it.
/// A submission that lands off the board or on a removed tile is dropped
/// and recorded in `last_rejection`; the turn is not consumed and the shell
/// should prompt again.
#[derive(Clone, Debug, Default)]
pub struct HumanAgent {
    pending: Option<Position>,
    last_rejection: Option<PickError>,
}

impl HumanAgent {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a position. Replaces any earlier unconsumed submission.
    pub fn submit(&mut self, position: Position) {
        self.pending = Some(position);
        self.last_rejection = None;
    }

    #[must_use]
    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Why the most recent submission was dropped, if it was.
    #[must_use]
    pub fn last_rejection(&self) -> Option<PickError> {
        self.last_rejection
    }
}

impl Agent for HumanAgent {
    fn select(&mut self, view: &TurnView<'_>, _rng: &mut GameRng) -> Option<Position> {
        let position = self.pending.take()?;

        let rejection = match view.board.tile_at(position) {
            None => Some(PickError::OffBoard(position)),
            Some(tile) if tile.is_removed() => Some(PickError::Removed(tile.id)),
            Some(_) => None,
        };

        match rejection {
            Some(err) => {
                warn!("{}: {err}, waiting for another pick", view.player);
                self.last_rejection = Some(err);
                None
            }
            None => Some(position),
        }
    }
}
