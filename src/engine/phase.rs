//! Turn phases.

use serde::{Deserialize, Serialize};

use crate::core::{Color, Player};

/// Where the turn state machine currently stands.
///
/// ```text
/// AwaitingRoll(p) --roll--> AwaitingPick(p, c) --match--> AwaitingRoll(p) | GameOver
///                                              --miss---> AwaitingRoll(other(p))
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    AwaitingRoll(Player),
    AwaitingPick { player: Player, rolled: Color },
    GameOver,
}

impl Phase {
    /// Seat expected to act, if the game is still running.
    #[must_use]
    pub const fn player(self) -> Option<Player> {
        match self {
            Phase::AwaitingRoll(player) | Phase::AwaitingPick { player, .. } => Some(player),
            Phase::GameOver => None,
        }
    }

    /// Color the pending pick must match.
    #[must_use]
    pub const fn rolled(self) -> Option<Color> {
        match self {
            Phase::AwaitingPick { rolled, .. } => Some(rolled),
            _ => None,
        }
    }

    #[must_use]
    pub const fn is_over(self) -> bool {
        matches!(self, Phase::GameOver)
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Phase::AwaitingRoll(player) => write!(f, "waiting for {player} to roll"),
            Phase::AwaitingPick { player, rolled } => {
                write!(f, "waiting for {player} to pick a {rolled} tile")
            }
            Phase::GameOver => write!(f, "game over"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors() {
        let roll = Phase::AwaitingRoll(Player::Human);
        assert_eq!(roll.player(), Some(Player::Human));
        assert_eq!(roll.rolled(), None);

        let pick = Phase::AwaitingPick {
            player: Player::Computer,
            rolled: Color::BLUE,
        };
        assert_eq!(pick.player(), Some(Player::Computer));
        assert_eq!(pick.rolled(), Some(Color::BLUE));
        assert!(!pick.is_over());

        assert_eq!(Phase::GameOver.player(), None);
        assert!(Phase::GameOver.is_over());
    }

    #[test]
    fn test_display() {
        let pick = Phase::AwaitingPick {
            player: Player::Human,
            rolled: Color::RED,
        };
        assert_eq!(pick.to_string(), "waiting for Player to pick a red tile");
        assert_eq!(Phase::GameOver.to_string(), "game over");
    }
}
