//! The two seats at the table and per-seat data storage.
//!
//! ## Player
//!
//! `Player::Human` is driven by external input, `Player::Computer` by the
//! memory-based agent. Turns alternate between them on a miss.
//!
//! ## PlayerMap
//!
//! Fixed two-slot storage indexed by `Player`, used for scores and memory.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// A seat at the table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    Human,
    Computer,
}

impl Player {
    /// Both seats, in seating order.
    pub const ALL: [Player; 2] = [Player::Human, Player::Computer];

    /// The seat that plays after this one.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Player::Human => Player::Computer,
            Player::Computer => Player::Human,
        }
    }

    /// Slot index used by `PlayerMap`.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Player::Human => 0,
            Player::Computer => 1,
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Player::Human => write!(f, "Player"),
            Player::Computer => write!(f, "Computer"),
        }
    }
}

/// Per-seat data storage.
///
/// ```
/// use memory_chess::core::{Player, PlayerMap};
///
/// let mut scores: PlayerMap<u32> = PlayerMap::with_default();
/// scores[Player::Computer] += 1;
/// assert_eq!(scores[Player::Human], 0);
/// assert_eq!(scores.total(), 1);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: [T; 2],
}

impl<T> PlayerMap<T> {
    /// Create with values from a factory function.
    pub fn new(factory: impl Fn(Player) -> T) -> Self {
        Self {
            data: Player::ALL.map(factory),
        }
    }

    /// Create with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    /// Create with default values.
    pub fn with_default() -> Self
    where
        T: Default,
    {
        Self::new(|_| T::default())
    }

    #[must_use]
    pub fn get(&self, player: Player) -> &T {
        &self.data[player.index()]
    }

    pub fn get_mut(&mut self, player: Player) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Iterate over (Player, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Player, &T)> {
        Player::ALL.into_iter().zip(self.data.iter())
    }

    /// Iterate over (Player, &mut T) pairs.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (Player, &mut T)> {
        Player::ALL.into_iter().zip(self.data.iter_mut())
    }
}

impl PlayerMap<u32> {
    /// Sum over both seats.
    #[must_use]
    pub fn total(&self) -> u32 {
        self.data.iter().sum()
    }
}

impl<T> Index<Player> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: Player) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<Player> for PlayerMap<T> {
    fn index_mut(&mut self, player: Player) -> &mut Self::Output {
        self.get_mut(player)
    }
}
