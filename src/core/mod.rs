//! Core types: colors, players, RNG, configuration and errors.
//!
//! Everything here is independent of the board and the turn rules.

pub mod color;
pub mod config;
pub mod error;
pub mod player;
pub mod rng;

pub use color::Color;
pub use config::{BoardConfig, ColorSet, GameConfig, MAX_TILES};
pub use error::{ConfigError, GameError, PickError, Result};
pub use player::{Player, PlayerMap};
pub use rng::{GameRng, GameRngState};
