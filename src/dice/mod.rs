//! The color die.
//!
//! Each turn starts with a roll that names the color the active player must
//! find. The die has one face per configured color, all equally likely.

use serde::{Deserialize, Serialize};

use crate::core::{Color, GameRng};

/// Color die holding the result of the last roll.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Die {
    current: Option<Color>,
}

impl Die {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Roll over `colors`, remembering and returning the result.
    ///
    /// Returns `None` only for an empty color set, leaving the die unchanged.
    pub fn roll(&mut self, colors: &[Color], rng: &mut GameRng) -> Option<Color> {
        let color = *rng.choose(colors)?;
        self.current = Some(color);
        Some(color)
    }

    /// Result of the last roll, if any.
    #[must_use]
    pub fn current(&self) -> Option<Color> {
        self.current
    }
}
