//! Tile colors.
//!
//! The engine treats a `Color` as an opaque identifier and only compares
//! colors for equality. The first six ids carry the reference palette's
//! names and RGB values for shells that draw the board.

use serde::{Deserialize, Serialize};

/// Opaque tile color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Color(pub u8);

impl Color {
    pub const RED: Color = Color(0);
    pub const YELLOW: Color = Color(1);
    pub const BLUE: Color = Color(2);
    pub const GREEN: Color = Color(3);
    pub const BLACK: Color = Color(4);
    pub const PURPLE: Color = Color(5);

    /// The reference six-color palette.
    pub const PALETTE: [Color; 6] = [
        Color::RED,
        Color::YELLOW,
        Color::BLUE,
        Color::GREEN,
        Color::BLACK,
        Color::PURPLE,
    ];

    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn raw(self) -> u8 {
        self.0
    }

    /// Palette name, if this color is one of the reference six.
    #[must_use]
    pub const fn name(self) -> Option<&'static str> {
        match self.0 {
            0 => Some("red"),
            1 => Some("yellow"),
            2 => Some("blue"),
            3 => Some("green"),
            4 => Some("black"),
            5 => Some("purple"),
            _ => None,
        }
    }

    /// Palette RGB triple, if this color is one of the reference six.
    #[must_use]
    pub const fn rgb(self) -> Option<(u8, u8, u8)> {
        match self.0 {
            0 => Some((255, 0, 0)),
            1 => Some((255, 255, 0)),
            2 => Some((0, 0, 255)),
            3 => Some((0, 255, 0)),
            4 => Some((0, 0, 0)),
            5 => Some((128, 0, 128)),
            _ => None,
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.name() {
            Some(name) => f.write_str(name),
            None => write!(f, "Color({})", self.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_is_distinct() {
        let ids: rustc_hash::FxHashSet<_> = Color::PALETTE.iter().map(|c| c.raw()).collect();
        let rgbs: rustc_hash::FxHashSet<_> = Color::PALETTE.iter().map(|c| c.rgb()).collect();
        assert_eq!(ids.len(), Color::PALETTE.len());
        assert_eq!(rgbs.len(), Color::PALETTE.len());
        assert!(Color::PALETTE.iter().all(|c| c.rgb().is_some()));
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Color::RED), "red");
        assert_eq!(format!("{}", Color::PURPLE), "purple");
        assert_eq!(format!("{}", Color::new(9)), "Color(9)");
    }

    #[test]
    fn test_rgb() {
        assert_eq!(Color::PURPLE.rgb(), Some((128, 0, 128)));
        assert_eq!(Color::new(200).rgb(), None);
    }
}
