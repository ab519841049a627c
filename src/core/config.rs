//! Game configuration types.
//!
//! - `BoardConfig`: grid size, color set and copies per color
//! - `GameConfig`: board plus table rules (starting seat, memory policy)
//!
//! Both default to the reference game: a 6x6 grid holding six copies of each
//! of six colors, human to move first.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::color::Color;
use super::error::ConfigError;
use super::player::Player;

/// Largest board a `TileId` can address.
pub const MAX_TILES: usize = u16::MAX as usize + 1;

/// Color set of a board. Inline for up to eight colors.
pub type ColorSet = SmallVec<[Color; 8]>;

/// Board sizing.
///
/// Valid only when `colors.len() * tiles_per_color == grid_size^2`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardConfig {
    /// Tiles per side of the square grid.
    pub grid_size: usize,

    /// Distinct colors in play. The die rolls over exactly this set.
    pub colors: ColorSet,

    /// Copies of each color on the board.
    pub tiles_per_color: usize,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            grid_size: 6,
            colors: SmallVec::from_slice(&Color::PALETTE),
            tiles_per_color: 6,
        }
    }
}

impl BoardConfig {
    /// Create a board configuration. Not validated until `validate` or
    /// board construction.
    pub fn new(grid_size: usize, colors: &[Color], tiles_per_color: usize) -> Self {
        Self {
            grid_size,
            colors: SmallVec::from_slice(colors),
            tiles_per_color,
        }
    }

    #[must_use]
    pub fn with_grid_size(mut self, grid_size: usize) -> Self {
        self.grid_size = grid_size;
        self
    }

    #[must_use]
    pub fn with_colors(mut self, colors: &[Color]) -> Self {
        self.colors = SmallVec::from_slice(colors);
        self
    }

    #[must_use]
    pub fn with_tiles_per_color(mut self, tiles_per_color: usize) -> Self {
        self.tiles_per_color = tiles_per_color;
        self
    }

    /// Number of cells on the grid, `None` if it overflows `usize`.
    #[must_use]
    pub fn cell_count(&self) -> Option<usize> {
        self.grid_size.checked_mul(self.grid_size)
    }

    /// Check the sizing constraints.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.grid_size == 0 {
            return Err(ConfigError::ZeroGridSize);
        }
        if self.colors.is_empty() {
            return Err(ConfigError::NoColors);
        }
        if self.tiles_per_color == 0 {
            return Err(ConfigError::ZeroTilesPerColor);
        }
        for (i, color) in self.colors.iter().enumerate() {
            if self.colors[..i].contains(color) {
                return Err(ConfigError::DuplicateColor(*color));
            }
        }

        let cells = self
            .cell_count()
            .filter(|&cells| cells <= MAX_TILES)
            .ok_or(ConfigError::TooLarge {
                grid_size: self.grid_size,
            })?;
        if self.colors.len().checked_mul(self.tiles_per_color) != Some(cells) {
            return Err(ConfigError::SizeMismatch {
                colors: self.colors.len(),
                tiles_per_color: self.tiles_per_color,
                cells,
            });
        }

        Ok(())
    }
}

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub board: BoardConfig,

    /// Seat that rolls first.
    pub starting_player: Player,

    /// Drop a tile from every memory store once it is removed.
    ///
    /// Removed tiles are never chosen either way; this only keeps the
    /// stores from holding dead entries.
    pub forget_on_removal: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board: BoardConfig::default(),
            starting_player: Player::Human,
            forget_on_removal: true,
        }
    }
}

impl GameConfig {
    pub fn new(board: BoardConfig) -> Self {
        Self {
            board,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_starting_player(mut self, player: Player) -> Self {
        self.starting_player = player;
        self
    }

    #[must_use]
    pub fn with_forget_on_removal(mut self, forget: bool) -> Self {
        self.forget_on_removal = forget;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_reference_game() {
        let config = BoardConfig::default();
        assert_eq!(config.grid_size, 6);
        assert_eq!(config.colors.len(), 6);
        assert_eq!(config.tiles_per_color, 6);
        assert_eq!(config.cell_count(), Some(36));
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn test_size_mismatch() {
        let config = BoardConfig::default().with_colors(&Color::PALETTE[..5]);
        assert_eq!(
            config.validate(),
            Err(ConfigError::SizeMismatch {
                colors: 5,
                tiles_per_color: 6,
                cells: 36,
            })
        );
    }

    #[test]
    fn test_zero_values() {
        assert_eq!(
            BoardConfig::default().with_grid_size(0).validate(),
            Err(ConfigError::ZeroGridSize)
        );
        assert_eq!(
            BoardConfig::default().with_colors(&[]).validate(),
            Err(ConfigError::NoColors)
        );
        assert_eq!(
            BoardConfig::default().with_tiles_per_color(0).validate(),
            Err(ConfigError::ZeroTilesPerColor)
        );
    }

    #[test]
    fn test_oversized_grid() {
        assert_eq!(
            BoardConfig::new(1 << 33, &[Color::RED], 1).validate(),
            Err(ConfigError::TooLarge { grid_size: 1 << 33 })
        );
        assert_eq!(
            BoardConfig::new(257, &[Color::RED], 257 * 257).validate(),
            Err(ConfigError::TooLarge { grid_size: 257 })
        );
        assert_eq!(BoardConfig::new(1 << 33, &[Color::RED], 1).cell_count(), None);
    }

    #[test]
    fn test_tiles_per_color_overflow() {
        let config = BoardConfig::new(2, &[Color::RED, Color::BLUE], usize::MAX);
        assert_eq!(
            config.validate(),
            Err(ConfigError::SizeMismatch {
                colors: 2,
                tiles_per_color: usize::MAX,
                cells: 4,
            })
        );
    }

    #[test]
    fn test_duplicate_color() {
        let config = BoardConfig::new(2, &[Color::RED, Color::RED], 2);
        assert_eq!(config.validate(), Err(ConfigError::DuplicateColor(Color::RED)));
    }

    #[test]
    fn test_small_boards() {
        assert_eq!(BoardConfig::new(1, &[Color::BLUE], 1).validate(), Ok(()));
        assert_eq!(BoardConfig::new(2, &[Color::RED, Color::BLUE], 2).validate(), Ok(()));
        assert_eq!(BoardConfig::new(4, &Color::PALETTE[..2], 8).validate(), Ok(()));
    }

    #[test]
    fn test_game_config_builder() {
        let config = GameConfig::new(BoardConfig::new(2, &[Color::RED], 4))
            .with_starting_player(Player::Computer)
            .with_forget_on_removal(false);

        assert_eq!(config.board.grid_size, 2);
        assert_eq!(config.starting_player, Player::Computer);
        assert!(!config.forget_on_removal);
    }

    #[test]
    fn test_config_serde() {
        let config = GameConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: GameConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
