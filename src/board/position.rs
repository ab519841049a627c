//! Grid positions.

use serde::{Deserialize, Serialize};

/// Row/column on the grid, zero-based from the top-left.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Row-major index on a grid of the given size, or `None` if off the grid.
    #[must_use]
    pub const fn to_index(self, grid_size: usize) -> Option<usize> {
        if self.row < grid_size && self.col < grid_size {
            Some(self.row * grid_size + self.col)
        } else {
            None
        }
    }

    /// Inverse of `to_index`.
    #[must_use]
    pub const fn from_index(index: usize, grid_size: usize) -> Self {
        Self {
            row: index / grid_size,
            col: index % grid_size,
        }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_conversion() {
        assert_eq!(Position::new(0, 0).to_index(6), Some(0));
        assert_eq!(Position::new(1, 2).to_index(6), Some(8));
        assert_eq!(Position::new(5, 5).to_index(6), Some(35));
        assert_eq!(Position::from_index(8, 6), Position::new(1, 2));
    }

    #[test]
    fn test_off_grid() {
        assert_eq!(Position::new(6, 0).to_index(6), None);
        assert_eq!(Position::new(0, 6).to_index(6), None);
    }
}
