//! Tiles: what occupies a board cell.
//!
//! The board holds terrain (`BoardTile`); troops live in a separate layer
//! (`crate::troops::TroopTile`). Both answer the same two questions through
//! the `Tile` trait.

use serde::{Deserialize, Serialize};

/// Common queries over anything that can sit on a board cell.
pub trait Tile {
    /// Can a troop step onto this tile?
    fn can_step_on(&self) -> bool;

    /// Does this tile hold a troop?
    fn has_troop(&self) -> bool;
}

/// Terrain marker for a board cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BoardTile {
    /// Open ground. Every cell starts empty.
    #[default]
    Empty,
    /// Impassable terrain.
    Mountain,
}

impl Tile for BoardTile {
    fn can_step_on(&self) -> bool {
        matches!(self, BoardTile::Empty)
    }

    fn has_troop(&self) -> bool {
        false
    }
}

impl std::fmt::Display for BoardTile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BoardTile::Empty => write!(f, "empty"),
            BoardTile::Mountain => write!(f, "mountain"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_empty() {
        assert_eq!(BoardTile::default(), BoardTile::Empty);
    }

    #[test]
    fn test_tile_queries() {
        assert!(BoardTile::Empty.can_step_on());
        assert!(!BoardTile::Mountain.can_step_on());
        assert!(!BoardTile::Empty.has_troop());
        assert!(!BoardTile::Mountain.has_troop());
    }
}
