//! Game configuration.
//!
//! `GameConfig` describes the starting board: its dimension and any preset
//! terrain. It is plain serde data, so callers can keep it in JSON or TOML
//! alongside their own settings.
//!
//! ```
//! use the_drake::board::BoardTile;
//! use the_drake::core::{GameConfig, PositionFactory};
//!
//! let factory = PositionFactory::new(4);
//! let config = GameConfig::new(4).with_mountain(factory.pos(1, 2).unwrap());
//!
//! let board = config.build_board().unwrap();
//! assert_eq!(board.at(factory.pos(1, 2).unwrap()).unwrap(), BoardTile::Mountain);
//! ```

use serde::{Deserialize, Serialize};

use super::error::{DrakeError, DrakeResult};
use super::position::BoardPos;
use super::state::GameState;
use crate::board::{Board, BoardTile, TileAt};

/// Side length of the standard board.
pub const STANDARD_DIMENSION: usize = 4;

/// Largest board whose columns can all be named `a`..`z`.
pub const MAX_DIMENSION: usize = 26;

/// Starting layout of a game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Board side length.
    pub dimension: usize,

    /// Terrain placed on the board before setup. Later entries win.
    pub terrain: Vec<TileAt>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(STANDARD_DIMENSION)
    }
}

impl GameConfig {
    /// Config for an empty board of the given dimension.
    #[must_use]
    pub fn new(dimension: usize) -> Self {
        Self {
            dimension,
            terrain: Vec::new(),
        }
    }

    /// Add a preset terrain tile.
    #[must_use]
    pub fn with_tile(mut self, pos: BoardPos, tile: BoardTile) -> Self {
        self.terrain.push(TileAt::new(pos, tile));
        self
    }

    /// Add a mountain.
    #[must_use]
    pub fn with_mountain(self, pos: BoardPos) -> Self {
        self.with_tile(pos, BoardTile::Mountain)
    }

    /// Check the dimension range and that all terrain lies on the board.
    pub fn validate(&self) -> DrakeResult<()> {
        if self.dimension == 0 || self.dimension > MAX_DIMENSION {
            return Err(DrakeError::InvalidConfig(format!(
                "dimension must be in 1..={MAX_DIMENSION}, got {}",
                self.dimension
            )));
        }
        Board::new(self.dimension).with_tiles(self.terrain.iter().copied())?;
        Ok(())
    }

    /// Build the starting board.
    pub fn build_board(&self) -> DrakeResult<Board> {
        self.validate()?;
        Board::new(self.dimension).with_tiles(self.terrain.iter().copied())
    }

    /// Build the starting game state: the board with no troops placed.
    pub fn build_state(&self) -> DrakeResult<GameState> {
        Ok(GameState::new(self.build_board()?))
    }
}
