//! The terrain grid.
//!
//! `Board` is an immutable square grid of `BoardTile`s backed by an
//! `im::Vector` in row-major order. `with_tiles` returns a new board that
//! shares every untouched chunk with its predecessor.
//!
//! ## Usage
//!
//! ```
//! use the_drake::board::{Board, BoardTile, TileAt};
//!
//! let board = Board::new(4);
//! let factory = board.position_factory();
//! let b2 = factory.pos(1, 1).unwrap();
//!
//! let rocky = board.with_tiles([TileAt::new(b2, BoardTile::Mountain)]).unwrap();
//!
//! assert_eq!(rocky.at(b2).unwrap(), BoardTile::Mountain);
//! assert_eq!(board.at(b2).unwrap(), BoardTile::Empty);
//! ```

use im::Vector;
use serde::{Deserialize, Serialize};
use tracing::trace;

use super::tile::BoardTile;
use crate::core::error::{DrakeError, DrakeResult};
use crate::core::position::{BoardPos, PositionFactory, TilePos};

/// A tile to place at a position, as passed to [`Board::with_tiles`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TileAt {
    pub pos: BoardPos,
    pub tile: BoardTile,
}

impl TileAt {
    #[must_use]
    pub const fn new(pos: BoardPos, tile: BoardTile) -> Self {
        Self { pos, tile }
    }
}

/// Square grid of terrain tiles.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "BoardRepr")]
pub struct Board {
    dimension: usize,
    tiles: Vector<BoardTile>,
}

#[derive(Deserialize)]
struct BoardRepr {
    dimension: usize,
    tiles: Vector<BoardTile>,
}

impl TryFrom<BoardRepr> for Board {
    type Error = DrakeError;

    fn try_from(repr: BoardRepr) -> DrakeResult<Self> {
        let expected = repr.dimension.checked_mul(repr.dimension).ok_or_else(|| {
            DrakeError::InvalidConfig(format!("board dimension {} is too large", repr.dimension))
        })?;
        if repr.tiles.len() != expected {
            return Err(DrakeError::InvalidConfig(format!(
                "board of dimension {} needs {} tiles, found {}",
                repr.dimension,
                expected,
                repr.tiles.len()
            )));
        }
        Ok(Board {
            dimension: repr.dimension,
            tiles: repr.tiles,
        })
    }
}

impl Board {
    /// Create a `dimension` x `dimension` board of empty tiles.
    #[must_use]
    pub fn new(dimension: usize) -> Self {
        Self {
            dimension,
            tiles: std::iter::repeat(BoardTile::Empty)
                .take(dimension * dimension)
                .collect(),
        }
    }

    /// Side length of the grid.
    #[must_use]
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Tile at `pos`.
    ///
    /// Fails with an out-of-bounds error for positions past the edge and for
    /// the off-board sentinel.
    pub fn at(&self, pos: impl Into<TilePos>) -> DrakeResult<BoardTile> {
        let pos = self.position_factory().check(pos.into())?;
        Ok(self.tiles[self.index(pos)])
    }

    /// New board with each listed tile replaced.
    ///
    /// Changes apply in order, so a later entry for the same position wins.
    /// `self` is left untouched. If any position is off this board, no board
    /// is produced.
    pub fn with_tiles(&self, changes: impl IntoIterator<Item = TileAt>) -> DrakeResult<Board> {
        let factory = self.position_factory();
        let mut tiles = self.tiles.clone();
        let mut changed = 0usize;

        for TileAt { pos, tile } in changes {
            let pos = factory.check(pos.into())?;
            tiles[self.index(pos)] = tile;
            changed += 1;
        }

        trace!(dimension = self.dimension, changed, "rebuilt board");
        Ok(Board {
            dimension: self.dimension,
            tiles,
        })
    }

    /// Position factory bound to this board's dimension.
    #[must_use]
    pub fn position_factory(&self) -> PositionFactory {
        PositionFactory::new(self.dimension)
    }

    /// Iterate over every cell in row-major order.
    pub fn tiles(&self) -> impl Iterator<Item = (BoardPos, BoardTile)> + '_ {
        self.position_factory().all().zip(self.tiles.iter().copied())
    }

    fn index(&self, pos: BoardPos) -> usize {
        pos.i() * self.dimension + pos.j()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Tile;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new(5);

        assert_eq!(board.dimension(), 5);
        assert_eq!(board.tiles().count(), 25);
        assert!(board.tiles().all(|(_, tile)| tile == BoardTile::Empty));
    }

    #[test]
    fn test_at_out_of_bounds() {
        let board = Board::new(4);

        assert_eq!(
            board.at(TilePos::new(4, 0)),
            Err(DrakeError::OutOfBounds { i: 4, j: 0, dimension: 4 })
        );
        assert_eq!(board.at(TilePos::OFF_BOARD), Err(DrakeError::OffBoard));
    }

    #[test]
    fn test_with_tiles_leaves_original() {
        let board = Board::new(5);
        let factory = board.position_factory();
        let b2 = factory.pos(1, 1).unwrap();

        let changed = board.with_tiles([TileAt::new(b2, BoardTile::Mountain)]).unwrap();

        assert_eq!(changed.at(factory.pos(0, 0).unwrap()).unwrap(), BoardTile::Empty);
        assert_eq!(changed.at(b2).unwrap(), BoardTile::Mountain);
        assert_eq!(board.at(b2).unwrap(), BoardTile::Empty);
    }

    #[test]
    fn test_with_tiles_later_entry_wins() {
        let board = Board::new(3);
        let pos = board.position_factory().pos(2, 0).unwrap();

        let changed = board
            .with_tiles([
                TileAt::new(pos, BoardTile::Mountain),
                TileAt::new(pos, BoardTile::Empty),
            ])
            .unwrap();

        assert_eq!(changed.at(pos).unwrap(), BoardTile::Empty);
    }

    #[test]
    fn test_with_tiles_checks_bounds() {
        let small = Board::new(2);
        let far = PositionFactory::new(5).pos(4, 4).unwrap();

        let result = small.with_tiles([TileAt::new(far, BoardTile::Mountain)]);
        assert!(result.unwrap_err().is_out_of_bounds());
    }

    #[test]
    fn test_with_no_changes_is_equal() {
        let board = Board::new(4);
        assert_eq!(board.with_tiles([]).unwrap(), board);
    }

    #[test]
    fn test_tiles_row_major() {
        let board = Board::new(3);
        let factory = board.position_factory();
        let c2 = factory.pos(1, 2).unwrap();
        let board = board.with_tiles([TileAt::new(c2, BoardTile::Mountain)]).unwrap();

        let blocked: Vec<_> = board
            .tiles()
            .filter(|(_, tile)| !tile.can_step_on())
            .map(|(pos, _)| pos)
            .collect();
        assert_eq!(blocked, vec![c2]);
    }

    #[test]
    fn test_serialization() {
        let board = Board::new(3);
        let pos = board.position_factory().pos(0, 2).unwrap();
        let board = board.with_tiles([TileAt::new(pos, BoardTile::Mountain)]).unwrap();

        let json = serde_json::to_string(&board).unwrap();
        let deserialized: Board = serde_json::from_str(&json).unwrap();
        assert_eq!(board, deserialized);
    }

    #[test]
    fn test_deserialize_rejects_wrong_tile_count() {
        let json = r#"{"dimension":2,"tiles":["Empty","Empty","Mountain"]}"#;
        assert!(serde_json::from_str::<Board>(json).is_err());
    }

    #[test]
    fn test_deserialize_rejects_overflowing_dimension() {
        let json = format!(r#"{{"dimension":{},"tiles":[]}}"#, 1u64 << 32);
        assert!(serde_json::from_str::<Board>(&json).is_err());

        let json = format!(r#"{{"dimension":{},"tiles":[]}}"#, usize::MAX);
        assert!(serde_json::from_str::<Board>(&json).is_err());
    }
}
