//! Board coordinates.
//!
//! - `TilePos`: any coordinate, including the off-board sentinel.
//! - `BoardPos`: a coordinate known to lie on a board. Only
//!   `PositionFactory` hands these out.
//!
//! Coordinates are `(i, j)` = (row, column), both 0-based. Positions are
//! named with a column letter and a 1-based row, so `(0, 0)` is `a1` and
//! `(2, 1)` is `b3`.
//!
//! ## Usage
//!
//! ```
//! use the_drake::core::{PositionFactory, TilePos};
//!
//! let factory = PositionFactory::new(4);
//!
//! let pos = factory.pos(2, 1).unwrap();
//! assert_eq!(pos.to_string(), "b3");
//! assert_eq!(factory.pos_named("b3").unwrap(), pos);
//!
//! assert!(factory.pos(4, 0).is_err());
//! assert!(TilePos::OFF_BOARD.is_off_board());
//! ```

use serde::{Deserialize, Serialize};

use super::error::{DrakeError, DrakeResult};

/// Positions past column `z` have no letter name.
const NAMED_COLUMNS: usize = 26;

fn write_name(f: &mut std::fmt::Formatter<'_>, i: usize, j: usize) -> std::fmt::Result {
    if j < NAMED_COLUMNS {
        write!(f, "{}{}", char::from(b'a' + j as u8), i + 1)
    } else {
        write!(f, "({i}, {j})")
    }
}

/// A coordinate that may or may not be on a board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TilePos {
    /// Not on any board.
    OffBoard,
    /// Row `i`, column `j`. Not checked against any dimension.
    On { i: usize, j: usize },
}

impl TilePos {
    /// The off-board sentinel.
    pub const OFF_BOARD: TilePos = TilePos::OffBoard;

    #[must_use]
    pub const fn new(i: usize, j: usize) -> Self {
        TilePos::On { i, j }
    }

    /// `(i, j)` or `None` for the off-board sentinel.
    #[must_use]
    pub const fn coords(self) -> Option<(usize, usize)> {
        match self {
            TilePos::OffBoard => None,
            TilePos::On { i, j } => Some((i, j)),
        }
    }

    #[must_use]
    pub const fn is_off_board(self) -> bool {
        matches!(self, TilePos::OffBoard)
    }

    /// Check whether this position is `(i, j)`.
    #[must_use]
    pub fn equals_to(self, i: usize, j: usize) -> bool {
        self.coords() == Some((i, j))
    }
}

impl From<BoardPos> for TilePos {
    fn from(pos: BoardPos) -> Self {
        TilePos::On { i: pos.i, j: pos.j }
    }
}

impl From<&BoardPos> for TilePos {
    fn from(pos: &BoardPos) -> Self {
        TilePos::from(*pos)
    }
}

impl std::fmt::Display for TilePos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match *self {
            TilePos::OffBoard => write!(f, "off-board"),
            TilePos::On { i, j } => write_name(f, i, j),
        }
    }
}

/// A position on a board.
///
/// Ordered row-major, so maps keyed by `BoardPos` iterate the board from
/// `a1` upward.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct BoardPos {
    i: usize,
    j: usize,
}

impl BoardPos {
    /// Caller guarantees `(i, j)` lies on the board in use.
    pub(crate) const fn new_unchecked(i: usize, j: usize) -> Self {
        Self { i, j }
    }

    /// Row.
    #[must_use]
    pub const fn i(self) -> usize {
        self.i
    }

    /// Column.
    #[must_use]
    pub const fn j(self) -> usize {
        self.j
    }

    /// Check whether `other` is an orthogonal neighbour.
    #[must_use]
    pub fn is_next_to(self, other: BoardPos) -> bool {
        self.i.abs_diff(other.i) + self.j.abs_diff(other.j) == 1
    }
}

impl PartialEq<TilePos> for BoardPos {
    fn eq(&self, other: &TilePos) -> bool {
        other.equals_to(self.i, self.j)
    }
}

impl std::fmt::Display for BoardPos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write_name(f, self.i, self.j)
    }
}

/// Produces `BoardPos` values for a board of a given dimension.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PositionFactory {
    dimension: usize,
}

impl PositionFactory {
    #[must_use]
    pub const fn new(dimension: usize) -> Self {
        Self { dimension }
    }

    #[must_use]
    pub const fn dimension(&self) -> usize {
        self.dimension
    }

    /// Position at row `i`, column `j`.
    pub fn pos(&self, i: usize, j: usize) -> DrakeResult<BoardPos> {
        if i < self.dimension && j < self.dimension {
            Ok(BoardPos::new_unchecked(i, j))
        } else {
            Err(self.out_of_bounds(i as isize, j as isize))
        }
    }

    /// Position from its name, e.g. `"a1"` or `"c4"`.
    pub fn pos_named(&self, name: &str) -> DrakeResult<BoardPos> {
        let invalid = || DrakeError::InvalidPosName(name.to_string());

        let mut chars = name.chars();
        let column = chars.next().filter(char::is_ascii_lowercase).ok_or_else(invalid)?;
        let digits = chars.as_str();
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        let row: usize = digits.parse().map_err(|_| invalid())?;
        if row == 0 {
            return Err(invalid());
        }

        self.pos(row - 1, (column as u8 - b'a') as usize)
    }

    /// Convert a `TilePos` into a position on this board.
    pub fn check(&self, pos: TilePos) -> DrakeResult<BoardPos> {
        let (i, j) = pos.coords().ok_or(DrakeError::OffBoard)?;
        self.pos(i, j)
    }

    /// Position `di` rows and `dj` columns away from `pos`.
    pub fn step(&self, pos: BoardPos, di: isize, dj: isize) -> DrakeResult<BoardPos> {
        match (pos.i.checked_add_signed(di), pos.j.checked_add_signed(dj)) {
            (Some(i), Some(j)) => self.pos(i, j),
            _ => Err(self.out_of_bounds(
                (pos.i as isize).saturating_add(di),
                (pos.j as isize).saturating_add(dj),
            )),
        }
    }

    /// Orthogonal neighbours of `pos` that lie on the board.
    #[must_use]
    pub fn neighbours(&self, pos: BoardPos) -> Vec<BoardPos> {
        [(1, 0), (0, 1), (-1, 0), (0, -1)]
            .into_iter()
            .filter_map(|(di, dj)| self.step(pos, di, dj).ok())
            .collect()
    }

    /// Every position on the board in row-major order.
    pub fn all(&self) -> impl Iterator<Item = BoardPos> {
        let dimension = self.dimension;
        (0..dimension).flat_map(move |i| (0..dimension).map(move |j| BoardPos::new_unchecked(i, j)))
    }

    fn out_of_bounds(&self, i: isize, j: isize) -> DrakeError {
        DrakeError::OutOfBounds {
            i,
            j,
            dimension: self.dimension,
        }
    }
}
