//! Error types shared by every snapshot operation.
//!
//! All fallible operations return [`DrakeResult`]. A failed operation never
//! alters the snapshot it was called on, so callers can report the error and
//! keep playing from the same state.

use super::position::BoardPos;
use super::side::PlayingSide;
use crate::troops::TroopsPhase;

/// Coarse classification of a [`DrakeError`].
///
/// UI layers map kinds to player-facing messages without matching payloads.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A coordinate lies outside the board.
    OutOfBounds,
    /// A placement targets a tile that already holds a troop.
    PositionOccupied,
    /// The side has not finished placing its leader and guards.
    InvalidPhase,
    /// A step from a vacant origin or onto an occupied target.
    IllegalMove,
    /// The referenced tile holds no troop.
    NoSuchTroop,
    /// Malformed names, layouts or configuration.
    InvalidInput,
}

/// Errors produced by board and troop operations.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DrakeError {
    #[error("position ({i}, {j}) is outside a {dimension}x{dimension} board")]
    OutOfBounds { i: isize, j: isize, dimension: usize },

    #[error("off-board position has no tile")]
    OffBoard,

    #[error("position {0} already holds a troop")]
    PositionOccupied(BoardPos),

    #[error("{side} cannot act on troops while {phase}")]
    InvalidPhase { side: PlayingSide, phase: TroopsPhase },

    #[error("cannot step from {origin} to {target}")]
    IllegalMove { origin: BoardPos, target: BoardPos },

    #[error("no troop at {0}")]
    NoSuchTroop(BoardPos),

    #[error("invalid position name {0:?}")]
    InvalidPosName(String),

    #[error("board dimension mismatch: expected {expected}, found {found}")]
    DimensionMismatch { expected: usize, found: usize },

    #[error("invalid troop layout: {0}")]
    InvalidTroops(String),

    #[error("invalid config: {0}")]
    InvalidConfig(String),
}

impl DrakeError {
    /// Classify this error.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            DrakeError::OutOfBounds { .. } | DrakeError::OffBoard => ErrorKind::OutOfBounds,
            DrakeError::PositionOccupied(_) => ErrorKind::PositionOccupied,
            DrakeError::InvalidPhase { .. } => ErrorKind::InvalidPhase,
            DrakeError::IllegalMove { .. } => ErrorKind::IllegalMove,
            DrakeError::NoSuchTroop(_) => ErrorKind::NoSuchTroop,
            DrakeError::InvalidPosName(_)
            | DrakeError::DimensionMismatch { .. }
            | DrakeError::InvalidTroops(_)
            | DrakeError::InvalidConfig(_) => ErrorKind::InvalidInput,
        }
    }

    /// True for both a coordinate past the edge and the off-board sentinel.
    #[must_use]
    pub fn is_out_of_bounds(&self) -> bool {
        self.kind() == ErrorKind::OutOfBounds
    }
}

/// Result alias used throughout the crate.
pub type DrakeResult<T> = Result<T, DrakeError>;
