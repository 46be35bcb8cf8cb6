//! # the-drake
//!
//! Immutable state engine for The Drake, a two-player strategy game played
//! with troop tiles on a square board.
//!
//! ## Design Principles
//!
//! 1. **Snapshots, not mutation**: every operation returns a new value.
//!    Earlier snapshots stay valid, which gives undo/redo and search for
//!    free.
//!
//! 2. **Derived phase**: a side's setup phase (leader, guards, active) is
//!    computed from its leader position and guard count, never stored.
//!
//! 3. **Layers**: terrain (`Board`) and troops (`BoardTroops`, one per side)
//!    are independent and only composited for queries (`GameState`).
//!
//! ## Architecture
//!
//! - **Persistent Data Structures**: `im` maps and vectors make clones O(1)
//!   and copy only the touched path on update.
//!
//! - **Rule layer outside**: turn order, movement patterns and victory are
//!   left to callers, which invoke the primitive operations here (place,
//!   step, flip, remove).
//!
//! ## Modules
//!
//! - `core`: sides, positions, errors, configuration, game snapshot
//! - `board`: terrain tiles and the board grid
//! - `troops`: troop tiles and the per-side troop registry

pub mod board;
pub mod core;
pub mod troops;

// Re-export commonly used types
pub use crate::core::{
    BoardPos, DrakeError, DrakeResult, ErrorKind, GameConfig, GameState, PlayingSide,
    PositionFactory, SideMap, TilePos, TileView,
};

pub use crate::board::{Board, BoardTile, Tile, TileAt};

pub use crate::troops::{BoardTroops, Troop, TroopFace, TroopTile, TroopsPhase, GUARD_COUNT};
