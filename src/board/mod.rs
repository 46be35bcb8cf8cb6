//! Terrain layer: tiles and the immutable board grid.
//!
//! ## Key Types
//!
//! - `Tile`: common `can_step_on`/`has_troop` queries
//! - `BoardTile`: terrain marker (empty ground, mountain)
//! - `Board`: square grid of `BoardTile`s
//! - `TileAt`: a `(position, tile)` change for `Board::with_tiles`

pub mod grid;
pub mod tile;

pub use grid::{Board, TileAt};
pub use tile::{BoardTile, Tile};
