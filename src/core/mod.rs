//! Core types: sides, positions, errors, configuration and the game snapshot.
//!
//! Everything here is an immutable value. Operations that change state
//! return a new value and leave the old one intact.

pub mod config;
pub mod error;
pub mod position;
pub mod side;
pub mod state;

pub use config::{GameConfig, MAX_DIMENSION, STANDARD_DIMENSION};
pub use error::{DrakeError, DrakeResult, ErrorKind};
pub use position::{BoardPos, PositionFactory, TilePos};
pub use side::{PlayingSide, SideMap};
pub use state::{GameState, TileView};
