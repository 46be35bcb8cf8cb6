//! Troop layer: unit identities, troop tiles and the per-side registry.
//!
//! ## Key Types
//!
//! - `Troop`: opaque unit-type identity
//! - `TroopFace`: obverse or reverse
//! - `TroopTile`: a troop of one side with one face up
//! - `BoardTroops`: one side's troops keyed by position, plus setup phase
//! - `TroopsPhase`: `Empty` -> `PlacingGuards` -> `Active`

pub mod registry;
pub mod tile;
pub mod troop;

pub use registry::{BoardTroops, TroopsPhase, GUARD_COUNT};
pub use tile::TroopTile;
pub use troop::{Troop, TroopFace};
