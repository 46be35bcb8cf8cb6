//! Per-side troop registry.
//!
//! `BoardTroops` maps board positions to the troop tiles of one side and
//! tracks setup progress: where the leader stands and how many guards have
//! been placed. Every operation returns a new registry; the receiver and
//! every earlier snapshot stay valid and unchanged.
//!
//! ## Phases
//!
//! Setup moves through three phases, derived from the leader position and
//! the guard count rather than stored:
//!
//! 1. `Empty`: no leader. The next placed troop becomes the leader.
//! 2. `PlacingGuards`: leader placed, fewer than two guards. Each placed
//!    troop is a guard.
//! 3. `Active`: leader and both guards placed. Troops may step, flip and be
//!    removed.
//!
//! ## Usage
//!
//! ```
//! use the_drake::core::{PlayingSide, PositionFactory};
//! use the_drake::troops::{BoardTroops, Troop, TroopsPhase};
//!
//! let factory = PositionFactory::new(4);
//! let pos = |name| factory.pos_named(name).unwrap();
//!
//! let troops = BoardTroops::new(PlayingSide::Blue)
//!     .place_troop(Troop::new("Drake"), pos("b1")).unwrap()
//!     .place_troop(Troop::new("Clubman"), pos("a1")).unwrap()
//!     .place_troop(Troop::new("Clubman"), pos("c1")).unwrap();
//! assert_eq!(troops.phase(), TroopsPhase::Active);
//!
//! let moved = troops.troop_step(pos("b1"), pos("b2")).unwrap();
//! assert_eq!(moved.leader(), Some(pos("b2")));
//! assert_eq!(troops.leader(), Some(pos("b1")));
//! ```

use im::{OrdMap, OrdSet};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use super::tile::TroopTile;
use super::troop::{Troop, TroopFace};
use crate::core::error::{DrakeError, DrakeResult};
use crate::core::position::{BoardPos, TilePos};
use crate::core::side::PlayingSide;

/// Number of guards each side places after its leader.
pub const GUARD_COUNT: u8 = 2;

/// Setup progress of one side.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TroopsPhase {
    /// No leader on the board.
    Empty,
    /// Leader placed, guards still to come.
    PlacingGuards,
    /// Leader and guards placed.
    Active,
}

impl std::fmt::Display for TroopsPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TroopsPhase::Empty => write!(f, "placing leader"),
            TroopsPhase::PlacingGuards => write!(f, "placing guards"),
            TroopsPhase::Active => write!(f, "active"),
        }
    }
}

/// The troops one side has on the board.
///
/// Backed by `im::OrdMap`, so cloning is O(1) and each mutator copies only
/// the path it touches.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "BoardTroopsRepr", into = "BoardTroopsRepr")]
pub struct BoardTroops {
    side: PlayingSide,
    troops: OrdMap<BoardPos, TroopTile>,
    leader: Option<BoardPos>,
    guards: u8,
}

impl BoardTroops {
    /// Empty registry for `side`.
    #[must_use]
    pub fn new(side: PlayingSide) -> Self {
        Self {
            side,
            troops: OrdMap::new(),
            leader: None,
            guards: 0,
        }
    }

    /// Rebuild a registry from its parts.
    ///
    /// Rejects duplicate positions, tiles owned by the other side, a leader
    /// position without a troop on it, and more than two guards.
    pub fn from_parts(
        side: PlayingSide,
        troops: impl IntoIterator<Item = (BoardPos, TroopTile)>,
        leader: Option<BoardPos>,
        guards: u8,
    ) -> DrakeResult<Self> {
        let mut map = OrdMap::new();
        for (pos, tile) in troops {
            if tile.side() != side {
                return Err(DrakeError::InvalidTroops(format!(
                    "{} troop at {pos} in the {side} registry",
                    tile.side()
                )));
            }
            if map.insert(pos, tile).is_some() {
                return Err(DrakeError::InvalidTroops(format!("two troops at {pos}")));
            }
        }

        if let Some(pos) = leader {
            if !map.contains_key(&pos) {
                return Err(DrakeError::InvalidTroops(format!("no troop at leader position {pos}")));
            }
        }

        if guards > GUARD_COUNT {
            return Err(DrakeError::InvalidTroops(format!(
                "{guards} guards, at most {GUARD_COUNT} allowed"
            )));
        }

        Ok(Self {
            side,
            troops: map,
            leader,
            guards,
        })
    }

    /// Troop tile at `pos`, if any.
    ///
    /// The off-board sentinel never holds a troop.
    #[must_use]
    pub fn at(&self, pos: impl Into<TilePos>) -> Option<&TroopTile> {
        let (i, j) = pos.into().coords()?;
        self.troops.get(&BoardPos::new_unchecked(i, j))
    }

    #[must_use]
    pub fn playing_side(&self) -> PlayingSide {
        self.side
    }

    /// Leader position, or `TilePos::OFF_BOARD` if no leader is placed.
    #[must_use]
    pub fn leader_position(&self) -> TilePos {
        self.leader.map_or(TilePos::OFF_BOARD, TilePos::from)
    }

    /// Leader position, if a leader is placed.
    #[must_use]
    pub fn leader(&self) -> Option<BoardPos> {
        self.leader
    }

    /// Number of guards placed so far.
    #[must_use]
    pub fn guards(&self) -> u8 {
        self.guards
    }

    #[must_use]
    pub fn is_leader_placed(&self) -> bool {
        self.leader.is_some()
    }

    #[must_use]
    pub fn is_placing_guards(&self) -> bool {
        self.is_leader_placed() && self.guards < GUARD_COUNT
    }

    /// Current setup phase.
    #[must_use]
    pub fn phase(&self) -> TroopsPhase {
        if !self.is_leader_placed() {
            TroopsPhase::Empty
        } else if self.is_placing_guards() {
            TroopsPhase::PlacingGuards
        } else {
            TroopsPhase::Active
        }
    }

    /// Occupied positions.
    #[must_use]
    pub fn troop_positions(&self) -> OrdSet<BoardPos> {
        self.troops.keys().copied().collect()
    }

    /// Iterate over `(position, tile)` pairs in row-major order.
    pub fn troops(&self) -> impl Iterator<Item = (BoardPos, &TroopTile)> {
        self.troops.iter().map(|(pos, tile)| (*pos, tile))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.troops.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.troops.is_empty()
    }

    /// Place `troop` obverse up at `target`.
    ///
    /// The first troop placed becomes the leader and the next two are
    /// guards. Placement is not restricted once the side is active; extra
    /// troops are ordinary units.
    pub fn place_troop(&self, troop: Troop, target: BoardPos) -> DrakeResult<Self> {
        if self.troops.contains_key(&target) {
            return Err(DrakeError::PositionOccupied(target));
        }

        let mut next = self.clone();
        match self.phase() {
            TroopsPhase::Empty => next.leader = Some(target),
            TroopsPhase::PlacingGuards => next.guards += 1,
            TroopsPhase::Active => {}
        }
        next.troops
            .insert(target, TroopTile::new(troop, self.side, TroopFace::Obverse));

        debug!(side = %self.side, %target, phase = %next.phase(), "placed troop");
        Ok(next)
    }

    /// Move the troop at `origin` to `target`, flipping it.
    ///
    /// The leader position follows the leader.
    pub fn troop_step(&self, origin: BoardPos, target: BoardPos) -> DrakeResult<Self> {
        self.require_active()?;
        if self.troops.contains_key(&target) {
            return Err(DrakeError::IllegalMove { origin, target });
        }

        let mut next = self.clone();
        let tile = next
            .troops
            .remove(&origin)
            .ok_or(DrakeError::IllegalMove { origin, target })?;
        next.troops.insert(target, tile.flipped());
        if self.leader == Some(origin) {
            next.leader = Some(target);
        }

        debug!(side = %self.side, %origin, %target, "troop stepped");
        Ok(next)
    }

    /// Flip the troop at `origin` in place.
    pub fn troop_flip(&self, origin: BoardPos) -> DrakeResult<Self> {
        self.require_active()?;
        let tile = self.troops.get(&origin).ok_or(DrakeError::NoSuchTroop(origin))?;

        let mut next = self.clone();
        next.troops.insert(origin, tile.flipped());

        trace!(side = %self.side, %origin, "troop flipped");
        Ok(next)
    }

    /// Remove the troop at `target`.
    ///
    /// Removing the leader clears the leader position. The guard count is
    /// kept, so the side reads as `Empty` until a new troop is placed, which
    /// then becomes the leader.
    pub fn remove_troop(&self, target: BoardPos) -> DrakeResult<Self> {
        self.require_active()?;
        if !self.troops.contains_key(&target) {
            return Err(DrakeError::NoSuchTroop(target));
        }

        let mut next = self.clone();
        next.troops.remove(&target);
        if self.leader == Some(target) {
            next.leader = None;
        }

        debug!(side = %self.side, %target, leader_removed = next.leader.is_none(), "troop removed");
        Ok(next)
    }

    fn require_active(&self) -> DrakeResult<()> {
        match self.phase() {
            TroopsPhase::Active => Ok(()),
            phase => Err(DrakeError::InvalidPhase {
                side: self.side,
                phase,
            }),
        }
    }
}

/// Serialized form. JSON maps need string keys, so troops travel as pairs.
#[derive(Serialize, Deserialize)]
struct BoardTroopsRepr {
    side: PlayingSide,
    troops: Vec<(BoardPos, TroopTile)>,
    leader: Option<BoardPos>,
    guards: u8,
}

impl From<BoardTroops> for BoardTroopsRepr {
    fn from(troops: BoardTroops) -> Self {
        Self {
            side: troops.side,
            troops: troops.troops.into_iter().collect(),
            leader: troops.leader,
            guards: troops.guards,
        }
    }
}

impl TryFrom<BoardTroopsRepr> for BoardTroops {
    type Error = DrakeError;

    fn try_from(repr: BoardTroopsRepr) -> DrakeResult<Self> {
        BoardTroops::from_parts(repr.side, repr.troops, repr.leader, repr.guards)
    }
}
