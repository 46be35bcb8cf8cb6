//! Troop tiles - a troop as it sits on the board.
//!
//! A `TroopTile` records which troop it is, which side owns it and which
//! face is up. It carries no position: `BoardTroops` keys tiles by
//! position.

use serde::{Deserialize, Serialize};

use super::troop::{Troop, TroopFace};
use crate::board::Tile;
use crate::core::side::PlayingSide;

/// A troop occupying some board position.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TroopTile {
    troop: Troop,
    side: PlayingSide,
    face: TroopFace,
}

impl TroopTile {
    #[must_use]
    pub fn new(troop: Troop, side: PlayingSide, face: TroopFace) -> Self {
        Self { troop, side, face }
    }

    /// Side that owns this troop.
    #[must_use]
    pub fn side(&self) -> PlayingSide {
        self.side
    }

    /// Face currently showing.
    #[must_use]
    pub fn face(&self) -> TroopFace {
        self.face
    }

    #[must_use]
    pub fn troop(&self) -> &Troop {
        &self.troop
    }

    /// Same troop and side with the other face up.
    #[must_use]
    pub fn flipped(&self) -> Self {
        Self {
            troop: self.troop.clone(),
            side: self.side,
            face: self.face.flipped(),
        }
    }
}

impl Tile for TroopTile {
    fn can_step_on(&self) -> bool {
        false
    }

    fn has_troop(&self) -> bool {
        true
    }
}
