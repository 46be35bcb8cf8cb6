//! Full game snapshot: the terrain board plus both sides' troops.
//!
//! The two layers are stored separately and only composited when queried.
//! `GameState` does not sequence turns or check movement rules; a rule
//! layer applies a `BoardTroops` operation and swaps the result in with
//! `with_troops`.
//!
//! ```
//! use the_drake::board::{Board, Tile};
//! use the_drake::core::{GameState, PlayingSide};
//! use the_drake::troops::Troop;
//!
//! let state = GameState::new(Board::new(4));
//! let a1 = state.board().position_factory().pos(0, 0).unwrap();
//!
//! let blue = state.troops(PlayingSide::Blue).place_troop(Troop::new("Drake"), a1).unwrap();
//! let next = state.with_troops(blue).unwrap();
//!
//! assert!(next.tile_at(a1).unwrap().has_troop());
//! assert!(state.can_step_on(a1).unwrap());
//! ```

use serde::{Deserialize, Serialize};
use tracing::trace;

use super::error::{DrakeError, DrakeResult};
use super::position::TilePos;
use super::side::{PlayingSide, SideMap};
use crate::board::{Board, BoardTile, Tile};
use crate::troops::{BoardTroops, TroopTile};

/// What a board cell shows once both layers are composited.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TileView<'a> {
    /// A troop of either side.
    Troop(&'a TroopTile),
    /// Bare terrain.
    Board(BoardTile),
}

impl<'a> TileView<'a> {
    /// The troop on this cell, if any.
    #[must_use]
    pub fn troop(&self) -> Option<&'a TroopTile> {
        match *self {
            TileView::Troop(tile) => Some(tile),
            TileView::Board(_) => None,
        }
    }
}

impl Tile for TileView<'_> {
    fn can_step_on(&self) -> bool {
        match self {
            TileView::Troop(tile) => tile.can_step_on(),
            TileView::Board(tile) => tile.can_step_on(),
        }
    }

    fn has_troop(&self) -> bool {
        matches!(self, TileView::Troop(_))
    }
}

/// Board plus the troops of both sides.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "GameStateRepr")]
pub struct GameState {
    board: Board,
    troops: SideMap<BoardTroops>,
}

impl GameState {
    /// State with no troops on `board`.
    #[must_use]
    pub fn new(board: Board) -> Self {
        Self {
            board,
            troops: SideMap::new(BoardTroops::new),
        }
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Troops of `side`.
    #[must_use]
    pub fn troops(&self, side: PlayingSide) -> &BoardTroops {
        &self.troops[side]
    }

    #[must_use]
    pub fn troop_count(&self, side: PlayingSide) -> usize {
        self.troops[side].len()
    }

    /// Replace the board. The new board must have the same dimension.
    pub fn with_board(&self, board: Board) -> DrakeResult<Self> {
        if board.dimension() != self.board.dimension() {
            return Err(DrakeError::DimensionMismatch {
                expected: self.board.dimension(),
                found: board.dimension(),
            });
        }
        Ok(Self {
            board,
            troops: self.troops.clone(),
        })
    }

    /// Replace the registry of the side `troops` belongs to.
    ///
    /// Every troop must lie on this board and on a tile the other side does
    /// not hold. A capture therefore removes the defender before the
    /// attacker's step is swapped in.
    pub fn with_troops(&self, troops: BoardTroops) -> DrakeResult<Self> {
        let side = troops.playing_side();
        let factory = self.board.position_factory();
        let other = &self.troops[side.opposite()];

        for (pos, _) in troops.troops() {
            factory.check(pos.into())?;
            if other.at(pos).is_some() {
                return Err(DrakeError::PositionOccupied(pos));
            }
        }

        trace!(%side, count = troops.len(), "replacing troops");
        let mut next = self.clone();
        next.troops[side] = troops;
        Ok(next)
    }

    /// Composite view of the cell at `pos`.
    ///
    /// A troop of either side hides the terrain below it. Fails for
    /// positions off this board.
    pub fn tile_at(&self, pos: impl Into<TilePos>) -> DrakeResult<TileView<'_>> {
        let pos = pos.into();
        let terrain = self.board.at(pos)?;

        Ok(self
            .troops
            .iter()
            .find_map(|(_, troops)| troops.at(pos))
            .map_or(TileView::Board(terrain), TileView::Troop))
    }

    /// Can a troop step onto `pos`?
    pub fn can_step_on(&self, pos: impl Into<TilePos>) -> DrakeResult<bool> {
        Ok(self.tile_at(pos)?.can_step_on())
    }
}

#[derive(Deserialize)]
struct GameStateRepr {
    board: Board,
    troops: SideMap<BoardTroops>,
}

impl TryFrom<GameStateRepr> for GameState {
    type Error = DrakeError;

    fn try_from(repr: GameStateRepr) -> DrakeResult<Self> {
        for (side, troops) in repr.troops.iter() {
            if troops.playing_side() != side {
                return Err(DrakeError::InvalidTroops(format!(
                    "{} registry stored in the {side} slot",
                    troops.playing_side()
                )));
            }
        }

        let [blue, orange] = PlayingSide::ALL.map(|side| repr.troops[side].clone());
        GameState::new(repr.board).with_troops(blue)?.with_troops(orange)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::TileAt;
    use crate::troops::Troop;

    #[test]
    fn test_new_state() {
        let state = GameState::new(Board::new(4));

        for side in PlayingSide::ALL {
            assert_eq!(state.troops(side).playing_side(), side);
            assert_eq!(state.troop_count(side), 0);
        }
    }

    #[test]
    fn test_with_troops_replaces_one_side() {
        let state = GameState::new(Board::new(4));
        let pos = state.board().position_factory().pos(3, 1).unwrap();
        let orange = state
            .troops(PlayingSide::Orange)
            .place_troop(Troop::new("Drake"), pos)
            .unwrap();

        let next = state.with_troops(orange).unwrap();

        assert_eq!(next.troop_count(PlayingSide::Orange), 1);
        assert_eq!(next.troop_count(PlayingSide::Blue), 0);
        assert_eq!(state.troop_count(PlayingSide::Orange), 0);
    }

    #[test]
    fn test_tile_at_composites_layers() {
        let board = Board::new(4);
        let factory = board.position_factory();
        let peak = factory.pos(1, 1).unwrap();
        let camp = factory.pos(0, 0).unwrap();
        let board = board.with_tiles([TileAt::new(peak, BoardTile::Mountain)]).unwrap();

        let state = GameState::new(board);
        let blue = state
            .troops(PlayingSide::Blue)
            .place_troop(Troop::new("Drake"), camp)
            .unwrap();
        let state = state.with_troops(blue).unwrap();

        let view = state.tile_at(camp).unwrap();
        assert_eq!(view.troop().unwrap().troop().name(), "Drake");
        assert!(view.has_troop());
        assert!(!view.can_step_on());

        assert_eq!(state.tile_at(peak).unwrap(), TileView::Board(BoardTile::Mountain));
        assert!(!state.can_step_on(peak).unwrap());
        assert!(state.can_step_on(factory.pos(2, 2).unwrap()).unwrap());
    }

    #[test]
    fn test_tile_at_out_of_bounds() {
        let state = GameState::new(Board::new(3));

        assert!(state.tile_at(TilePos::new(3, 0)).unwrap_err().is_out_of_bounds());
        assert_eq!(state.tile_at(TilePos::OFF_BOARD), Err(DrakeError::OffBoard));
    }

    #[test]
    fn test_with_board_dimension() {
        let state = GameState::new(Board::new(4));

        assert!(state.with_board(Board::new(4)).is_ok());
        assert_eq!(
            state.with_board(Board::new(5)),
            Err(DrakeError::DimensionMismatch { expected: 4, found: 5 })
        );
    }

    #[test]
    fn test_serialization() {
        let state = GameState::new(Board::new(4));
        let pos = state.board().position_factory().pos(0, 1).unwrap();
        let blue = state.troops(PlayingSide::Blue).place_troop(Troop::new("Drake"), pos).unwrap();
        let state = state.with_troops(blue).unwrap();

        let json = serde_json::to_string(&state).unwrap();
        let deserialized: GameState = serde_json::from_str(&json).unwrap();
        assert_eq!(state, deserialized);
    }

    #[test]
    fn test_deserialize_rejects_swapped_sides() {
        let state = GameState::new(Board::new(2));
        let mut value = serde_json::to_value(&state).unwrap();
        let troops = value["troops"].as_object_mut().unwrap();
        let blue = troops["blue"].clone();
        let orange = troops["orange"].clone();
        troops.insert("blue".into(), orange);
        troops.insert("orange".into(), blue);

        assert!(serde_json::from_value::<GameState>(value).is_err());
    }

    #[test]
    fn test_with_troops_rejects_off_board() {
        let state = GameState::new(Board::new(3));
        let far = crate::core::PositionFactory::new(9).pos(8, 8).unwrap();
        let blue = state.troops(PlayingSide::Blue).place_troop(Troop::new("Drake"), far).unwrap();

        assert!(state.with_troops(blue).unwrap_err().is_out_of_bounds());
        assert_eq!(state.troop_count(PlayingSide::Blue), 0);
    }

    #[test]
    fn test_with_troops_rejects_shared_tile() {
        let state = GameState::new(Board::new(3));
        let a1 = state.board().position_factory().pos(0, 0).unwrap();
        let blue = state.troops(PlayingSide::Blue).place_troop(Troop::new("Drake"), a1).unwrap();
        let orange = state.troops(PlayingSide::Orange).place_troop(Troop::new("Drake"), a1).unwrap();
        let state = state.with_troops(blue).unwrap();

        assert_eq!(state.with_troops(orange), Err(DrakeError::PositionOccupied(a1)));
    }

    #[test]
    fn test_deserialize_rejects_off_board_troops() {
        let state = GameState::new(Board::new(3));
        let a1 = state.board().position_factory().pos(0, 0).unwrap();
        let blue = state.troops(PlayingSide::Blue).place_troop(Troop::new("Drake"), a1).unwrap();
        let state = state.with_troops(blue).unwrap();

        let mut value = serde_json::to_value(&state).unwrap();
        value["troops"]["blue"]["troops"]
            .as_array_mut()
            .unwrap()
            .push(serde_json::json!([{"i": 8, "j": 8}, {"troop": {"name": "Clubman"}, "side": "Blue", "face": "Obverse"}]));

        assert!(serde_json::from_value::<GameState>(value).is_err());
    }

    #[test]
    fn test_deserialize_rejects_shared_tile() {
        let state = GameState::new(Board::new(3));
        let a1 = state.board().position_factory().pos(0, 0).unwrap();
        let blue = state.troops(PlayingSide::Blue).place_troop(Troop::new("Drake"), a1).unwrap();
        let orange = state.troops(PlayingSide::Orange).place_troop(Troop::new("Drake"), a1).unwrap();
        let state = state.with_troops(blue).unwrap();

        let mut value = serde_json::to_value(&state).unwrap();
        value["troops"]["orange"] = serde_json::to_value(&orange).unwrap();

        assert!(serde_json::from_value::<GameState>(value).is_err());
    }
}
