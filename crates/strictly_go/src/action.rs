//! First-class action types for the board.
//!
//! Moves are domain events, not side effects. They represent a player
//! claiming a cell and can be logged, serialized and replayed.

use crate::coordinate::Coordinate;
use crate::types::Player;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A placement: a player putting a stone on a coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub struct Move {
    /// The player placing the stone.
    pub player: Player,
    /// Where the stone goes.
    pub coordinate: Coordinate,
}

impl Move {
    /// Creates a new move.
    #[instrument]
    pub fn new(player: Player, coordinate: Coordinate) -> Self {
        Self { player, coordinate }
    }

    /// Returns the player making this move.
    pub fn player(&self) -> Player {
        self.player
    }

    /// Returns the coordinate of this move.
    pub fn coordinate(&self) -> Coordinate {
        self.coordinate
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} to {}", self.player, self.coordinate)
    }
}

/// Input event raised by the presentation layer when a cell is activated.
///
/// Every cell in a [`BoardView`](crate::BoardView) carries the event it
/// would raise; the presentation layer hands it back to
/// [`forward`](crate::forward) or [`Session::dispatch`](crate::Session::dispatch).
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    JsonSchema,
    derive_new::new,
)]
pub struct CellSelected {
    /// Column.
    pub x: usize,
    /// Row.
    pub y: usize,
}

impl CellSelected {
    /// The coordinate this event refers to.
    pub fn coordinate(self) -> Coordinate {
        Coordinate::new(self.x, self.y)
    }
}

impl From<Coordinate> for CellSelected {
    fn from(coord: Coordinate) -> Self {
        Self::new(coord.x, coord.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_display() {
        let mov = Move::new(Player::A, Coordinate::new(2, 3));
        assert_eq!(mov.to_string(), "A to (2, 3)");
    }

    #[test]
    fn test_move_serde() {
        let mov = Move::new(Player::B, Coordinate::new(0, 1));
        let json = serde_json::to_string(&mov).unwrap();
        assert_eq!(json, r#"{"player":"B","coordinate":{"x":0,"y":1}}"#);
        let back: Move = serde_json::from_str(&json).unwrap();
        assert_eq!(back, mov);
    }

    #[test]
    fn test_event_coordinate() {
        let event = CellSelected::from(Coordinate::new(4, 1));
        assert_eq!(event, CellSelected::new(4, 1));
        assert_eq!(event.coordinate(), Coordinate::new(4, 1));
    }
}
