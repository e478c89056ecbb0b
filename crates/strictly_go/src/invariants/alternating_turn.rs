//! Alternating turn invariant: players alternate A, B, A, B, ...

use super::Invariant;
use crate::{GameState, Player};

/// Invariant: the turn flag matches the parity of stones on the board.
///
/// Player A moves first, so A holds the turn whenever an even number of
/// stones has been placed.
pub struct AlternatingTurnInvariant;

impl Invariant<GameState> for AlternatingTurnInvariant {
    fn holds(state: &GameState) -> bool {
        let expected = if state.stones_placed() % 2 == 0 {
            Player::A
        } else {
            Player::B
        };
        state.to_move() == expected
    }

    fn description() -> &'static str {
        "Players alternate turns (A, B, A, B, ...)"
    }
}
