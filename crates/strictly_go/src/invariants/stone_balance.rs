//! Stone balance invariant: A never trails B, and never leads by more than one.

use super::Invariant;
use crate::{GameState, Occupant, Player};
use tracing::warn;

/// Invariant: `stones(A) - stones(B)` is 0 or 1.
pub struct StoneBalanceInvariant;

impl Invariant<GameState> for StoneBalanceInvariant {
    fn holds(state: &GameState) -> bool {
        let count = |player| {
            state
                .grid()
                .cells()
                .filter(|(_, occupant)| *occupant == Occupant::Stone(player))
                .count()
        };
        let a = count(Player::A);
        let b = count(Player::B);

        let valid = a == b || a == b + 1;
        if !valid {
            warn!(a, b, "Stone balance violated");
        }
        valid
    }

    fn description() -> &'static str {
        "Player A has as many stones as Player B, or one more"
    }
}
