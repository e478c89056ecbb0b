//! Square grid invariant: the grid is always `size × size`.

use super::Invariant;
use crate::GameState;

/// Invariant: the grid has exactly `size` rows of `size` cells.
pub struct SquareGridInvariant;

impl Invariant<GameState> for SquareGridInvariant {
    fn holds(state: &GameState) -> bool {
        let size = state.size().get();
        let mut rows = 0;
        for row in state.grid().rows() {
            if row.len() != size {
                return false;
            }
            rows += 1;
        }
        rows == size
    }

    fn description() -> &'static str {
        "Grid is size x size"
    }
}
