//! Immutable game state and the placement transition.

use crate::action::Move;
use crate::contracts::{Contract, PlacementContract};
use crate::coordinate::{BoardSize, Coordinate};
use crate::error::{BoardError, BoardErrorKind};
use crate::grid::Grid;
use crate::placement::{Placement, Rejection};
use crate::types::{Occupant, Player};
use crate::view::BoardView;
use serde::Serialize;
use tracing::{debug, instrument, warn};

/// Board contents plus whose turn it is.
///
/// A `GameState` is a value: placing a stone returns a new state and
/// leaves the original untouched. Clones are cheap because grid rows
/// are shared.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameState {
    grid: Grid,
    to_move: Player,
}

impl GameState {
    /// Creates an empty board. Player A moves first.
    #[instrument]
    pub fn new(size: BoardSize) -> Self {
        Self {
            grid: Grid::new(size),
            to_move: Player::A,
        }
    }

    /// Creates an empty board from a raw size, rejecting zero and negatives.
    #[track_caller]
    #[instrument]
    pub fn create(size: i64) -> Result<Self, BoardError> {
        Ok(Self::new(BoardSize::try_from(size)?))
    }

    /// Returns the board size.
    pub fn size(&self) -> BoardSize {
        self.grid.size()
    }

    /// Returns the player whose stone the next accepted placement uses.
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Returns the grid.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Number of stones on the board.
    pub fn stones_placed(&self) -> usize {
        self.grid.stone_count()
    }

    /// One-based number of the move about to be played.
    pub fn move_number(&self) -> usize {
        self.stones_placed() + 1
    }

    /// Returns the occupant at `(x, y)`.
    ///
    /// # Errors
    ///
    /// `OutOfRange` if the coordinate is off the board.
    #[track_caller]
    pub fn occupant_at(&self, x: usize, y: usize) -> Result<Occupant, BoardError> {
        let coord = Coordinate::new(x, y).check_within(self.size())?;
        // check_within guarantees the lookup succeeds
        Ok(self.grid.get(coord).unwrap_or_default())
    }

    /// Coordinates still open to placement, in row-major order.
    pub fn empty_cells(&self) -> impl Iterator<Item = Coordinate> + '_ {
        self.grid
            .cells()
            .filter(|(_, occupant)| occupant.is_empty())
            .map(|(coord, _)| coord)
    }

    /// Places the current player's stone at `(x, y)`.
    ///
    /// An occupied cell is not an error: the returned [`Placement`] is
    /// rejected, carries a notice, and holds this state unchanged.
    ///
    /// # Errors
    ///
    /// `OutOfRange` if the coordinate is off the board. In debug builds,
    /// `InvariantViolation` if the transition broke a board invariant.
    #[track_caller]
    #[instrument(skip(self), fields(player = %self.to_move))]
    pub fn place_at(&self, x: usize, y: usize) -> Result<Placement, BoardError> {
        self.apply(Move::new(self.to_move, Coordinate::new(x, y)))
    }

    /// Places a stone for an explicit player, as when replaying a move log.
    ///
    /// Rejects with `OutOfTurn` if `action.player` does not hold the turn,
    /// otherwise behaves like [`place_at`](Self::place_at).
    #[track_caller]
    #[instrument(skip(self, action), fields(action = %action))]
    pub fn apply(&self, action: Move) -> Result<Placement, BoardError> {
        PlacementContract::pre(self, &action)?;

        if action.player != self.to_move {
            let rejection = Rejection::OutOfTurn {
                expected: self.to_move,
                attempted: action.player,
            };
            warn!(%rejection, "Placement rejected");
            return Ok(Placement::rejected(self.clone(), rejection));
        }

        let occupant = self.grid.get(action.coordinate).unwrap_or_default();
        if !occupant.is_empty() {
            let rejection = Rejection::CellOccupied {
                coordinate: action.coordinate,
                occupant,
            };
            warn!(%rejection, "Placement rejected");
            return Ok(Placement::rejected(self.clone(), rejection));
        }

        let Some(grid) = self
            .grid
            .with_cell(action.coordinate, Occupant::Stone(action.player))
        else {
            return Err(BoardError::new(BoardErrorKind::OutOfRange {
                coordinate: action.coordinate,
                size: self.size().get(),
            }));
        };
        let next = Self {
            grid,
            to_move: self.to_move.opponent(),
        };

        #[cfg(debug_assertions)]
        PlacementContract::post(self, &next)?;

        debug!(next_player = %next.to_move, "Placement accepted");
        Ok(Placement::accepted(next, action))
    }

    /// Formats the board with a move counter header.
    pub fn display(&self) -> String {
        BoardView::project(self).to_string()
    }
}
