//! Contract-based validation for placements.
//!
//! Contracts define correctness through preconditions and postconditions.
//! They formalize the Hoare-style reasoning: {P} action {Q}

use crate::action::Move;
use crate::error::{BoardError, BoardErrorKind};
use crate::invariants::{BoardInvariants, InvariantSet};
use crate::state::GameState;
use crate::types::Occupant;
use tracing::{instrument, warn};

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// A contract defines preconditions and postconditions for state transitions.
///
/// - Precondition: {P(state, action)} - must hold before applying action
/// - Postcondition: {Q(before, after)} - must hold after applying action
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), BoardError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), BoardError>;
}

// ─────────────────────────────────────────────────────────────
//  Placement Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: the move's coordinate lies on the board.
///
/// Violations are caller bugs and surface as `OutOfRange` errors.
pub struct InBounds;

impl InBounds {
    /// Checks the coordinate against the board size.
    #[track_caller]
    #[instrument(skip(state))]
    pub fn check(mov: &Move, state: &GameState) -> Result<(), BoardError> {
        mov.coordinate.check_within(state.size()).map(|_| ())
    }
}

// ─────────────────────────────────────────────────────────────
//  Placement Postconditions
// ─────────────────────────────────────────────────────────────

/// Postcondition: exactly one cell changed, from `Empty` to the stone of
/// the player who held the turn.
pub struct SingleCellChanged;

impl SingleCellChanged {
    /// Compares two consecutive states.
    #[instrument(skip(before, after))]
    pub fn holds(before: &GameState, after: &GameState) -> bool {
        if before.size() != after.size() {
            return false;
        }
        let changed: Vec<_> = before
            .grid()
            .cells()
            .zip(after.grid().cells())
            .filter(|((_, old), (_, new))| old != new)
            .collect();

        let valid = match changed.as_slice() {
            [((_, old), (_, new))] => {
                old.is_empty() && *new == Occupant::Stone(before.to_move())
            }
            _ => false,
        };
        if !valid {
            warn!(changed = changed.len(), "Single-cell change violated");
        }
        valid
    }
}

// ─────────────────────────────────────────────────────────────
//  Placement Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for placements.
///
/// Preconditions:
/// - Coordinate is on the board
///
/// Postconditions:
/// - Board invariants hold
/// - Exactly one empty cell received the mover's stone
pub struct PlacementContract;

impl Contract<GameState, Move> for PlacementContract {
    #[track_caller]
    fn pre(state: &GameState, action: &Move) -> Result<(), BoardError> {
        InBounds::check(action, state)
    }

    #[track_caller]
    fn post(before: &GameState, after: &GameState) -> Result<(), BoardError> {
        let mut failures = match BoardInvariants::check_all(after) {
            Ok(()) => Vec::new(),
            Err(violations) => violations.into_iter().map(|v| v.description).collect(),
        };
        if !SingleCellChanged::holds(before, after) {
            failures.push("Exactly one empty cell receives the mover's stone".to_string());
        }

        if failures.is_empty() {
            Ok(())
        } else {
            let message = format!("Postcondition failed: {}", failures.join("; "));
            warn!(%message, "Placement contract violated");
            Err(BoardError::new(BoardErrorKind::InvariantViolation(message)))
        }
    }
}
