//! Results of a placement attempt.

use crate::action::Move;
use crate::coordinate::Coordinate;
use crate::state::GameState;
use crate::types::{Occupant, Player};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Why a placement was refused. These are ordinary game conditions,
/// surfaced to the user as a notice rather than raised as errors.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema, derive_more::Display,
)]
pub enum Rejection {
    /// The cell already holds a stone.
    #[display("You can't do that! {coordinate} is occupied by {occupant}")]
    CellOccupied {
        /// Where the player tried to play.
        coordinate: Coordinate,
        /// What is already there.
        occupant: Occupant,
    },

    /// A recorded move names the wrong player.
    #[display("Not your turn: Player {expected} is to move, not Player {attempted}")]
    OutOfTurn {
        /// Player holding the turn.
        expected: Player,
        /// Player named by the move.
        attempted: Player,
    },
}

/// Whether a placement took effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub enum Outcome {
    /// The stone was placed.
    Accepted(Move),
    /// Nothing changed.
    Rejected(Rejection),
}

/// The state after a placement attempt, together with what happened.
///
/// On rejection `state` is the input state, unchanged.
#[derive(Debug, Clone)]
pub struct Placement {
    state: GameState,
    outcome: Outcome,
}

impl Placement {
    pub(crate) fn accepted(state: GameState, mov: Move) -> Self {
        Self {
            state,
            outcome: Outcome::Accepted(mov),
        }
    }

    pub(crate) fn rejected(state: GameState, rejection: Rejection) -> Self {
        Self {
            state,
            outcome: Outcome::Rejected(rejection),
        }
    }

    /// True if the stone was placed.
    pub fn is_accepted(&self) -> bool {
        matches!(self.outcome, Outcome::Accepted(_))
    }

    /// The resulting state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Consumes the placement, returning the resulting state.
    pub fn into_state(self) -> GameState {
        self.state
    }

    /// What happened.
    pub fn outcome(&self) -> &Outcome {
        &self.outcome
    }

    /// The accepted move, if any.
    pub fn accepted_move(&self) -> Option<Move> {
        match self.outcome {
            Outcome::Accepted(mov) => Some(mov),
            Outcome::Rejected(_) => None,
        }
    }

    /// The rejection reason, if any.
    pub fn rejection(&self) -> Option<Rejection> {
        match self.outcome {
            Outcome::Accepted(_) => None,
            Outcome::Rejected(rejection) => Some(rejection),
        }
    }

    /// User-facing notice text for a rejected placement.
    pub fn notice(&self) -> Option<String> {
        self.rejection().map(|rejection| rejection.to_string())
    }
}
