//! Strictly Go - a Go board placement state machine
//!
//! Two players alternate placing stones on a square board. A placement on
//! an empty cell is accepted and passes the turn; a placement on an
//! occupied cell is rejected with a notice and changes nothing.
//!
//! # Architecture
//!
//! - **GameState**: immutable board value with a single transition, `place_at`
//! - **BoardView**: pure projection of a state into renderable cells
//! - **Session**: current state plus move log; the dispatch point for
//!   `CellSelected` events
//! - **Contracts / Invariants**: pre- and postconditions checked around
//!   every placement
//!
//! # Example
//!
//! ```
//! use strictly_go::{BoardSize, CellSelected, Occupant, Player, Session};
//!
//! # fn main() -> Result<(), strictly_go::BoardError> {
//! let mut session = Session::new(BoardSize::new(3)?);
//! let view = session.dispatch(CellSelected::new(0, 0))?;
//! assert_eq!(view.to_move(), Player::B);
//!
//! // Playing the same cell again is refused.
//! session.dispatch(CellSelected::new(0, 0))?;
//! assert!(session.notice().is_some());
//! assert_eq!(session.state().occupant_at(0, 0)?, Occupant::Stone(Player::A));
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod action;
mod contracts;
mod coordinate;
mod error;
mod grid;
mod invariants;
mod placement;
mod session;
mod state;
mod types;
mod view;

// Crate-level exports - Domain types
pub use types::{Occupant, Player};

// Crate-level exports - Coordinates and sizing
pub use coordinate::{BoardSize, Coordinate, ParseCoordinateError};

// Crate-level exports - Actions and events
pub use action::{CellSelected, Move};

// Crate-level exports - State machine
pub use grid::Grid;
pub use placement::{Outcome, Placement, Rejection};
pub use state::GameState;

// Crate-level exports - Projection
pub use view::{BoardView, CellView, Refresh, forward};

// Crate-level exports - Session
pub use session::Session;

// Crate-level exports - Errors
pub use error::{BoardError, BoardErrorKind};

// Crate-level exports - Contracts and invariants
pub use contracts::{Contract, InBounds, PlacementContract, SingleCellChanged};
pub use invariants::{
    AlternatingTurnInvariant, BoardInvariants, HistoryConsistentInvariant, Invariant,
    InvariantSet, InvariantViolation, SessionInvariants, SquareGridInvariant,
    StoneBalanceInvariant,
};
