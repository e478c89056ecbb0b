//! A game session: the current state plus the log of accepted moves.

use crate::action::{CellSelected, Move};
use crate::coordinate::BoardSize;
use crate::error::{BoardError, BoardErrorKind};
#[cfg(debug_assertions)]
use crate::invariants::{InvariantSet, SessionInvariants};
use crate::placement::{Outcome, Rejection};
use crate::state::GameState;
use crate::view::{BoardView, forward};
use tracing::{debug, info, instrument, warn};

/// Owns the current [`GameState`] and processes selections one at a time.
///
/// Each accepted selection swaps in the new state and appends its move to
/// the history. A rejected selection changes nothing but the notice.
#[derive(Debug, Clone)]
pub struct Session {
    state: GameState,
    history: Vec<Move>,
    notice: Option<Rejection>,
}

impl Session {
    /// Starts a session on an empty board.
    #[instrument]
    pub fn new(size: BoardSize) -> Self {
        info!("Starting session");
        Self {
            state: GameState::new(size),
            history: Vec::new(),
            notice: None,
        }
    }

    /// Rebuilds a session from a move log.
    ///
    /// # Errors
    ///
    /// `ReplayRejected` if any move is refused by the board, `OutOfRange`
    /// if a move lies off the board.
    #[track_caller]
    #[instrument(skip(moves), fields(moves = moves.len()))]
    pub fn replay(size: BoardSize, moves: &[Move]) -> Result<Self, BoardError> {
        let mut session = Self::new(size);
        for (index, action) in moves.iter().enumerate() {
            let placement = session.state.apply(*action)?;
            if let Some(rejection) = placement.rejection() {
                warn!(index, %rejection, "Replay stopped");
                return Err(BoardError::new(BoardErrorKind::ReplayRejected {
                    index,
                    rejection,
                }));
            }
            session.history.push(*action);
            session.state = placement.into_state();
        }
        debug!(stones = session.state.stones_placed(), "Replay complete");
        Ok(session)
    }

    /// The current state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Accepted moves in the order they were played.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// The last move played, if any.
    pub fn last_move(&self) -> Option<&Move> {
        self.history.last()
    }

    /// Why the most recent selection was refused, if it was.
    pub fn notice(&self) -> Option<&Rejection> {
        self.notice.as_ref()
    }

    /// Projection of the current state.
    pub fn view(&self) -> BoardView {
        BoardView::project(&self.state)
    }

    /// Handles a cell selection and returns the refreshed projection.
    ///
    /// # Errors
    ///
    /// `OutOfRange` if the selection is off the board. In debug builds,
    /// `InvariantViolation` if the move log would no longer replay to the
    /// board. Either way the session is left untouched.
    #[track_caller]
    #[instrument(skip(self), fields(move_number = self.state.move_number()))]
    pub fn dispatch(&mut self, event: CellSelected) -> Result<BoardView, BoardError> {
        let (placement, view) = forward(&self.state, event)?.into_parts();
        let outcome = *placement.outcome();
        let state = placement.into_state();

        // Replays the whole log, so each dispatch costs O(moves * cells) in debug builds.
        #[cfg(debug_assertions)]
        {
            let mut candidate = self.clone();
            candidate.commit(outcome, state.clone());
            if let Err(violations) = SessionInvariants::check_all(&candidate) {
                let descriptions = violations
                    .iter()
                    .map(|v| v.description.as_str())
                    .collect::<Vec<_>>()
                    .join("; ");
                warn!(%descriptions, "Session invariant violated");
                return Err(BoardError::new(BoardErrorKind::InvariantViolation(
                    descriptions,
                )));
            }
        }

        self.commit(outcome, state);
        Ok(view)
    }

    fn commit(&mut self, outcome: Outcome, state: GameState) {
        match outcome {
            Outcome::Accepted(action) => {
                debug!(%action, "Recording move");
                self.history.push(action);
                self.notice = None;
            }
            Outcome::Rejected(rejection) => {
                self.notice = Some(rejection);
            }
        }
        self.state = state;
    }
}
