//! History consistency invariant: the move log reproduces the board.

use super::Invariant;
use crate::{GameState, Session};

/// Invariant: replaying the session's history onto an empty board yields
/// the current state.
///
/// Every move must land on an empty cell in turn order, so this also
/// shows that stones were never overwritten.
pub struct HistoryConsistentInvariant;

impl Invariant<Session> for HistoryConsistentInvariant {
    fn holds(session: &Session) -> bool {
        let mut rebuilt = GameState::new(session.state().size());
        for action in session.history() {
            match rebuilt.apply(*action) {
                Ok(placement) if placement.is_accepted() => rebuilt = placement.into_state(),
                _ => return false,
            }
        }
        rebuilt == *session.state()
    }

    fn description() -> &'static str {
        "Move history replays to the current board"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{BoardSize, CellSelected};

    #[test]
    fn test_empty_session_holds() {
        let session = Session::new(BoardSize::new(3).unwrap());
        assert!(HistoryConsistentInvariant::holds(&session));
    }

    #[test]
    fn test_holds_across_accepts_and_rejects() {
        let mut session = Session::new(BoardSize::new(3).unwrap());
        for (x, y) in [(0, 0), (0, 0), (1, 2), (1, 2), (2, 2)] {
            session.dispatch(CellSelected::new(x, y)).unwrap();
            assert!(HistoryConsistentInvariant::holds(&session));
        }
        assert_eq!(session.history().len(), 3);
    }
}
