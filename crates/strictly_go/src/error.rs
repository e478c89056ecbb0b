//! Board error types.

use crate::coordinate::Coordinate;
use crate::placement::Rejection;
use derive_more::{Display, Error};
use tracing::instrument;

/// What went wrong.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum BoardErrorKind {
    /// Board size was zero, negative, or not an integer.
    #[display("Invalid board size: {}", _0)]
    InvalidSize(String),

    /// Coordinate lies outside the board.
    #[display("Coordinate {coordinate} is outside a {size}x{size} board")]
    OutOfRange {
        /// The offending coordinate.
        coordinate: Coordinate,
        /// Board dimension.
        size: usize,
    },

    /// A recorded move could not be replayed.
    #[display("Move #{} could not be replayed: {}", index + 1, rejection)]
    ReplayRejected {
        /// Zero-based index into the move log.
        index: usize,
        /// Why the board refused it.
        rejection: Rejection,
    },

    /// A placement postcondition failed.
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

/// Board error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Board error: {} at {}:{}", kind, file, line)]
pub struct BoardError {
    /// Error kind.
    kind: BoardErrorKind,
    /// Line number where error occurred.
    line: u32,
    /// Source file where error occurred.
    file: &'static str,
}

impl BoardError {
    /// Creates a new board error with caller location tracking.
    #[track_caller]
    #[instrument(skip(kind))]
    pub fn new(kind: BoardErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }

    /// Returns the error kind.
    pub fn kind(&self) -> &BoardErrorKind {
        &self.kind
    }

    /// Source line where the error was raised.
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Source file where the error was raised.
    pub fn file(&self) -> &'static str {
        self.file
    }
}

impl From<BoardErrorKind> for BoardError {
    #[track_caller]
    fn from(kind: BoardErrorKind) -> Self {
        Self::new(kind)
    }
}
