//! Board coordinates and the validated board size.

use crate::error::{BoardError, BoardErrorKind};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::num::NonZeroUsize;
use std::str::FromStr;
use tracing::instrument;

/// A cell on the board: `x` is the column, `y` the row, both zero-based.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    JsonSchema,
    derive_new::new,
)]
pub struct Coordinate {
    /// Column.
    pub x: usize,
    /// Row.
    pub y: usize,
}

impl Coordinate {
    /// Returns true if the coordinate lies on a board of the given size.
    pub fn is_within(self, size: BoardSize) -> bool {
        self.x < size.get() && self.y < size.get()
    }

    /// Checks the coordinate against the board, reporting `OutOfRange` on failure.
    #[track_caller]
    pub fn check_within(self, size: BoardSize) -> Result<Self, BoardError> {
        if self.is_within(size) {
            Ok(self)
        } else {
            Err(BoardError::new(BoardErrorKind::OutOfRange {
                coordinate: self,
                size: size.get(),
            }))
        }
    }
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Error parsing a coordinate from text.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("Invalid move: should be 'x y', got '{}'", input)]
pub struct ParseCoordinateError {
    /// The rejected input.
    pub input: String,
}

impl FromStr for Coordinate {
    type Err = ParseCoordinateError;

    /// Parses `"x y"` (also accepts `"x,y"` and `"(x, y)"`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseCoordinateError {
            input: s.to_string(),
        };
        let cleaned = s.trim().trim_start_matches('(').trim_end_matches(')');
        let mut parts = cleaned
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|part| !part.is_empty());

        let x = parts.next().ok_or_else(err)?.parse().map_err(|_| err())?;
        let y = parts.next().ok_or_else(err)?.parse().map_err(|_| err())?;
        if parts.next().is_some() {
            return Err(err());
        }
        Ok(Self { x, y })
    }
}

/// Side length of a square board. Always at least 1.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(try_from = "i64", into = "usize")]
pub struct BoardSize(NonZeroUsize);

impl BoardSize {
    /// Largest supported side length. Every cell is allocated up front.
    pub const MAX: usize = 4096;

    /// Creates a board size, rejecting zero and anything above [`MAX`](Self::MAX).
    #[track_caller]
    #[instrument]
    pub fn new(size: usize) -> Result<Self, BoardError> {
        match NonZeroUsize::new(size) {
            Some(n) if size <= Self::MAX => Ok(Self(n)),
            Some(_) => Err(BoardError::new(BoardErrorKind::InvalidSize(format!(
                "{} (must be at most {})",
                size,
                Self::MAX
            )))),
            None => Err(BoardError::new(BoardErrorKind::InvalidSize(format!(
                "{} (must be at least 1)",
                size
            )))),
        }
    }

    /// Returns the side length.
    pub fn get(self) -> usize {
        self.0.get()
    }

    /// Number of cells on the board.
    pub fn cell_count(self) -> usize {
        self.get() * self.get()
    }
}

impl TryFrom<i64> for BoardSize {
    type Error = BoardError;

    #[track_caller]
    fn try_from(size: i64) -> Result<Self, Self::Error> {
        let Ok(side) = usize::try_from(size) else {
            return Err(BoardError::new(BoardErrorKind::InvalidSize(format!(
                "{} (must be at least 1)",
                size
            ))));
        };
        Self::new(side)
    }
}

impl TryFrom<usize> for BoardSize {
    type Error = BoardError;

    #[track_caller]
    fn try_from(size: usize) -> Result<Self, Self::Error> {
        Self::new(size)
    }
}

impl From<BoardSize> for usize {
    fn from(size: BoardSize) -> Self {
        size.get()
    }
}

impl FromStr for BoardSize {
    type Err = BoardError;

    #[track_caller]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let Ok(size) = s.trim().parse::<i64>() else {
            return Err(BoardError::new(BoardErrorKind::InvalidSize(format!(
                "'{}' is not an integer",
                s
            ))));
        };
        Self::try_from(size)
    }
}

impl std::fmt::Display for BoardSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.get())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_space_separated() {
        assert_eq!("3 4".parse::<Coordinate>(), Ok(Coordinate::new(3, 4)));
    }

    #[test]
    fn test_parse_display_form() {
        let coord = Coordinate::new(0, 12);
        assert_eq!(coord.to_string().parse::<Coordinate>(), Ok(coord));
        assert_eq!("1,2".parse::<Coordinate>(), Ok(Coordinate::new(1, 2)));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!("".parse::<Coordinate>().is_err());
        assert!("1".parse::<Coordinate>().is_err());
        assert!("1 2 3".parse::<Coordinate>().is_err());
        assert!("-1 2".parse::<Coordinate>().is_err());
        assert!("a b".parse::<Coordinate>().is_err());
    }

    #[test]
    fn test_board_size_rejects_non_positive() {
        assert!(BoardSize::new(0).is_err());
        assert!(BoardSize::try_from(0i64).is_err());
        assert!(BoardSize::try_from(-1i64).is_err());
        assert!(BoardSize::try_from(1i64).is_ok());
    }

    #[test]
    fn test_board_size_rejects_oversized() {
        assert_eq!(BoardSize::new(BoardSize::MAX).map(BoardSize::get).ok(), Some(BoardSize::MAX));
        let err = BoardSize::new(BoardSize::MAX + 1).unwrap_err();
        assert!(matches!(err.kind(), BoardErrorKind::InvalidSize(_)));
        assert!(BoardSize::try_from(1i64 << 40).is_err());
        assert!("1099511627776".parse::<BoardSize>().is_err());
        assert!(serde_json::from_str::<BoardSize>("5000").is_err());
    }

    #[test]
    fn test_board_size_from_str() {
        assert_eq!("5".parse::<BoardSize>().map(BoardSize::get).ok(), Some(5));
        assert_eq!(" 19 ".parse::<BoardSize>().map(BoardSize::get).ok(), Some(19));
        for bad in ["0", "-3", "2.5", "five", ""] {
            let err = bad.parse::<BoardSize>().expect_err(bad);
            assert!(matches!(err.kind(), BoardErrorKind::InvalidSize(_)));
        }
    }

    #[test]
    fn test_within_bounds() {
        let size = BoardSize::new(3).unwrap();
        assert!(Coordinate::new(2, 2).is_within(size));
        assert!(!Coordinate::new(3, 0).is_within(size));
        assert!(!Coordinate::new(0, 3).is_within(size));
        assert!(Coordinate::new(3, 0).check_within(size).is_err());
    }

    #[test]
    fn test_board_size_serde() {
        let size: BoardSize = serde_json::from_str("9").unwrap();
        assert_eq!(size.get(), 9);
        assert_eq!(serde_json::to_string(&size).unwrap(), "9");
        assert!(serde_json::from_str::<BoardSize>("0").is_err());
        assert!(serde_json::from_str::<BoardSize>("-2").is_err());
    }
}
