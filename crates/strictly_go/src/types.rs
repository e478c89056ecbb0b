//! Core domain types for the Go board.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Player in the game.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    JsonSchema,
    derive_more::Display,
    strum::EnumIter,
)]
pub enum Player {
    /// First player (moves first).
    A,
    /// Second player.
    B,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::A => Player::B,
            Player::B => Player::A,
        }
    }

    /// Single-character marker used by the text board.
    pub fn marker(self) -> char {
        match self {
            Player::A => 'O',
            Player::B => 'X',
        }
    }
}

/// The content of a single grid cell.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
pub enum Occupant {
    /// Nobody has played here.
    #[default]
    Empty,
    /// A stone placed by a player.
    Stone(Player),
}

impl Occupant {
    /// Returns true if no stone has been placed here.
    pub fn is_empty(self) -> bool {
        matches!(self, Occupant::Empty)
    }

    /// Returns the owner of the stone, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Occupant::Empty => None,
            Occupant::Stone(player) => Some(player),
        }
    }

    /// Single-character marker used by the text board.
    pub fn marker(self) -> char {
        match self {
            Occupant::Empty => ' ',
            Occupant::Stone(player) => player.marker(),
        }
    }
}

impl std::fmt::Display for Occupant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Occupant::Empty => write!(f, "Empty"),
            Occupant::Stone(player) => write!(f, "Player {}", player),
        }
    }
}
