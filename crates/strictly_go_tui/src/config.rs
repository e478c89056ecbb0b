//! Board configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use ratatui::style::Color;
use serde::{Deserialize, Serialize};
use std::path::Path;
use strictly_go::{BoardSize, Player};
use tracing::{debug, info, instrument};

/// Board size used when neither the command line nor the config file sets one.
pub const DEFAULT_SIZE: usize = 5;

/// Largest board the terminal front end will draw. Row labels are two digits wide.
pub const MAX_SIZE: usize = 99;

/// Colour a player's stones are drawn in.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum StoneColor {
    /// Black stones.
    Black,
    /// White stones.
    White,
    /// Red stones.
    Red,
    /// Blue stones.
    Blue,
    /// Green stones.
    Green,
    /// Magenta stones.
    Magenta,
}

impl StoneColor {
    /// Terminal colour for this stone.
    pub fn to_color(self) -> Color {
        match self {
            StoneColor::Black => Color::Black,
            StoneColor::White => Color::White,
            StoneColor::Red => Color::Red,
            StoneColor::Blue => Color::Blue,
            StoneColor::Green => Color::Green,
            StoneColor::Magenta => Color::Magenta,
        }
    }
}

/// Settings for a game session.
#[derive(Debug, Clone, Getters, Serialize, Deserialize)]
pub struct GoConfig {
    /// Board size. Validated when the session starts.
    #[serde(default)]
    size: Option<i64>,

    /// Colour of the first player's stones.
    #[serde(default = "default_first_color")]
    first_color: StoneColor,

    /// Colour of the second player's stones.
    #[serde(default = "default_second_color")]
    second_color: StoneColor,
}

#[instrument]
fn default_first_color() -> StoneColor {
    StoneColor::Black
}

#[instrument]
fn default_second_color() -> StoneColor {
    StoneColor::White
}

impl Default for GoConfig {
    fn default() -> Self {
        Self {
            size: None,
            first_color: default_first_color(),
            second_color: default_second_color(),
        }
    }
}

impl GoConfig {
    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        if config.first_color == config.second_color {
            return Err(ConfigError::new(format!(
                "Both players would use {} stones",
                config.first_color
            )));
        }

        info!(size = ?config.size, first = %config.first_color, second = %config.second_color, "Config loaded");
        Ok(config)
    }

    /// Picks the board size: command line, then config file, then the default.
    ///
    /// Sizes above [`MAX_SIZE`] are rejected.
    #[instrument(skip(self))]
    pub fn resolve_size(&self, cli: Option<BoardSize>) -> Result<BoardSize, ConfigError> {
        let size = match (cli, self.size) {
            (Some(size), _) => size,
            (None, Some(size)) => match BoardSize::try_from(size) {
                Ok(size) => size,
                Err(e) => {
                    return Err(ConfigError::new(format!(
                        "Config size rejected: {}",
                        e.kind()
                    )));
                }
            },
            (None, None) => match BoardSize::new(DEFAULT_SIZE) {
                Ok(size) => size,
                Err(e) => {
                    return Err(ConfigError::new(format!(
                        "Default size rejected: {}",
                        e.kind()
                    )));
                }
            },
        };

        if size.get() > MAX_SIZE {
            return Err(ConfigError::new(format!(
                "Board size {} is too large to draw (at most {})",
                size, MAX_SIZE
            )));
        }
        debug!(%size, "Board size resolved");
        Ok(size)
    }

    /// Stone colour for a player.
    pub fn color_for(&self, player: Player) -> StoneColor {
        match player {
            Player::A => self.first_color,
            Player::B => self.second_color,
        }
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
