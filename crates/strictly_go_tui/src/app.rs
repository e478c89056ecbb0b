//! Application state and logic.

use crate::config::GoConfig;
use crate::input::move_cursor;
use crate::ui::hit_test;
use crossterm::event::KeyCode;
use ratatui::layout::Rect;
use strictly_go::{BoardError, BoardView, Coordinate, Player, Session};
use tracing::{debug, info, instrument};

/// Main application state.
pub struct App {
    session: Session,
    config: GoConfig,
    cursor: Coordinate,
    board_area: Option<Rect>,
    status: String,
    should_quit: bool,
}

impl App {
    /// Creates a new application around a session.
    pub fn new(session: Session, config: GoConfig) -> Self {
        let mut app = Self {
            session,
            config,
            cursor: Coordinate::new(0, 0),
            board_area: None,
            status: String::new(),
            should_quit: false,
        };
        app.status = app.turn_status(&app.session.view());
        app
    }

    /// Gets the session.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Gets the config.
    pub fn config(&self) -> &GoConfig {
        &self.config
    }

    /// Gets the cursor position.
    pub fn cursor(&self) -> Coordinate {
        self.cursor
    }

    /// Gets the current status message.
    pub fn status(&self) -> &str {
        &self.status
    }

    /// True if the last selection was refused.
    pub fn has_notice(&self) -> bool {
        self.session.notice().is_some()
    }

    /// True once the user asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Records where the board cells were last drawn, for mouse hit testing.
    pub fn set_board_area(&mut self, area: Rect) {
        self.board_area = Some(area);
    }

    /// Label for a player, using their stone colour.
    pub fn player_label(&self, player: Player) -> String {
        let color = self.config.color_for(player).to_string();
        let mut chars = color.chars();
        let capitalized = match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => color,
        };
        format!("{} ({})", capitalized, player)
    }

    fn turn_status(&self, view: &BoardView) -> String {
        format!(
            "Move #{} - {} to play",
            view.move_number(),
            self.player_label(view.to_move())
        )
    }

    /// Selects a cell, as if the user activated it.
    #[instrument(skip(self))]
    pub fn select(&mut self, coord: Coordinate) -> Result<(), BoardError> {
        let view = self.session.dispatch(coord.into())?;
        self.status = match self.session.notice() {
            Some(notice) => notice.to_string(),
            None => self.turn_status(&view),
        };
        debug!(status = %self.status, "Selection handled");
        Ok(())
    }

    /// Handles a key press.
    pub fn handle_key(&mut self, key: KeyCode) -> Result<(), BoardError> {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => {
                info!("User quit");
                self.should_quit = true;
            }
            KeyCode::Enter | KeyCode::Char(' ') => self.select(self.cursor)?,
            _ => {
                self.cursor = move_cursor(self.cursor, key, self.session.state().size());
            }
        }
        Ok(())
    }

    /// Handles a left click at a terminal position.
    pub fn handle_click(&mut self, column: u16, row: u16) -> Result<(), BoardError> {
        let size = self.session.state().size();
        if let Some(area) = self.board_area
            && let Some(coord) = hit_test(area, size, column, row)
        {
            self.cursor = coord;
            self.select(coord)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strictly_go::{BoardSize, Occupant};

    fn app(n: usize) -> App {
        App::new(
            Session::new(BoardSize::new(n).unwrap()),
            GoConfig::default(),
        )
    }

    #[test]
    fn test_initial_status_names_first_player() {
        let app = app(3);
        assert_eq!(app.status(), "Move #1 - Black (A) to play");
        assert!(!app.has_notice());
    }

    #[test]
    fn test_enter_places_at_cursor() {
        let mut app = app(3);
        app.handle_key(KeyCode::Right).unwrap();
        app.handle_key(KeyCode::Down).unwrap();
        app.handle_key(KeyCode::Enter).unwrap();

        assert_eq!(
            app.session().state().occupant_at(1, 1).unwrap(),
            Occupant::Stone(Player::A)
        );
        assert_eq!(app.status(), "Move #2 - White (B) to play");
    }

    #[test]
    fn test_occupied_cell_shows_notice() {
        let mut app = app(3);
        app.handle_key(KeyCode::Char(' ')).unwrap();
        app.handle_key(KeyCode::Char(' ')).unwrap();

        assert!(app.has_notice());
        assert!(app.status().starts_with("You can't do that!"));
        assert_eq!(app.session().state().to_move(), Player::B);
    }

    #[test]
    fn test_click_selects_cell() {
        let mut app = app(3);
        app.set_board_area(Rect::new(10, 5, 9, 3));
        // Column 16 is the third cell (x = 2), row 6 is y = 1.
        app.handle_click(16, 6).unwrap();
        assert_eq!(app.cursor(), Coordinate::new(2, 1));
        assert_eq!(
            app.session().state().occupant_at(2, 1).unwrap(),
            Occupant::Stone(Player::A)
        );
    }

    #[test]
    fn test_click_outside_board_ignored() {
        let mut app = app(3);
        app.set_board_area(Rect::new(10, 5, 9, 3));
        app.handle_click(2, 2).unwrap();
        assert_eq!(app.session().state().stones_placed(), 0);
    }

    #[test]
    fn test_quit_keys() {
        let mut app = app(2);
        assert!(!app.should_quit());
        app.handle_key(KeyCode::Char('q')).unwrap();
        assert!(app.should_quit());
    }
}
