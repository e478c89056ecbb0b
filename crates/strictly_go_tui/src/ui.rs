//! Stateless UI rendering for the Go board.

use crate::app::App;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use strictly_go::{BoardSize, BoardView, CellView, Coordinate, Occupant};

/// Terminal columns taken by one board cell.
pub const CELL_WIDTH: u16 = 3;

const WOOD: Color = Color::Yellow;

/// Renders the whole screen and returns the area holding the board cells.
pub fn draw(frame: &mut Frame, app: &App) -> Rect {
    let area = frame.area();
    let view = app.session().view();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(3),    // Board
            Constraint::Length(4), // Status
        ])
        .split(area);

    // Title
    let title = Paragraph::new(format!(
        "Strictly Go - {}x{}",
        view.size(),
        view.size()
    ))
    .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
    .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    let board = draw_board(frame, chunks[1], &view, app);
    draw_status(frame, chunks[2], app);
    board
}

fn draw_board(frame: &mut Frame, area: Rect, view: &BoardView, app: &App) -> Rect {
    let cells = u16::try_from(view.size()).unwrap_or(u16::MAX);
    let board_area = center_rect(
        area,
        cells.saturating_mul(CELL_WIDTH).saturating_add(2),
        cells.saturating_add(2),
    );

    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" Move #{} ", view.move_number()));
    let inner = block.inner(board_area);

    let lines: Vec<Line> = view
        .rows()
        .iter()
        .map(|row| {
            Line::from(
                row.iter()
                    .map(|cell| draw_cell(cell, app))
                    .collect::<Vec<_>>(),
            )
        })
        .collect();

    frame.render_widget(Paragraph::new(lines).block(block), board_area);
    inner
}

fn draw_cell(cell: &CellView, app: &App) -> Span<'static> {
    let base = Style::default().bg(WOOD);
    let (symbol, style) = match cell.occupant {
        Occupant::Empty => (" · ", base.fg(Color::DarkGray)),
        Occupant::Stone(player) => (
            " ● ",
            base.fg(app.config().color_for(player).to_color())
                .add_modifier(Modifier::BOLD),
        ),
    };

    let style = if Coordinate::new(cell.x, cell.y) == app.cursor() {
        style.add_modifier(Modifier::REVERSED)
    } else {
        style
    };

    Span::styled(symbol, style)
}

fn draw_status(frame: &mut Frame, area: Rect, app: &App) {
    let color = if app.has_notice() {
        Color::Red
    } else {
        Color::Yellow
    };

    let text = vec![
        Line::from(Span::styled(app.status().to_string(), Style::default().fg(color))),
        Line::from(Span::styled(
            "arrows/hjkl: move | enter/space/click: place | q: quit",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let status = Paragraph::new(text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, area);
}

/// Maps a terminal position inside the board area to a board coordinate.
pub fn hit_test(inner: Rect, size: BoardSize, column: u16, row: u16) -> Option<Coordinate> {
    if column < inner.x || row < inner.y {
        return None;
    }
    let dx = column - inner.x;
    let dy = row - inner.y;
    if dx >= inner.width || dy >= inner.height {
        return None;
    }

    let coord = Coordinate::new((dx / CELL_WIDTH) as usize, dy as usize);
    coord.is_within(size).then_some(coord)
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(vert[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GoConfig;
    use ratatui::{Terminal, backend::TestBackend, buffer::Buffer};
    use strictly_go::Session;

    fn app(n: usize) -> App {
        App::new(
            Session::new(BoardSize::new(n).unwrap()),
            GoConfig::default(),
        )
    }

    fn row_text(buffer: &Buffer, y: u16) -> String {
        (0..buffer.area.width)
            .map(|x| buffer[(x, y)].symbol())
            .collect()
    }

    fn render(app: &App) -> (Buffer, Rect) {
        let mut terminal = Terminal::new(TestBackend::new(60, 20)).unwrap();
        let mut board = Rect::default();
        terminal
            .draw(|frame| {
                board = draw(frame, app);
            })
            .unwrap();
        (terminal.backend().buffer().clone(), board)
    }

    #[test]
    fn test_title_names_board_size() {
        let (buffer, _) = render(&app(5));
        assert!(row_text(&buffer, 0).contains("Strictly Go - 5x5"));
    }

    #[test]
    fn test_board_area_fits_cells() {
        let (_, board) = render(&app(5));
        assert_eq!(board.width, 5 * CELL_WIDTH);
        assert_eq!(board.height, 5);
    }

    #[test]
    fn test_largest_board_clips_to_terminal() {
        let (_, board) = render(&app(crate::config::MAX_SIZE));
        assert!(board.width <= 60);
        assert!(board.height <= 20);
    }

    #[test]
    fn test_stone_drawn_where_placed() {
        let mut app = app(3);
        app.select(Coordinate::new(1, 0)).unwrap();
        let (buffer, board) = render(&app);

        let x = board.x + CELL_WIDTH + 1;
        assert_eq!(buffer[(x, board.y)].symbol(), "●");
        assert_eq!(buffer[(board.x + 1, board.y)].symbol(), "·");
    }

    #[test]
    fn test_notice_shown_in_status() {
        let mut app = app(3);
        app.select(Coordinate::new(0, 0)).unwrap();
        app.select(Coordinate::new(0, 0)).unwrap();
        let (buffer, _) = render(&app);

        let shown = (0..buffer.area.height).any(|y| row_text(&buffer, y).contains("You can't do that!"));
        assert!(shown);
    }

    #[test]
    fn test_hit_test_maps_columns_to_cells() {
        let inner = Rect::new(4, 2, 9, 3);
        let size = BoardSize::new(3).unwrap();
        assert_eq!(hit_test(inner, size, 4, 2), Some(Coordinate::new(0, 0)));
        assert_eq!(hit_test(inner, size, 6, 2), Some(Coordinate::new(0, 0)));
        assert_eq!(hit_test(inner, size, 7, 3), Some(Coordinate::new(1, 1)));
        assert_eq!(hit_test(inner, size, 12, 4), Some(Coordinate::new(2, 2)));
    }

    #[test]
    fn test_hit_test_outside_is_none() {
        let inner = Rect::new(4, 2, 9, 3);
        let size = BoardSize::new(3).unwrap();
        assert_eq!(hit_test(inner, size, 3, 2), None);
        assert_eq!(hit_test(inner, size, 13, 2), None);
        assert_eq!(hit_test(inner, size, 4, 5), None);
        assert_eq!(hit_test(inner, size, 4, 1), None);
    }
}
