//! Read-only projection of a game state into renderable cells.
//!
//! The projection does no validation of its own. Each cell carries the
//! [`CellSelected`] event the presentation layer raises when the cell is
//! activated; [`forward`] hands that event to the state and re-projects
//! whatever comes back.

use crate::action::CellSelected;
use crate::coordinate::Coordinate;
use crate::error::BoardError;
use crate::grid::render_text;
use crate::placement::Placement;
use crate::state::GameState;
use crate::types::{Occupant, Player};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// One cell as the presentation layer sees it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct CellView {
    /// Column.
    pub x: usize,
    /// Row.
    pub y: usize,
    /// What is on the cell.
    pub occupant: Occupant,
    /// Event to raise when this cell is activated.
    pub on_select: CellSelected,
}

/// Row-major grid of cell descriptors plus the turn indicator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct BoardView {
    size: usize,
    to_move: Player,
    move_number: usize,
    rows: Vec<Vec<CellView>>,
}

impl BoardView {
    /// Projects a snapshot of the game.
    #[instrument(skip(state), fields(size = state.size().get()))]
    pub fn project(state: &GameState) -> Self {
        let rows = state
            .grid()
            .rows()
            .enumerate()
            .map(|(y, row)| {
                row.iter()
                    .enumerate()
                    .map(|(x, occupant)| CellView {
                        x,
                        y,
                        occupant: *occupant,
                        on_select: CellSelected::new(x, y),
                    })
                    .collect()
            })
            .collect();

        Self {
            size: state.size().get(),
            to_move: state.to_move(),
            move_number: state.move_number(),
            rows,
        }
    }

    /// Board side length.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Player whose stone the next accepted selection places.
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// One-based number of the move about to be played.
    pub fn move_number(&self) -> usize {
        self.move_number
    }

    /// Rows top to bottom.
    pub fn rows(&self) -> &[Vec<CellView>] {
        &self.rows
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = &CellView> {
        self.rows.iter().flatten()
    }

    /// The cell at `coord`, if it is on the board.
    pub fn cell(&self, coord: Coordinate) -> Option<&CellView> {
        self.rows.get(coord.y).and_then(|row| row.get(coord.x))
    }

    /// Just the occupants, `size` rows of `size` values.
    pub fn occupants(&self) -> Vec<Vec<Occupant>> {
        self.rows
            .iter()
            .map(|row| row.iter().map(|cell| cell.occupant).collect())
            .collect()
    }

    /// JSON Schema of the projection, for presentation layers outside Rust.
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(BoardView)
    }
}

impl From<&GameState> for BoardView {
    fn from(state: &GameState) -> Self {
        Self::project(state)
    }
}

impl std::fmt::Display for BoardView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let occupants = self.occupants();
        writeln!(
            f,
            "Move #{} - Player {} to move",
            self.move_number, self.to_move
        )?;
        write!(
            f,
            "{}",
            render_text(self.size, occupants.iter().map(Vec::as_slice))
        )
    }
}

/// Result of forwarding a selection: the placement and the refreshed view.
#[derive(Debug, Clone)]
pub struct Refresh {
    placement: Placement,
    view: BoardView,
}

impl Refresh {
    /// What the state machine did with the selection.
    pub fn placement(&self) -> &Placement {
        &self.placement
    }

    /// Projection of the resulting state.
    pub fn view(&self) -> &BoardView {
        &self.view
    }

    /// Splits into the placement and the view.
    pub fn into_parts(self) -> (Placement, BoardView) {
        (self.placement, self.view)
    }
}

/// Forwards a cell selection to [`GameState::place_at`] and re-projects.
///
/// A rejected selection still yields a refresh; its view equals the
/// projection of the unchanged input state.
#[track_caller]
#[instrument(skip(state))]
pub fn forward(state: &GameState, event: CellSelected) -> Result<Refresh, BoardError> {
    let placement = state.place_at(event.x, event.y)?;
    let view = BoardView::project(placement.state());
    Ok(Refresh { placement, view })
}
