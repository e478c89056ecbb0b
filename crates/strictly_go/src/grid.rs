//! Square grid of occupants with copy-on-write rows.
//!
//! Rows are reference counted. Writing a cell produces a new grid that
//! shares every untouched row with the old one and owns a fresh copy of
//! the row that changed, so successive game states never alias mutable
//! storage.

use crate::coordinate::{BoardSize, Coordinate};
use crate::types::Occupant;
use serde::ser::{Serialize, Serializer};
use std::sync::Arc;

/// A `size × size` matrix of occupants, indexed `[y][x]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    size: BoardSize,
    rows: Vec<Arc<Vec<Occupant>>>,
}

impl Grid {
    /// Creates a grid of empty cells.
    pub fn new(size: BoardSize) -> Self {
        let n = size.get();
        let empty_row = Arc::new(vec![Occupant::Empty; n]);
        Self {
            size,
            rows: vec![empty_row; n],
        }
    }

    /// Returns the board size.
    pub fn size(&self) -> BoardSize {
        self.size
    }

    /// Returns the occupant at `coord`, or `None` if it is off the board.
    pub fn get(&self, coord: Coordinate) -> Option<Occupant> {
        self.rows
            .get(coord.y)
            .and_then(|row| row.get(coord.x))
            .copied()
    }

    /// Returns a new grid with `coord` set to `occupant`.
    ///
    /// Only the row containing `coord` is copied. Returns `None` if the
    /// coordinate is off the board.
    pub fn with_cell(&self, coord: Coordinate, occupant: Occupant) -> Option<Self> {
        if !coord.is_within(self.size) {
            return None;
        }
        let mut rows = self.rows.clone();
        Arc::make_mut(&mut rows[coord.y])[coord.x] = occupant;
        Some(Self {
            size: self.size,
            rows,
        })
    }

    /// Iterates rows top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Occupant]> {
        self.rows.iter().map(|row| row.as_slice())
    }

    /// Iterates every cell in row-major order with its coordinate.
    pub fn cells(&self) -> impl Iterator<Item = (Coordinate, Occupant)> + '_ {
        self.rows.iter().enumerate().flat_map(|(y, row)| {
            row.iter()
                .enumerate()
                .map(move |(x, occupant)| (Coordinate::new(x, y), *occupant))
        })
    }

    /// Number of cells holding a stone.
    pub fn stone_count(&self) -> usize {
        self.cells().filter(|(_, occupant)| !occupant.is_empty()).count()
    }

    /// Formats the grid the way the console board printer does: a column
    /// header, then one labelled line per row.
    pub fn display(&self) -> String {
        render_text(self.size.get(), self.rows())
    }

    #[cfg(test)]
    fn shares_row_with(&self, other: &Grid, y: usize) -> bool {
        Arc::ptr_eq(&self.rows[y], &other.rows[y])
    }
}

/// Renders rows of occupants as text with a column header and row labels.
pub(crate) fn render_text<'a>(
    width: usize,
    rows: impl Iterator<Item = &'a [Occupant]>,
) -> String {
    let mut result = String::from("   ");
    for x in 0..width {
        result.push_str(&format!("{:<3}", x));
    }
    result.push('\n');
    for (y, row) in rows.enumerate() {
        result.push_str(&format!("{:>2}|", y));
        for occupant in row {
            result.push(occupant.marker());
            result.push_str("  ");
        }
        result.push('\n');
    }
    result
}

impl Serialize for Grid {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.rows())
    }
}
