//! Board coordinates for the dark-square grid.

use serde::{Deserialize, Serialize};

/// Number of rows and columns on the board.
pub const BOARD_SIZE: u8 = 8;

/// Error produced when a coordinate falls off the 8x8 grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
#[display("coordinates ({_0}, {_1}) are outside the 8x8 board")]
pub struct OutOfBounds(pub i16, pub i16);

impl std::error::Error for OutOfBounds {}

/// A board coordinate (row, column), both in `[0, 8)`.
///
/// Cells are in bounds by construction: [`Cell::new`] rejects coordinates
/// off the grid, and coordinate math such as [`Cell::offset`] returns
/// `None` rather than leaving it. Pieces may only occupy *playable*
/// (dark) cells, those where `row + col` is even.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    row: u8,
    col: u8,
}

impl Cell {
    /// Creates a cell, rejecting coordinates outside the grid.
    pub fn new(row: u8, col: u8) -> Result<Self, OutOfBounds> {
        if row < BOARD_SIZE && col < BOARD_SIZE {
            Ok(Self { row, col })
        } else {
            Err(OutOfBounds(i16::from(row), i16::from(col)))
        }
    }

    /// Row index, counted from the geese's home rank.
    pub fn row(&self) -> u8 {
        self.row
    }

    /// Column index.
    pub fn col(&self) -> u8 {
        self.col
    }

    /// True when this is one of the dark squares pieces may occupy.
    pub fn is_playable(&self) -> bool {
        (self.row + self.col) % 2 == 0
    }

    /// The cell shifted by the given deltas, or `None` when the result
    /// leaves the grid.
    pub fn offset(&self, dr: i8, dc: i8) -> Option<Cell> {
        let row = i16::from(self.row) + i16::from(dr);
        let col = i16::from(self.col) + i16::from(dc);
        if (0..i16::from(BOARD_SIZE)).contains(&row) && (0..i16::from(BOARD_SIZE)).contains(&col) {
            Some(Self {
                row: row as u8,
                col: col as u8,
            })
        } else {
            None
        }
    }

    /// All 64 cells in row-major order.
    pub fn all() -> impl Iterator<Item = Cell> {
        (0..BOARD_SIZE)
            .flat_map(|row| (0..BOARD_SIZE).map(move |col| Cell { row, col }))
    }

    /// The fox's starting cell: the bottom-right playable corner.
    pub fn fox_corner() -> Cell {
        Cell { row: 7, col: 7 }
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// The four diagonal directions the fox may travel.
///
/// "Up" points toward the geese's home rank (row 0); "down" points
/// toward the fox's starting corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::EnumIter)]
pub enum Diagonal {
    /// Toward row 0, lower column.
    UpLeft,
    /// Toward row 0, higher column.
    UpRight,
    /// Toward row 7, lower column.
    DownLeft,
    /// Toward row 7, higher column.
    DownRight,
}

impl Diagonal {
    /// (row, column) delta for a single step in this direction.
    pub fn delta(&self) -> (i8, i8) {
        match self {
            Diagonal::UpLeft => (-1, -1),
            Diagonal::UpRight => (-1, 1),
            Diagonal::DownLeft => (1, -1),
            Diagonal::DownRight => (1, 1),
        }
    }
}
