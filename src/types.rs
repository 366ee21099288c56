//! Core domain types for Fox and Geese.

use crate::cell::Cell;
use serde::{Deserialize, Serialize};

/// Number of geese on the board at the start of a game.
pub const STARTING_GEESE: u8 = 12;

/// Side in the game.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter,
)]
pub enum Side {
    /// The flock of twelve geese (moves first).
    Geese,
    /// The lone fox.
    Fox,
}

impl Side {
    /// Returns the opposing side.
    pub fn opponent(self) -> Self {
        match self {
            Side::Geese => Side::Fox,
            Side::Fox => Side::Geese,
        }
    }

    /// The occupant marker for a piece of this side.
    pub fn piece(self) -> Occupant {
        match self {
            Side::Geese => Occupant::Goose,
            Side::Fox => Occupant::Fox,
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Geese => write!(f, "Geese"),
            Side::Fox => write!(f, "Fox"),
        }
    }
}

/// Contents of a single board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Occupant {
    /// Nothing on the cell.
    Empty,
    /// A goose.
    Goose,
    /// The fox.
    Fox,
}

impl Occupant {
    /// The side owning this piece, or `None` for an empty cell.
    pub fn side(self) -> Option<Side> {
        match self {
            Occupant::Empty => None,
            Occupant::Goose => Some(Side::Geese),
            Occupant::Fox => Some(Side::Fox),
        }
    }
}

/// The 8x8 playing board.
///
/// Pure storage with query helpers: the board knows nothing about turn
/// order or rules. Mutation happens through [`Board::set`], which only
/// relies on the bounds guarantee carried by [`Cell`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    cells: [[Occupant; 8]; 8],
}

impl Board {
    /// Creates an empty board.
    pub fn empty() -> Self {
        Self {
            cells: [[Occupant::Empty; 8]; 8],
        }
    }

    /// Creates the standard starting position: geese fill the playable
    /// cells of the first three rows, the fox sits in the far corner.
    pub fn standard() -> Self {
        let mut board = Self::empty();
        for cell in Cell::all() {
            if cell.row() < 3 && cell.is_playable() {
                board.set(cell, Occupant::Goose);
            }
        }
        board.set(Cell::fox_corner(), Occupant::Fox);
        board
    }

    /// The occupant of `cell`.
    pub fn occupant(&self, cell: Cell) -> Occupant {
        self.cells[cell.row() as usize][cell.col() as usize]
    }

    /// Sets the occupant of `cell` directly. No game-rule validation.
    pub fn set(&mut self, cell: Cell, occupant: Occupant) {
        self.cells[cell.row() as usize][cell.col() as usize] = occupant;
    }

    /// Cells occupied by pieces of `side`, in row-major order.
    pub fn occupied_by(&self, side: Side) -> impl Iterator<Item = Cell> + '_ {
        Cell::all().filter(move |&cell| self.occupant(cell) == side.piece())
    }

    /// The fox's cell, when the fox is on the board.
    pub fn fox_cell(&self) -> Option<Cell> {
        self.occupied_by(Side::Fox).next()
    }

    /// Number of geese currently on the board.
    pub fn goose_count(&self) -> u8 {
        self.occupied_by(Side::Geese).count() as u8
    }

    /// Formats the board as a human-readable grid.
    pub fn display(&self) -> String {
        let mut out = String::from("   0 1 2 3 4 5 6 7\n");
        for (row, rank) in self.cells.iter().enumerate() {
            out.push_str(&format!("{}  ", row));
            for (col, occupant) in rank.iter().enumerate() {
                let symbol = match occupant {
                    Occupant::Empty if (row + col) % 2 == 0 => '.',
                    Occupant::Empty => ' ',
                    Occupant::Goose => 'G',
                    Occupant::Fox => 'F',
                };
                out.push(symbol);
                if col < 7 {
                    out.push(' ');
                }
            }
            out.push('\n');
        }
        out
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

/// Terminal status of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    /// Match is ongoing.
    InProgress,
    /// The fox has captured enough geese.
    FoxWin,
    /// The geese have trapped the fox, or earned the stalemate.
    GeeseWin,
}

impl Status {
    /// True once the match has been decided.
    pub fn is_terminal(self) -> bool {
        self != Status::InProgress
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Status::InProgress => write!(f, "in progress"),
            Status::FoxWin => write!(f, "fox wins"),
            Status::GeeseWin => write!(f, "geese win"),
        }
    }
}

/// Complete match state.
///
/// Owned by the controller and mutated only through the rules engine.
/// Once the status leaves [`Status::InProgress`] the state is frozen:
/// further move application is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchState {
    board: Board,
    to_move: Side,
    geese_remaining: u8,
    status: Status,
}

impl MatchState {
    /// Creates a match at the standard starting position, geese to move.
    pub fn new() -> Self {
        Self {
            board: Board::standard(),
            to_move: Side::Geese,
            geese_remaining: STARTING_GEESE,
            status: Status::InProgress,
        }
    }

    /// Builds an in-progress state from an arbitrary position.
    ///
    /// The geese count is taken from the board. Intended for frontends
    /// and tests that need to set up specific positions; applies no
    /// rule validation.
    pub fn from_parts(board: Board, to_move: Side) -> Self {
        let geese_remaining = board.goose_count();
        Self {
            board,
            to_move,
            geese_remaining,
            status: Status::InProgress,
        }
    }

    /// The board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The side to move.
    pub fn to_move(&self) -> Side {
        self.to_move
    }

    /// Geese still on the board.
    pub fn geese_remaining(&self) -> u8 {
        self.geese_remaining
    }

    /// Terminal status.
    pub fn status(&self) -> Status {
        self.status
    }

    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub(crate) fn take_goose(&mut self) {
        self.geese_remaining -= 1;
    }

    pub(crate) fn set_status(&mut self, status: Status) {
        self.status = status;
    }

    pub(crate) fn flip_side(&mut self) {
        self.to_move = self.to_move.opponent();
    }
}

impl Default for MatchState {
    fn default() -> Self {
        Self::new()
    }
}
