//! First-class move values and move rejection errors.
//!
//! Moves are domain events, not side effects: they are produced by the
//! generator, validated by contracts, and only then applied.

use crate::cell::Cell;
use crate::types::Side;
use serde::{Deserialize, Serialize};

/// A single move from one cell to another.
///
/// Jump captures record the cell of the goose being taken, which is
/// always the midpoint between start and end. Moves are immutable value
/// objects, produced fresh each time legal moves are requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    start: Cell,
    end: Cell,
    captured: Option<Cell>,
}

impl Move {
    /// Creates a plain (non-capturing) step.
    pub fn step(start: Cell, end: Cell) -> Self {
        Self {
            start,
            end,
            captured: None,
        }
    }

    /// Creates a jump capture removing the goose at `captured`.
    pub fn capture(start: Cell, end: Cell, captured: Cell) -> Self {
        Self {
            start,
            end,
            captured: Some(captured),
        }
    }

    /// Start cell.
    pub fn start(&self) -> Cell {
        self.start
    }

    /// Destination cell.
    pub fn end(&self) -> Cell {
        self.end
    }

    /// Cell of the goose removed by this move, if it is a jump.
    pub fn captured(&self) -> Option<Cell> {
        self.captured
    }

    /// True when this move is a jump capture.
    pub fn is_capture(&self) -> bool {
        self.captured.is_some()
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.captured {
            Some(cell) => write!(f, "{} x {} over {}", self.start, self.end, cell),
            None => write!(f, "{} -> {}", self.start, self.end),
        }
    }
}

/// Error that can occur when validating or applying a move.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The match has already been decided; the state is frozen.
    #[display("match is already over")]
    MatchOver,

    /// The piece at the start cell belongs to the other side.
    #[display("it is not {_0}'s turn")]
    NotYourTurn(Side),

    /// The requested move is not in the legal set for the piece at start.
    #[display("illegal move from {_0} to {_1}")]
    Illegal(Cell, Cell),

    /// An invariant was violated after applying a move.
    #[display("invariant violation: {_0}")]
    InvariantViolation(String),
}

impl std::error::Error for MoveError {}
