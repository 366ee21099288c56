//! Fox and Geese rules engine.
//!
//! A two-player abstract strategy game played on the dark squares of an
//! 8x8 board: twelve geese march diagonally forward while a lone fox
//! moves on any diagonal and jump-captures geese. This crate is the
//! rules core - board representation, legal-move generation, move
//! application with captures, win detection, and a simple computer
//! opponent. Rendering and input belong to frontends, which drive the
//! engine through [`MatchController`].
//!
//! # Example
//!
//! ```
//! use fox_and_geese::{Cell, GameMode, MatchController, Status};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut game = MatchController::new(GameMode::PvP);
//!
//! // Geese move first: step a goose diagonally forward.
//! let report = game.request_move(Cell::new(2, 0)?, Cell::new(3, 1)?)?;
//! assert_eq!(report.status, Status::InProgress);
//! assert_eq!(report.capture, None);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod cell;
mod contracts;
mod controller;
mod invariants;
mod opponent;
mod rules;
mod types;

// Coordinates
pub use cell::{BOARD_SIZE, Cell, Diagonal, OutOfBounds};

// Domain types
pub use types::{Board, MatchState, Occupant, STARTING_GEESE, Side, Status};

// Moves
pub use action::{Move, MoveError};

// Rules: generation, terminal evaluation, application
pub use rules::{
    Applied, FOX_WIN_THRESHOLD, GEESE_STALEMATE_FLOOR, apply, evaluate, legal_moves,
    side_can_move, side_moves,
};

// Contracts and invariants
pub use contracts::{Contract, InLegalSet, MatchLive, MoveContract, MoversPiece};
pub use invariants::{
    FoxGeeseInvariants, GooseCountInvariant, Invariant, InvariantSet, InvariantViolation,
    PlayableCellsInvariant, SingleFoxInvariant,
};

// Opponent
pub use opponent::select_move;

// Orchestration
pub use controller::{GameMode, MatchController, TurnReport};
