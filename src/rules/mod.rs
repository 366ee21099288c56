//! Game rules for Fox and Geese.
//!
//! Pure functions for generating legal moves and evaluating terminal
//! positions, plus the engine that applies a validated move to a match
//! state. Rules are separated from board storage so they compose into
//! the contract system.

mod engine;
mod generator;
mod terminal;

pub use engine::{Applied, apply};
pub use generator::{legal_moves, side_can_move, side_moves};
pub use terminal::{FOX_WIN_THRESHOLD, GEESE_STALEMATE_FLOOR, evaluate};
