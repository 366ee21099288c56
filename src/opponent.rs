//! Reference computer opponent.
//!
//! Intentionally myopic: take the first available jump, otherwise move
//! at random. Not a search engine.

use crate::action::Move;
use crate::rules::side_moves;
use crate::types::{Board, Side};
use rand::Rng;
use rand::seq::SliceRandom;
use tracing::instrument;

/// Selects a move for `side`.
///
/// Gathers the legal moves of every piece of `side` in row-major cell
/// order. The first capture found in that order is returned
/// deterministically; otherwise the choice is uniform over all legal
/// moves. Returns `None` when the side cannot move anywhere, which a
/// well-formed game should already have turned into a terminal status.
#[instrument(skip(board, rng))]
pub fn select_move<R: Rng>(board: &Board, side: Side, rng: &mut R) -> Option<Move> {
    let moves = side_moves(board, side);
    if let Some(jump) = moves.iter().copied().find(Move::is_capture) {
        return Some(jump);
    }
    moves.choose(rng).copied()
}
