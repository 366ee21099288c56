//! Terminal-status evaluation.

use super::generator::{legal_moves, side_can_move};
use crate::types::{Board, Side, Status};
use tracing::instrument;

/// The fox wins once the flock is down to this many geese.
pub const FOX_WIN_THRESHOLD: u8 = 5;

/// The geese only earn a stalemate win while at least this many remain.
///
/// The two thresholds deliberately differ by one goose; the asymmetry is
/// part of this variant's rules.
pub const GEESE_STALEMATE_FLOOR: u8 = 7;

/// Evaluates the terminal status of a position.
///
/// `mover` is the side that just moved (the side flip happens after
/// evaluation). Rules are checked in fixed order and the first match
/// wins:
///
/// 1. Fox wins when `geese_remaining` is at or below
///    [`FOX_WIN_THRESHOLD`].
/// 2. Geese win when the fox has no legal move (encirclement),
///    regardless of whose turn it is.
/// 3. Geese win when the geese just moved, no goose can move, and at
///    least [`GEESE_STALEMATE_FLOOR`] geese remain.
/// 4. Otherwise the match continues.
#[instrument(skip(board))]
pub fn evaluate(board: &Board, geese_remaining: u8, mover: Side) -> Status {
    if geese_remaining <= FOX_WIN_THRESHOLD {
        return Status::FoxWin;
    }

    if let Some(fox) = board.fox_cell()
        && legal_moves(board, fox).is_empty()
    {
        return Status::GeeseWin;
    }

    if mover == Side::Geese
        && geese_remaining >= GEESE_STALEMATE_FLOOR
        && !side_can_move(board, Side::Geese)
    {
        return Status::GeeseWin;
    }

    Status::InProgress
}
