//! Move application and turn advancement.

use super::terminal;
use crate::action::{Move, MoveError};
use crate::cell::Cell;
use crate::contracts::{Contract, MoveContract};
use crate::types::{MatchState, Occupant, Status};
use tracing::instrument;

/// Outcome of a successfully applied move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Applied {
    /// Terminal status after the move.
    pub status: Status,
    /// Cell of the goose removed by the move, if it was a jump.
    pub captured: Option<Cell>,
}

/// Applies `mov` to `state`.
///
/// Validation strictly precedes mutation: a rejected move returns an
/// error and leaves `state` untouched. On success the piece is moved,
/// any jumped goose is removed, the terminal status is evaluated in its
/// fixed order, and the side to move flips while the match is still in
/// progress.
#[instrument(skip(state), err)]
pub fn apply(state: &mut MatchState, mov: Move) -> Result<Applied, MoveError> {
    MoveContract::pre(state, &mov)?;

    #[cfg(debug_assertions)]
    let before = state.clone();

    let piece = state.board().occupant(mov.start());
    state.board_mut().set(mov.end(), piece);
    state.board_mut().set(mov.start(), Occupant::Empty);

    if let Some(cell) = mov.captured() {
        state.board_mut().set(cell, Occupant::Empty);
        state.take_goose();
    }

    let status = terminal::evaluate(state.board(), state.geese_remaining(), state.to_move());
    state.set_status(status);
    if status == Status::InProgress {
        state.flip_side();
    }

    #[cfg(debug_assertions)]
    MoveContract::post(&before, state)?;

    Ok(Applied {
        status,
        captured: mov.captured(),
    })
}
