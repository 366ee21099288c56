//! Playable-cells invariant: pieces only stand on dark squares.

use super::Invariant;
use crate::cell::Cell;
use crate::types::{MatchState, Occupant};

/// Invariant: every occupied cell is playable.
pub struct PlayableCellsInvariant;

impl Invariant<MatchState> for PlayableCellsInvariant {
    fn holds(state: &MatchState) -> bool {
        Cell::all().all(|cell| {
            state.board().occupant(cell) == Occupant::Empty || cell.is_playable()
        })
    }

    fn description() -> &'static str {
        "every occupied cell is playable"
    }
}
