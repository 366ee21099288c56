//! Single-fox invariant: exactly one fox is on the board at all times.

use super::Invariant;
use crate::types::{MatchState, Side};

/// Invariant: exactly one fox occupies the board.
///
/// The fox is never captured in this game, so the count can neither
/// drop to zero nor grow.
pub struct SingleFoxInvariant;

impl Invariant<MatchState> for SingleFoxInvariant {
    fn holds(state: &MatchState) -> bool {
        state.board().occupied_by(Side::Fox).count() == 1
    }

    fn description() -> &'static str {
        "exactly one fox occupies the board"
    }
}
