//! Goose-count invariant: the counter matches the board.

use super::Invariant;
use crate::types::{MatchState, STARTING_GEESE};

/// Invariant: the geese-remaining counter equals the number of geese on
/// the board and never exceeds the starting flock.
///
/// The count is monotonically non-increasing over a game, which this
/// check enforces indirectly: geese are only ever removed, never added.
pub struct GooseCountInvariant;

impl Invariant<MatchState> for GooseCountInvariant {
    fn holds(state: &MatchState) -> bool {
        state.geese_remaining() == state.board().goose_count()
            && state.geese_remaining() <= STARTING_GEESE
    }

    fn description() -> &'static str {
        "geese-remaining counter matches the board"
    }
}
