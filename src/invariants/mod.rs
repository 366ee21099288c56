//! First-class invariants for the match state.
//!
//! Invariants are logical properties that must hold throughout a game.
//! They are testable independently and serve as documentation of the
//! engine's guarantees.

pub mod goose_count;
pub mod playable_cells;
pub mod single_fox;

pub use goose_count::GooseCountInvariant;
pub use playable_cells::PlayableCellsInvariant;
pub use single_fox::SingleFoxInvariant;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks whether the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
pub trait InvariantSet<S> {
    /// Checks every invariant in the set, collecting all violations.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let violations: Vec<_> = [
            (I1::holds(state), I1::description()),
            (I2::holds(state), I2::description()),
        ]
        .into_iter()
        .filter(|(holds, _)| !holds)
        .map(|(_, description)| InvariantViolation::new(description))
        .collect();

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let violations: Vec<_> = [
            (I1::holds(state), I1::description()),
            (I2::holds(state), I2::description()),
            (I3::holds(state), I3::description()),
        ]
        .into_iter()
        .filter(|(holds, _)| !holds)
        .map(|(_, description)| InvariantViolation::new(description))
        .collect();

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// All match-state invariants as a composable set.
pub type FoxGeeseInvariants = (
    SingleFoxInvariant,
    PlayableCellsInvariant,
    GooseCountInvariant,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::Cell;
    use crate::types::{MatchState, Occupant};

    #[test]
    fn test_invariant_set_holds_for_new_match() {
        let state = MatchState::new();
        assert!(FoxGeeseInvariants::check_all(&state).is_ok());
    }

    #[test]
    fn test_invariant_set_collects_violations() {
        let mut state = MatchState::new();
        // Remove the fox and park a goose on a light square.
        state.board_mut().set(Cell::fox_corner(), Occupant::Empty);
        state
            .board_mut()
            .set(Cell::new(4, 5).unwrap(), Occupant::Goose);

        let violations = FoxGeeseInvariants::check_all(&state).unwrap_err();
        assert_eq!(violations.len(), 3);
    }

    #[test]
    fn test_two_invariants_as_set() {
        let state = MatchState::new();
        type TwoInvariants = (SingleFoxInvariant, GooseCountInvariant);
        assert!(TwoInvariants::check_all(&state).is_ok());
    }
}
