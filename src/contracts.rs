//! Contract-based validation for move application.
//!
//! Contracts formalize Hoare-style reasoning: preconditions must hold
//! before a move is applied, postconditions after. The engine checks
//! preconditions always and postconditions in debug builds.

use crate::action::{Move, MoveError};
use crate::invariants::{FoxGeeseInvariants, InvariantSet};
use crate::rules::legal_moves;
use crate::types::{MatchState, Status};
use tracing::instrument;

/// A contract defines preconditions and postconditions for state
/// transitions.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), MoveError>;
}

/// Precondition: the match has not been decided yet.
pub struct MatchLive;

impl MatchLive {
    /// Rejects moves against a frozen (terminal) state.
    #[instrument(skip(state))]
    pub fn check(state: &MatchState) -> Result<(), MoveError> {
        if state.status() == Status::InProgress {
            Ok(())
        } else {
            Err(MoveError::MatchOver)
        }
    }
}

/// Precondition: the piece being moved belongs to the side to move.
pub struct MoversPiece;

impl MoversPiece {
    /// Rejects moves that pick up the opponent's piece.
    #[instrument(skip(state))]
    pub fn check(mov: &Move, state: &MatchState) -> Result<(), MoveError> {
        match state.board().occupant(mov.start()).side() {
            Some(side) if side != state.to_move() => Err(MoveError::NotYourTurn(side)),
            // An empty start cell falls through to the legal-set check.
            _ => Ok(()),
        }
    }
}

/// Precondition: the move is in the generator's legal set for its start
/// cell.
pub struct InLegalSet;

impl InLegalSet {
    /// Rejects moves the generator would never produce.
    #[instrument(skip(state))]
    pub fn check(mov: &Move, state: &MatchState) -> Result<(), MoveError> {
        if legal_moves(state.board(), mov.start()).contains(mov) {
            Ok(())
        } else {
            Err(MoveError::Illegal(mov.start(), mov.end()))
        }
    }
}

/// Contract for applying a move.
///
/// Preconditions: the match is live, the piece belongs to the mover,
/// and the move is in the legal set. Postcondition: the full invariant
/// set still holds.
pub struct MoveContract;

impl Contract<MatchState, Move> for MoveContract {
    fn pre(state: &MatchState, action: &Move) -> Result<(), MoveError> {
        MatchLive::check(state)?;
        MoversPiece::check(action, state)?;
        InLegalSet::check(action, state)?;
        Ok(())
    }

    fn post(_before: &MatchState, after: &MatchState) -> Result<(), MoveError> {
        FoxGeeseInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            MoveError::InvariantViolation(descriptions)
        })
    }
}
