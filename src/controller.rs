//! Thin orchestration between a frontend and the rules engine.
//!
//! The controller owns the match state and drives the turn cycle:
//! requested move -> legal-move lookup -> engine apply -> terminal
//! check -> turn switch. It holds no rule logic of its own.

use crate::action::{Move, MoveError};
use crate::cell::Cell;
use crate::opponent;
use crate::rules::{self, Applied};
use crate::types::{MatchState, Side, Status, STARTING_GEESE};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument, warn};

/// Who controls each side of the match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameMode {
    /// Two humans at one board.
    PvP,
    /// Human plays the geese, the computer plays the fox.
    PveGeese,
    /// Human plays the fox, the computer plays the geese.
    PveFox,
}

impl GameMode {
    /// The computer-controlled side, if any.
    pub fn computer_side(self) -> Option<Side> {
        match self {
            GameMode::PvP => None,
            GameMode::PveGeese => Some(Side::Fox),
            GameMode::PveFox => Some(Side::Geese),
        }
    }
}

/// Report returned to the frontend after a successfully played move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnReport {
    /// The move that was played.
    pub played: Move,
    /// Goose removed by the move, if any. This is the only state a
    /// frontend needs to animate a capture.
    pub capture: Option<Cell>,
    /// Match status after the move.
    pub status: Status,
}

/// Owns one match and mediates every interaction with it.
///
/// Frontends must never touch board cells directly; they highlight
/// with [`MatchController::legal_moves`], play through
/// [`MatchController::request_move`] and
/// [`MatchController::request_opponent_move`], and restart with
/// [`MatchController::reset`].
#[derive(Debug, Clone)]
pub struct MatchController {
    state: MatchState,
    mode: GameMode,
    fox_score: u8,
}

impl MatchController {
    /// Creates a controller with a fresh match in the given mode.
    #[instrument]
    pub fn new(mode: GameMode) -> Self {
        info!(?mode, "starting new match");
        Self {
            state: MatchState::new(),
            mode,
            fox_score: 0,
        }
    }

    /// Wraps an existing state, e.g. a position set up by a frontend.
    pub fn from_state(state: MatchState, mode: GameMode) -> Self {
        let fox_score = STARTING_GEESE.saturating_sub(state.geese_remaining());
        Self {
            state,
            mode,
            fox_score,
        }
    }

    /// The current match state.
    pub fn state(&self) -> &MatchState {
        &self.state
    }

    /// The configured game mode.
    pub fn mode(&self) -> GameMode {
        self.mode
    }

    /// Geese the fox has captured this game.
    pub fn fox_score(&self) -> u8 {
        self.fox_score
    }

    /// Legal moves for the piece at `cell`, for highlighting reachable
    /// cells.
    pub fn legal_moves(&self, cell: Cell) -> Vec<Move> {
        rules::legal_moves(self.state.board(), cell)
    }

    /// True when the match is live and the side to move is computer
    /// controlled.
    pub fn computer_to_move(&self) -> bool {
        self.state.status() == Status::InProgress
            && self.mode.computer_side() == Some(self.state.to_move())
    }

    /// Plays a move from `start` to `end` on behalf of the side to
    /// move.
    ///
    /// The destination is matched against the generator's legal set; a
    /// rejected request returns an error and leaves the state
    /// untouched, so the caller can simply re-prompt.
    #[instrument(skip(self), err)]
    pub fn request_move(&mut self, start: Cell, end: Cell) -> Result<TurnReport, MoveError> {
        if self.state.status().is_terminal() {
            return Err(MoveError::MatchOver);
        }
        let mov = rules::legal_moves(self.state.board(), start)
            .into_iter()
            .find(|m| m.end() == end)
            .ok_or(MoveError::Illegal(start, end))?;

        let applied = rules::apply(&mut self.state, mov)?;
        Ok(self.report(mov, applied))
    }

    /// Selects and plays a computer move for `side`.
    ///
    /// Returns `Ok(None)` when the side has no legal move anywhere;
    /// the terminal checks should already have caught that, so it is
    /// tolerated rather than treated as a failure.
    #[instrument(skip(self), err)]
    pub fn request_opponent_move(
        &mut self,
        side: Side,
    ) -> Result<Option<TurnReport>, MoveError> {
        if self.state.status().is_terminal() {
            return Err(MoveError::MatchOver);
        }
        let mut rng = rand::thread_rng();
        let Some(mov) = opponent::select_move(self.state.board(), side, &mut rng) else {
            warn!(%side, "no legal move available");
            return Ok(None);
        };

        let applied = rules::apply(&mut self.state, mov)?;
        Ok(Some(self.report(mov, applied)))
    }

    /// Restarts the match from the standard setup.
    #[instrument(skip(self))]
    pub fn reset(&mut self) -> &MatchState {
        info!("resetting match");
        self.state = MatchState::new();
        self.fox_score = 0;
        &self.state
    }

    fn report(&mut self, played: Move, applied: Applied) -> TurnReport {
        if applied.captured.is_some() {
            self.fox_score += 1;
        }
        info!(
            %played,
            capture = ?applied.captured,
            status = %applied.status,
            geese_remaining = self.state.geese_remaining(),
            "move played"
        );
        TurnReport {
            played,
            capture: applied.captured,
            status: applied.status,
        }
    }
}
