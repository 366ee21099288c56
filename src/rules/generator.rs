//! Legal-move generation.

use crate::action::Move;
use crate::cell::{Cell, Diagonal};
use crate::types::{Board, Occupant, Side};
use strum::IntoEnumIterator;
use tracing::instrument;

/// All legal moves for the piece at `cell`.
///
/// Geese step one cell diagonally forward (toward higher rows) onto
/// empty playable cells and never capture. The fox steps one cell along
/// any diagonal, or jumps an adjacent goose when the cell directly
/// beyond it is empty and playable.
///
/// An empty cell yields no moves; that is not an error. Output order
/// carries no policy: capture preference belongs to the opponent, not
/// the generator.
#[instrument(skip(board))]
pub fn legal_moves(board: &Board, cell: Cell) -> Vec<Move> {
    match board.occupant(cell) {
        Occupant::Empty => Vec::new(),
        Occupant::Goose => goose_moves(board, cell),
        Occupant::Fox => fox_moves(board, cell),
    }
}

fn goose_moves(board: &Board, cell: Cell) -> Vec<Move> {
    let mut moves = Vec::new();
    for dc in [-1, 1] {
        if let Some(target) = cell.offset(1, dc)
            && target.is_playable()
            && board.occupant(target) == Occupant::Empty
        {
            moves.push(Move::step(cell, target));
        }
    }
    moves
}

fn fox_moves(board: &Board, cell: Cell) -> Vec<Move> {
    let mut moves = Vec::new();
    for diagonal in Diagonal::iter() {
        let (dr, dc) = diagonal.delta();
        let Some(target) = cell.offset(dr, dc) else {
            continue;
        };
        if !target.is_playable() {
            continue;
        }
        match board.occupant(target) {
            Occupant::Empty => moves.push(Move::step(cell, target)),
            Occupant::Goose => {
                if let Some(landing) = cell.offset(2 * dr, 2 * dc)
                    && landing.is_playable()
                    && board.occupant(landing) == Occupant::Empty
                {
                    moves.push(Move::capture(cell, landing, target));
                }
            }
            Occupant::Fox => {}
        }
    }
    moves
}

/// All legal moves for every piece of `side`, enumerating cells in
/// row-major order.
#[instrument(skip(board))]
pub fn side_moves(board: &Board, side: Side) -> Vec<Move> {
    board
        .occupied_by(side)
        .flat_map(|cell| legal_moves(board, cell))
        .collect()
}

/// True when `side` has at least one legal move anywhere on the board.
pub fn side_can_move(board: &Board, side: Side) -> bool {
    board
        .occupied_by(side)
        .any(|cell| !legal_moves(board, cell).is_empty())
}
