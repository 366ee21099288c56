//! Tests for the match controller's orchestration surface.

use fox_and_geese::{
    Board, Cell, GameMode, MatchController, MatchState, MoveError, Occupant, STARTING_GEESE,
    Side, Status,
};

fn cell(row: u8, col: u8) -> Cell {
    Cell::new(row, col).unwrap()
}

#[test]
fn test_request_move_plays_and_switches_turn() {
    let mut game = MatchController::new(GameMode::PvP);
    let report = game.request_move(cell(2, 0), cell(3, 1)).unwrap();
    assert_eq!(report.status, Status::InProgress);
    assert_eq!(report.capture, None);
    assert_eq!(game.state().to_move(), Side::Fox);
}

#[test]
fn test_rejected_request_does_not_mutate() {
    let mut game = MatchController::new(GameMode::PvP);
    let snapshot = game.state().clone();

    let err = game.request_move(cell(2, 0), cell(5, 5)).unwrap_err();
    assert_eq!(err, MoveError::Illegal(cell(2, 0), cell(5, 5)));
    assert_eq!(game.state(), &snapshot);

    // Picking up the fox during the geese's turn is also rejected.
    let err = game.request_move(cell(7, 7), cell(6, 6)).unwrap_err();
    assert_eq!(err, MoveError::NotYourTurn(Side::Fox));
    assert_eq!(game.state(), &snapshot);
}

#[test]
fn test_legal_moves_for_highlighting() {
    let game = MatchController::new(GameMode::PvP);
    let moves = game.legal_moves(cell(2, 0));
    assert_eq!(moves.len(), 2);
    assert!(game.legal_moves(cell(4, 4)).is_empty());
}

#[test]
fn test_capture_reports_event_and_score() {
    let mut board = Board::empty();
    board.set(cell(5, 3), Occupant::Fox);
    board.set(cell(4, 2), Occupant::Goose);
    for col in [0, 2, 4, 6] {
        board.set(cell(0, col), Occupant::Goose);
    }
    for col in [1, 3, 5] {
        board.set(cell(1, col), Occupant::Goose);
    }
    let state = MatchState::from_parts(board, Side::Fox);
    let mut game = MatchController::from_state(state, GameMode::PvP);
    assert_eq!(game.fox_score(), STARTING_GEESE - 8);

    let report = game.request_move(cell(5, 3), cell(3, 1)).unwrap();
    assert_eq!(report.capture, Some(cell(4, 2)));
    assert!(report.played.is_capture());
    assert_eq!(game.fox_score(), STARTING_GEESE - 7);
    assert_eq!(game.state().geese_remaining(), 7);
}

#[test]
fn test_computer_to_move_follows_mode() {
    let game = MatchController::new(GameMode::PveGeese);
    // Geese (human) move first.
    assert!(!game.computer_to_move());

    let mut game = MatchController::new(GameMode::PveFox);
    assert!(game.computer_to_move());
    game.request_opponent_move(Side::Geese).unwrap().unwrap();
    assert!(!game.computer_to_move());

    let game = MatchController::new(GameMode::PvP);
    assert!(!game.computer_to_move());
}

#[test]
fn test_opponent_move_rejected_once_terminal() {
    let mut board = Board::empty();
    board.set(cell(0, 0), Occupant::Fox);
    board.set(cell(4, 4), Occupant::Goose);
    let mut game =
        MatchController::from_state(MatchState::from_parts(board, Side::Fox), GameMode::PveGeese);

    // Only one goose left: any fox move wins immediately.
    let report = game.request_opponent_move(Side::Fox).unwrap().unwrap();
    assert_eq!(report.status, Status::FoxWin);

    let err = game.request_opponent_move(Side::Geese).unwrap_err();
    assert_eq!(err, MoveError::MatchOver);
}

#[test]
fn test_reset_restores_standard_setup() {
    let mut game = MatchController::new(GameMode::PvP);
    game.request_move(cell(2, 0), cell(3, 1)).unwrap();

    let state = game.reset();
    assert_eq!(state.geese_remaining(), STARTING_GEESE);
    assert_eq!(state.to_move(), Side::Geese);
    assert_eq!(state.status(), Status::InProgress);
    assert_eq!(game.fox_score(), 0);
}

#[test]
fn test_full_playout_reaches_terminal_state() {
    // Computer-vs-computer smoke run: the game must end (or reach the
    // tolerated wedged-geese position below the stalemate floor).
    for _ in 0..5 {
        let mut game = MatchController::new(GameMode::PvP);
        let mut turns = 0;
        let wedged = loop {
            if game.state().status().is_terminal() {
                break false;
            }
            let side = game.state().to_move();
            match game.request_opponent_move(side).unwrap() {
                Some(_) => {}
                None => break true,
            }
            turns += 1;
            assert!(turns < 500, "playout did not terminate");
        };
        if wedged {
            // Only geese can run out of moves without ending the game.
            assert_eq!(game.state().to_move(), Side::Geese);
        } else {
            assert!(game.state().status().is_terminal());
        }
        assert!(game.fox_score() <= STARTING_GEESE);
    }
}

#[test]
fn test_state_snapshot_round_trips_through_json() {
    let mut game = MatchController::new(GameMode::PvP);
    game.request_move(cell(2, 2), cell(3, 3)).unwrap();

    let encoded = serde_json::to_string(game.state()).unwrap();
    let decoded: MatchState = serde_json::from_str(&encoded).unwrap();
    assert_eq!(&decoded, game.state());
}
