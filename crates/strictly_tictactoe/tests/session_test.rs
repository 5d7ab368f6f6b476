//! Tests for the session: move application, turn control, undo and score.

use strictly_tictactoe::{
    Board, Cell, Difficulty, GameMode, GameOutcome, Move, MoveError, Session, Side, UndoError,
    WinLine,
};

fn two_player(moves: &[usize]) -> Session {
    Session::replay(GameMode::TwoPlayer, moves.iter().copied()).expect("valid replay")
}

#[test]
fn test_completing_top_row_wins() {
    // X X . / O O . / . . .
    let mut session = two_player(&[0, 3, 1, 4]);
    assert_eq!(session.current_side(), Side::X);

    let result = session.apply_move(2).expect("legal move");
    assert_eq!(
        result.outcome(),
        &GameOutcome::Win(Side::X, WinLine::new([0, 1, 2]))
    );
    assert!(!session.is_active());
    assert_eq!(session.score().wins(Side::X), 1);
    assert_eq!(session.score().wins(Side::O), 0);
}

#[test]
fn test_full_board_without_line_is_draw() {
    let session = two_player(&[0, 1, 2, 4, 3, 5, 7, 6, 8]);
    let expected: Board = "XOXXOOOXX".parse().unwrap();

    assert_eq!(session.board(), &expected);
    assert_eq!(session.outcome(), GameOutcome::Draw);
    assert!(!session.is_active());
    assert_eq!(session.score().wins(Side::X), 0);
    assert_eq!(session.score().wins(Side::O), 0);
}

#[test]
fn test_occupied_cell_leaves_state_unchanged() {
    let mut session = two_player(&[4, 0]);
    let board = *session.board();
    let history = session.history().clone();

    assert_eq!(session.apply_move(4), Err(MoveError::CellOccupied(4)));
    assert_eq!(session.board(), &board);
    assert_eq!(session.history(), &history);
    assert_eq!(session.current_side(), Side::X);
}

#[test]
fn test_moves_rejected_after_game_ends() {
    let mut session = two_player(&[0, 3, 1, 4, 2]);
    let board = *session.board();

    assert_eq!(session.apply_move(8), Err(MoveError::GameNotActive));
    assert_eq!(session.board(), &board);
    assert_eq!(session.move_count(), 5);
}

#[test]
fn test_out_of_range_index_rejected() {
    let mut session = two_player(&[4]);
    assert_eq!(session.apply_move(9), Err(MoveError::IndexOutOfRange(9)));
    assert_eq!(session.move_count(), 1);
}

#[test]
fn test_undo_restores_previous_board_and_side() {
    let mut session = two_player(&[4, 0]);
    let before = *session.board();

    session.apply_move(8).unwrap();
    assert_eq!(session.current_side(), Side::O);

    session.undo().expect("undo");
    assert_eq!(session.board(), &before);
    assert_eq!(session.current_side(), Side::X);
    assert_eq!(session.move_count(), 2);
}

#[test]
fn test_undo_needs_two_snapshots() {
    let mut session = Session::with_seed(GameMode::TwoPlayer, 0);
    assert_eq!(session.undo(), Err(UndoError::NothingToUndo));

    session.apply_move(4).unwrap();
    assert_eq!(session.undo(), Err(UndoError::NothingToUndo));
    assert_eq!(session.board().cell_at(4), Ok(Cell::Occupied(Side::X)));
    assert_eq!(session.current_side(), Side::O);
}

#[test]
fn test_undo_cancels_win_but_keeps_score() {
    let mut session = two_player(&[0, 3, 1, 4, 2]);
    assert_eq!(session.score().wins(Side::X), 1);

    session.undo().unwrap();
    assert!(session.is_active());
    assert_eq!(session.outcome(), GameOutcome::InProgress);
    assert_eq!(session.current_side(), Side::X);
    assert_eq!(session.score().wins(Side::X), 1);

    // Winning again counts again.
    session.apply_move(2).unwrap();
    assert_eq!(session.score().wins(Side::X), 2);
}

#[test]
fn test_restart_keeps_score() {
    let mut session = two_player(&[0, 3, 1, 4, 2]);
    session.restart();

    assert_eq!(session.board(), &Board::new());
    assert_eq!(session.current_side(), Side::X);
    assert!(session.is_active());
    assert!(session.history().is_empty());
    assert_eq!(session.score().wins(Side::X), 1);
}

#[test]
fn test_reset_switches_mode() {
    let mut session = two_player(&[4]);
    session.reset(GameMode::VsAi(Difficulty::Medium));

    assert_eq!(session.mode(), GameMode::VsAi(Difficulty::Medium));
    assert_eq!(session.move_count(), 0);
    assert_eq!(session.current_side(), Side::X);
}

#[test]
fn test_o_wins_are_tallied() {
    // O completes the middle column.
    let session = two_player(&[0, 1, 2, 4, 8, 7]);
    assert_eq!(
        session.outcome(),
        GameOutcome::Win(Side::O, WinLine::new([1, 4, 7]))
    );
    assert_eq!(session.score().wins(Side::O), 1);
}

#[test]
fn test_vs_ai_game_alternates_with_computer() {
    let mut session = Session::with_seed(GameMode::VsAi(Difficulty::Easy), 11);

    while session.is_active() {
        assert_eq!(session.current_side(), Side::X);
        let index = session.board().empty_cells().next().expect("empty cell");
        session.apply_move(index).unwrap();
        if let Some(reply) = session.apply_ai_move().unwrap() {
            assert_eq!(reply.applied().side, Side::O);
        }
    }

    assert!(session.outcome().is_terminal());
    let moves = session.history().moves();
    for (i, mv) in moves.iter().enumerate() {
        let expected = if i % 2 == 0 { Side::X } else { Side::O };
        assert_eq!(mv.side, expected);
    }
}

#[test]
fn test_request_ai_move_does_not_apply() {
    let mut session = Session::with_seed(GameMode::VsAi(Difficulty::Hard), 0);
    session.apply_move(4).unwrap();

    let pick = session.request_ai_move().expect("a move");
    assert_eq!(pick, 0);
    assert_eq!(session.move_count(), 1);
    assert!(session.board().is_empty(pick));
}

#[test]
fn test_no_ai_move_once_game_over() {
    let mut session = Session::with_seed(GameMode::VsAi(Difficulty::Easy), 0);
    for index in [0, 3, 1, 4] {
        session.apply_move(index).unwrap();
    }
    session.apply_move(2).unwrap();

    assert!(!session.is_active());
    assert_eq!(session.request_ai_move(), None);
    assert_eq!(session.apply_ai_move(), Ok(None));
}

#[test]
fn test_sessions_are_independent() {
    let mut a = Session::with_seed(GameMode::TwoPlayer, 0);
    let b = Session::with_seed(GameMode::TwoPlayer, 0);

    a.apply_move(4).unwrap();
    assert_eq!(b.board(), &Board::new());
    assert_eq!(b.move_count(), 0);
}

#[test]
fn test_replay_stops_at_first_error() {
    let result = Session::replay(GameMode::TwoPlayer, [4, 4]);
    assert_eq!(result.err(), Some(MoveError::CellOccupied(4)));
}

#[test]
fn test_history_lists_moves() {
    let session = two_player(&[4, 0, 8]);
    assert_eq!(
        session.history().moves(),
        vec![
            Move::new(4, Side::X),
            Move::new(0, Side::O),
            Move::new(8, Side::X)
        ]
    );
}
