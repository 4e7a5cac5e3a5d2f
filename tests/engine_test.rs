//! Tests for board engine moves, errors, and terminal states.

use tactoe_engine::{BoardEngine, GameState, PlayError, Player, Position, Square};

fn play_all(engine: &mut BoardEngine, indices: &[usize]) {
    for &index in indices {
        engine.play_index(index).expect("Valid move");
    }
}

#[test]
fn test_single_move_switches_to_nought() {
    let mut engine = BoardEngine::new();
    let state = engine.play(Position::Center).expect("Valid move");
    assert_eq!(state, GameState::InProgress(Player::O));
    assert_eq!(engine.current_player(), Some(Player::O));
}

#[test]
fn test_two_moves_switch_back_to_cross() {
    let mut engine = BoardEngine::new();
    play_all(&mut engine, &[4, 0]);
    assert_eq!(engine.state(), GameState::InProgress(Player::X));
}

#[test]
fn test_winning_move() {
    let mut engine = BoardEngine::new();
    play_all(&mut engine, &[0, 1, 3, 2]);

    let state = engine.play_index(6).expect("Valid move");

    assert_eq!(state, GameState::Won(Player::X));
    assert_eq!(engine.current_player(), None);
}

#[test]
fn test_draw_move() {
    // X X O
    // O O X
    // X X O
    let mut engine = BoardEngine::new();
    play_all(&mut engine, &[0, 3, 6, 4, 1, 2, 7, 8]);
    assert_eq!(engine.state(), GameState::InProgress(Player::X));

    let state = engine.play_index(5).expect("Valid move");

    assert_eq!(state, GameState::Draw);
    assert!(!engine.has_moves());
    assert!(engine.available_positions().is_empty());
}

#[test]
fn test_win_on_last_square_is_not_a_draw() {
    // X fills the board and completes the left column on move nine.
    let mut engine = BoardEngine::new();
    play_all(&mut engine, &[0, 1, 3, 4, 2, 5, 7, 8]);
    assert_eq!(engine.play_index(6), Ok(GameState::Won(Player::X)));
}

#[test]
fn test_occupied_square_rejected_without_change() {
    let mut engine = BoardEngine::new();
    engine.play(Position::TopLeft).expect("Valid move");
    let available = engine.available_positions();
    let board = engine.board().clone();

    let result = engine.play(Position::TopLeft);

    assert_eq!(result, Err(PlayError::CellOccupied(Position::TopLeft)));
    assert_eq!(engine.available_positions(), available);
    assert_eq!(engine.board(), &board);
    assert_eq!(engine.state(), GameState::InProgress(Player::O));
}

#[test]
fn test_move_after_win_rejected() {
    let mut engine = BoardEngine::new();
    play_all(&mut engine, &[0, 1, 3, 2, 6]);

    assert_eq!(engine.play_index(7), Err(PlayError::NoActiveGame));
    assert_eq!(engine.board().get(Position::BottomCenter), Square::Empty);
}

#[test]
fn test_move_after_draw_rejected() {
    let mut engine = BoardEngine::new();
    play_all(&mut engine, &[0, 3, 6, 4, 1, 2, 7, 8, 5]);

    for position in Position::ALL {
        assert_eq!(engine.play(position), Err(PlayError::NoActiveGame));
    }
}

#[test]
fn test_failed_move_is_idempotent() {
    let mut engine = BoardEngine::new();
    engine.play(Position::Center).expect("Valid move");
    let board = engine.board().clone();

    for _ in 0..5 {
        assert_eq!(
            engine.play(Position::Center),
            Err(PlayError::CellOccupied(Position::Center))
        );
    }

    assert_eq!(engine.board(), &board);
    assert_eq!(engine.state(), GameState::InProgress(Player::O));
}

#[test]
fn test_game_over_checked_before_occupancy() {
    let mut engine = BoardEngine::new();
    play_all(&mut engine, &[0, 1, 3, 2, 6]);
    assert_eq!(engine.play_index(0), Err(PlayError::NoActiveGame));
}

#[test]
#[should_panic(expected = "no board cell")]
fn test_out_of_range_index_is_a_contract_violation() {
    let mut engine = BoardEngine::new();
    let _ = engine.play_index(42);
}

#[test]
fn test_available_positions_in_index_order() {
    let mut engine = BoardEngine::new();
    play_all(&mut engine, &[4, 0, 8]);
    assert_eq!(
        engine.available_positions(),
        vec![
            Position::TopCenter,
            Position::TopRight,
            Position::MiddleLeft,
            Position::MiddleRight,
            Position::BottomLeft,
            Position::BottomCenter,
        ]
    );
}

#[test]
fn test_board_rendering() {
    let mut engine = BoardEngine::new();
    play_all(&mut engine, &[0, 4]);
    let expected = "\
-------------
| X |   |   |
-------------
|   | O |   |
-------------
|   |   |   |
-------------";
    assert_eq!(engine.board().to_string(), expected);
}
