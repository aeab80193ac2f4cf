//! Tests for board evaluation and the move engine.

use velha_tictactoe::{
    Board, Game, GameStatus, Mark, PlaceError, Position, Winner, check_winner, evaluate, is_draw,
};

const X: Option<Mark> = Some(Mark::X);
const O: Option<Mark> = Some(Mark::O);
const E: Option<Mark> = None;

#[test]
fn test_top_row_of_x_wins() {
    let board = Board::from_cells([X, X, X, E, E, E, E, E, E]);
    assert_eq!(check_winner(&board), Some(Mark::X));
    assert_eq!(evaluate(&board), GameStatus::Won(Mark::X));
}

#[test]
fn test_full_board_without_line_is_draw() {
    let board = Board::from_cells([X, O, X, X, O, O, O, X, X]);
    assert_eq!(check_winner(&board), None);
    assert!(is_draw(&board));
    assert_eq!(evaluate(&board), GameStatus::Draw);
}

#[test]
fn test_partial_board_in_progress() {
    let board = Board::from_cells([X, O, E, E, X, E, E, E, O]);
    assert_eq!(evaluate(&board), GameStatus::InProgress);
}

#[test]
fn test_evaluation_is_repeatable() {
    let board = Board::from_cells([O, X, E, X, O, E, E, E, O]);
    let first = evaluate(&board);
    for _ in 0..10 {
        assert_eq!(evaluate(&board), first);
    }
    assert_eq!(first, GameStatus::Won(Mark::O));
}

#[test]
fn test_game_alternates_marks() {
    let mut game = Game::new();
    assert_eq!(game.to_move(), Mark::X);
    game.place(Position::Center).expect("first move");
    assert_eq!(game.to_move(), Mark::O);
    game.place(Position::TopLeft).expect("second move");
    assert_eq!(game.to_move(), Mark::X);
    assert_eq!(game.history(), &[Position::Center, Position::TopLeft]);
}

#[test]
fn test_game_rejects_occupied_square() {
    let mut game = Game::new();
    game.place(Position::Center).expect("first move");
    let err = game.place(Position::Center).unwrap_err();
    assert_eq!(err, PlaceError::SquareOccupied(Position::Center));
    assert_eq!(game.history().len(), 1);
}

#[test]
fn test_game_rejects_moves_after_win() {
    let mut game = Game::new();
    // X: 0, 1, 2   O: 3, 4
    for idx in [0, 3, 1, 4, 2] {
        game.place(Position::from_index(idx).unwrap()).expect("legal move");
    }
    assert_eq!(game.status(), GameStatus::Won(Mark::X));
    assert_eq!(
        game.place(Position::BottomRight),
        Err(PlaceError::GameOver)
    );
}

#[test]
fn test_reset_clears_board() {
    let mut game = Game::new();
    game.place(Position::Center).expect("move");
    game.reset();
    assert_eq!(game, Game::new());
    assert_eq!(Position::valid_moves(game.board()).len(), 9);
}

#[test]
fn test_winner_labels() {
    assert_eq!(Winner::from_status(GameStatus::Won(Mark::O)), Some(Winner::O));
    assert_eq!(Winner::from_status(GameStatus::Draw), Some(Winner::Draw));
    assert_eq!(Winner::from_status(GameStatus::InProgress), None);
    assert_eq!(Winner::Draw.to_string(), "Empate");
    assert_eq!("Empate".parse::<Winner>(), Ok(Winner::Draw));
    assert!("Z".parse::<Winner>().is_err());
    assert_eq!(
        serde_json::to_string(&Winner::Draw).unwrap(),
        "\"Empate\""
    );
}

#[test]
fn test_position_keys() {
    assert_eq!(Position::from_key('1'), Some(Position::TopLeft));
    assert_eq!(Position::from_key('9'), Some(Position::BottomRight));
    assert_eq!(Position::from_key('0'), None);
    assert_eq!(Position::from_key('a'), None);
}
