//! Game rules for tic-tac-toe.
//!
//! Pure functions evaluating a board. Rules are kept apart from board
//! storage so the same checks serve the engine and the client.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::check_winner;

use tracing::instrument;

use crate::{Board, GameStatus};

/// Classifies a board as won, drawn or still in progress.
#[instrument]
pub fn evaluate(board: &Board) -> GameStatus {
    if let Some(mark) = check_winner(board) {
        GameStatus::Won(mark)
    } else if is_full(board) {
        GameStatus::Draw
    } else {
        GameStatus::InProgress
    }
}
