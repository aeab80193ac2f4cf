//! Pure tic-tac-toe logic for Velha.
//!
//! # Architecture
//!
//! - **Types**: marks, squares and the 3x3 board
//! - **Rules**: stateless win/draw evaluation over a board
//! - **Game**: a board plus turn order, accepting moves until a terminal state
//! - **Winner**: the outcome label stored with each recorded match
//!
//! Nothing in this crate performs I/O; every function returns the same
//! result for the same input.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod game;
mod position;
pub mod rules;
mod types;
mod winner;

pub use game::{Game, GameStatus, PlaceError};
pub use position::Position;
pub use rules::{check_winner, evaluate, is_draw, is_full};
pub use types::{Board, Mark, Square};
pub use winner::{ParseWinnerError, Winner};
