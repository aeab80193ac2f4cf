//! Win tally derived from the match history.

use derive_getters::Getters;
use tracing::{instrument, warn};
use velha_tictactoe::Winner;

use crate::GameResult;

/// Wins per mark. Draws count for neither side.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Getters)]
pub struct Scoreboard {
    x_wins: u32,
    o_wins: u32,
}

impl Scoreboard {
    /// Folds a history slice into a tally.
    #[instrument(skip(history), fields(records = history.len()))]
    pub fn tally(history: &[GameResult]) -> Self {
        history.iter().fold(Self::default(), |mut acc, record| {
            match record.parse_winner() {
                Ok(Winner::X) => acc.x_wins += 1,
                Ok(Winner::O) => acc.o_wins += 1,
                Ok(Winner::Draw) => {}
                Err(e) => warn!(id = record.id(), error = %e, "Unknown winner in history"),
            }
            acc
        })
    }
}
