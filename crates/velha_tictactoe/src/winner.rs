//! Outcome label recorded for a finished match.

use std::str::FromStr;

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};

use crate::{GameStatus, Mark};

/// Who won a recorded match.
///
/// On the wire and in storage this is `"X"`, `"O"` or `"Empate"`.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
)]
pub enum Winner {
    /// X completed a line.
    X,
    /// O completed a line.
    O,
    /// Board filled up without a line.
    #[serde(rename = "Empate")]
    #[strum(serialize = "Empate")]
    Draw,
}

impl Winner {
    /// Maps a terminal status to its label; `None` while in progress.
    pub fn from_status(status: GameStatus) -> Option<Self> {
        match status {
            GameStatus::InProgress => None,
            GameStatus::Won(mark) => Some(mark.into()),
            GameStatus::Draw => Some(Winner::Draw),
        }
    }

    /// The string stored in the database.
    pub fn as_str(&self) -> &'static str {
        match self {
            Winner::X => "X",
            Winner::O => "O",
            Winner::Draw => "Empate",
        }
    }
}

impl From<Mark> for Winner {
    fn from(mark: Mark) -> Self {
        match mark {
            Mark::X => Winner::X,
            Mark::O => Winner::O,
        }
    }
}

/// A string that is not one of `X`, `O`, `Empate`.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Invalid winner: '{}' (expected X, O or Empate)", value)]
pub struct ParseWinnerError {
    /// The rejected input.
    pub value: String,
}

impl FromStr for Winner {
    type Err = ParseWinnerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "X" | "x" => Ok(Winner::X),
            "O" | "o" => Ok(Winner::O),
            "Empate" | "empate" => Ok(Winner::Draw),
            other => Err(ParseWinnerError {
                value: other.to_string(),
            }),
        }
    }
}
