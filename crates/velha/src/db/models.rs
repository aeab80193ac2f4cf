//! Database models for recorded matches.

use chrono::NaiveDateTime;
use derive_getters::Getters;
use derive_new::new;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::instrument;
use velha_tictactoe::{ParseWinnerError, Winner};

use crate::db::schema;

/// Name stored when a match is recorded without one.
pub const DEFAULT_MATCH_NAME: &str = "Partida Anônima";

/// One recorded match, as stored and as served over HTTP.
///
/// Serializes as `{"id", "winner", "name", "createdAt"}` with `createdAt`
/// in RFC 3339 UTC.
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Queryable,
    Identifiable,
    Selectable,
    Getters,
    Serialize,
    Deserialize,
    new,
)]
#[diesel(table_name = schema::game_results)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct GameResult {
    id: i32,
    winner: String,
    name: Option<String>,
    #[serde(with = "utc_timestamp")]
    created_at: NaiveDateTime,
}

impl GameResult {
    /// Parses the stored winner string.
    ///
    /// # Errors
    ///
    /// Returns [`ParseWinnerError`] for rows written with an unknown label.
    #[instrument(skip(self), fields(winner = %self.winner))]
    pub fn parse_winner(&self) -> Result<Winner, ParseWinnerError> {
        self.winner.parse()
    }

    /// Label shown in history lists; unnamed matches read "Partida".
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("Partida")
    }
}

/// Insertable row for a new match.
#[derive(Debug, Clone, Insertable, new, Getters)]
#[diesel(table_name = schema::game_results)]
pub struct NewGameResult {
    winner: String,
    name: Option<String>,
    created_at: NaiveDateTime,
}

/// Partial update of a match. `None` fields are left untouched;
/// `name: Some(None)` clears the name.
#[derive(Debug, Clone, Default, PartialEq, Eq, AsChangeset, new)]
#[diesel(table_name = schema::game_results)]
pub struct GameResultChanges {
    winner: Option<String>,
    name: Option<Option<String>>,
}

impl GameResultChanges {
    /// True when the update would not touch any column.
    pub fn is_empty(&self) -> bool {
        self.winner.is_none() && self.name.is_none()
    }
}

/// RFC 3339 (UTC, microseconds) encoding for naive UTC timestamps.
mod utc_timestamp {
    use chrono::{DateTime, NaiveDateTime, SecondsFormat};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(ts: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error> {
        let text = ts.and_utc().to_rfc3339_opts(SecondsFormat::Micros, true);
        serializer.serialize_str(&text)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDateTime, D::Error> {
        let text = String::deserialize(deserializer)?;
        DateTime::parse_from_rfc3339(&text)
            .map(|dt| dt.naive_utc())
            .map_err(serde::de::Error::custom)
    }
}
