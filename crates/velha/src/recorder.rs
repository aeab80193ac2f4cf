//! Match recording business logic layer.

use chrono::Utc;
use derive_more::{Display, Error, From};
use tracing::{debug, info, instrument, warn};
use velha_tictactoe::Winner;

use crate::{DEFAULT_MATCH_NAME, DbError, GameResult, GameResultChanges, GameResultRepository, NewGameResult};

/// Failure of a recorder operation.
#[derive(Debug, Clone, Display, Error, From)]
pub enum RecorderError {
    /// No match with this id exists.
    #[display("Game {} not found", _0)]
    #[from(ignore)]
    NotFound(#[error(not(source))] i32),
    /// The store failed.
    #[display("{}", _0)]
    Storage(DbError),
}

/// Service layer for match history.
///
/// Wraps [`GameResultRepository`] with the recording rules: timestamps,
/// default names, and not-found detection.
#[derive(Debug, Clone)]
pub struct MatchRecorder {
    repository: GameResultRepository,
}

impl MatchRecorder {
    /// Creates a recorder backed by the given repository.
    #[instrument(skip(repository))]
    pub fn new(repository: GameResultRepository) -> Self {
        info!("Creating MatchRecorder");
        Self { repository }
    }

    /// Records a finished match stamped with the current time.
    ///
    /// A missing or blank name is stored as [`DEFAULT_MATCH_NAME`].
    #[instrument(skip(self))]
    pub fn create(&self, winner: Winner, name: Option<String>) -> Result<GameResult, RecorderError> {
        let name = match name {
            Some(n) if !n.trim().is_empty() => n,
            _ => {
                debug!("No match name given, using default");
                DEFAULT_MATCH_NAME.to_string()
            }
        };

        let row = NewGameResult::new(winner.as_str().to_string(), Some(name), Utc::now().naive_utc());
        let stored = self.repository.insert(row)?;
        info!(id = stored.id(), "Match recorded");
        Ok(stored)
    }

    /// Returns every recorded match, newest first.
    #[instrument(skip(self))]
    pub fn list(&self) -> Result<Vec<GameResult>, RecorderError> {
        Ok(self.repository.list()?)
    }

    /// Overwrites the winner and/or name of a match.
    ///
    /// `None` leaves a field unchanged; `name: Some(None)` clears the name.
    /// The id and creation time never change.
    #[instrument(skip(self))]
    pub fn update(
        &self,
        id: i32,
        winner: Option<Winner>,
        name: Option<Option<String>>,
    ) -> Result<GameResult, RecorderError> {
        let changes = GameResultChanges::new(winner.map(|w| w.as_str().to_string()), name);
        match self.repository.update(id, changes)? {
            Some(updated) => {
                info!(id, "Match updated");
                Ok(updated)
            }
            None => {
                warn!(id, "Update of unknown match");
                Err(RecorderError::NotFound(id))
            }
        }
    }

    /// Removes a match.
    #[instrument(skip(self))]
    pub fn delete(&self, id: i32) -> Result<(), RecorderError> {
        if self.repository.delete(id)? {
            info!(id, "Match deleted");
            Ok(())
        } else {
            warn!(id, "Delete of unknown match");
            Err(RecorderError::NotFound(id))
        }
    }
}
