//! Diesel repository for recorded matches.

use diesel::prelude::*;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use tracing::{debug, info, instrument};

use crate::db::{DbError, DbErrorKind, GameResult, GameResultChanges, NewGameResult, schema};

/// Schema migrations compiled into the binary.
pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Repository over the `game_results` table.
///
/// Opens a fresh SQLite connection per call, so it is cheap to clone and
/// safe to move onto blocking threads.
#[derive(Debug, Clone)]
pub struct GameResultRepository {
    db_path: String,
}

impl GameResultRepository {
    /// Creates a repository for the database at the given path.
    ///
    /// Every call opens its own connection, so `":memory:"` would give each
    /// call an empty database; tests use a temporary file instead.
    #[instrument(skip_all)]
    pub fn new(db_path: impl Into<String>) -> Self {
        let db_path = db_path.into();
        info!(path = %db_path, "Creating GameResultRepository");
        Self { db_path }
    }

    /// Establishes a database connection.
    #[instrument(skip(self))]
    fn connection(&self) -> Result<SqliteConnection, DbError> {
        debug!(path = %self.db_path, "Establishing connection");
        SqliteConnection::establish(&self.db_path).map_err(|e| {
            DbError::new(
                DbErrorKind::Connection,
                format!("Failed to connect to '{}': {}", self.db_path, e),
            )
        })
    }

    /// Applies any migrations not yet run against the database.
    ///
    /// # Errors
    ///
    /// Returns [`DbError`] if the database cannot be opened or a migration fails.
    #[instrument(skip(self))]
    pub fn run_migrations(&self) -> Result<(), DbError> {
        let mut conn = self.connection()?;
        let applied = conn
            .run_pending_migrations(MIGRATIONS)
            .map_err(|e| DbError::new(DbErrorKind::Migration, e.to_string()))?;
        info!(count = applied.len(), "Migrations applied");
        Ok(())
    }

    /// Inserts a match and returns the stored row.
    ///
    /// # Errors
    ///
    /// Returns [`DbError`] if a database error occurs.
    #[instrument(skip(self, row), fields(winner = %row.winner()))]
    pub fn insert(&self, row: NewGameResult) -> Result<GameResult, DbError> {
        debug!("Inserting game result");
        let mut conn = self.connection()?;

        let stored = diesel::insert_into(schema::game_results::table)
            .values(&row)
            .returning(GameResult::as_returning())
            .get_result(&mut conn)?;

        info!(id = stored.id(), winner = %stored.winner(), "Game result inserted");
        Ok(stored)
    }

    /// Lists all matches, newest first.
    ///
    /// Rows with identical timestamps fall back to descending id so the
    /// order is stable between calls.
    ///
    /// # Errors
    ///
    /// Returns [`DbError`] if a database error occurs.
    #[instrument(skip(self))]
    pub fn list(&self) -> Result<Vec<GameResult>, DbError> {
        debug!("Listing game results");
        let mut conn = self.connection()?;

        let rows = schema::game_results::table
            .order((
                schema::game_results::created_at.desc(),
                schema::game_results::id.desc(),
            ))
            .select(GameResult::as_select())
            .load(&mut conn)?;

        info!(count = rows.len(), "Game results loaded");
        Ok(rows)
    }

    /// Gets a match by id. Returns `None` if not found.
    ///
    /// # Errors
    ///
    /// Returns [`DbError`] if a database error occurs.
    #[instrument(skip(self))]
    pub fn find(&self, id: i32) -> Result<Option<GameResult>, DbError> {
        let mut conn = self.connection()?;
        let row = schema::game_results::table
            .find(id)
            .select(GameResult::as_select())
            .first(&mut conn)
            .optional()?;
        debug!(found = row.is_some(), "Lookup finished");
        Ok(row)
    }

    /// Applies `changes` to the match with `id`. Returns `None` if no such row.
    ///
    /// # Errors
    ///
    /// Returns [`DbError`] if a database error occurs.
    #[instrument(skip(self))]
    pub fn update(&self, id: i32, changes: GameResultChanges) -> Result<Option<GameResult>, DbError> {
        if changes.is_empty() {
            debug!("Empty change set, returning current row");
            return self.find(id);
        }

        let mut conn = self.connection()?;
        let updated = diesel::update(schema::game_results::table.find(id))
            .set(&changes)
            .returning(GameResult::as_returning())
            .get_result(&mut conn)
            .optional()?;

        match &updated {
            Some(row) => info!(id, winner = %row.winner(), "Game result updated"),
            None => debug!(id, "No game result to update"),
        }
        Ok(updated)
    }

    /// Deletes the match with `id`. Returns `false` if no such row.
    ///
    /// # Errors
    ///
    /// Returns [`DbError`] if a database error occurs.
    #[instrument(skip(self))]
    pub fn delete(&self, id: i32) -> Result<bool, DbError> {
        let mut conn = self.connection()?;
        let removed = diesel::delete(schema::game_results::table.find(id)).execute(&mut conn)?;
        info!(id, removed, "Delete executed");
        Ok(removed > 0)
    }
}
