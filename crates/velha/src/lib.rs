//! Velha - tic-tac-toe with a persisted match history
//!
//! # Architecture
//!
//! - **Recorder**: SQLite-backed store of finished matches ([`MatchRecorder`])
//! - **API**: REST routes over the recorder ([`api::router`])
//! - **Client**: HTTP access to the API ([`RestClient`])
//! - **UI**: terminal game that records its results ([`ui::run_tui`])
//!
//! The board rules live in the `velha_tictactoe` crate and are re-exported here.
//!
//! # Example
//!
//! ```no_run
//! use velha::{GameResultRepository, MatchRecorder, api};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let repository = GameResultRepository::new("velha.db");
//! repository.run_migrations()?;
//!
//! let app = api::router(MatchRecorder::new(repository));
//! let listener = tokio::net::TcpListener::bind(("127.0.0.1", 5000)).await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod api;
pub mod cli;
pub mod client;
pub mod config;
mod db;
mod recorder;
mod scoreboard;
pub mod ui;

// Crate-level exports - Persistence
pub use db::{
    DEFAULT_MATCH_NAME, DbError, DbErrorKind, GameResult, GameResultChanges, GameResultRepository,
    MIGRATIONS, NewGameResult,
};

// Crate-level exports - Recording service
pub use recorder::{MatchRecorder, RecorderError};

// Crate-level exports - Derived views
pub use scoreboard::Scoreboard;

// Crate-level exports - Configuration and client
pub use client::{MatchStore, RestClient};
pub use config::{AppConfig, ConfigError};

// Crate-level exports - Game types
pub use velha_tictactoe::{Game, GameStatus, Mark, PlaceError, Position, Winner};
