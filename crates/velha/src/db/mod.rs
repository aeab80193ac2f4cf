//! Database persistence for recorded match results.

mod error;
mod models;
mod repository;
mod schema; // Diesel generated schema - internal use only

pub use error::{DbError, DbErrorKind};
pub use models::{DEFAULT_MATCH_NAME, GameResult, GameResultChanges, NewGameResult};
pub use repository::{GameResultRepository, MIGRATIONS};
