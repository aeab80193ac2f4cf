//! REST API over the match history.
//!
//! | Method | Path          | Result                  |
//! |--------|---------------|-------------------------|
//! | GET    | `/`           | liveness text           |
//! | POST   | `/games`      | 201 + created record    |
//! | GET    | `/games`      | records, newest first   |
//! | PUT    | `/games/{id}` | updated record          |
//! | DELETE | `/games/{id}` | `{"message"}`           |

mod dto;
mod error;
mod handlers;

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, put},
};
use tower_http::cors::{Any, CorsLayer};
use tracing::{info, instrument};

use crate::MatchRecorder;

pub use dto::{CreateGameRequest, ErrorResponse, MessageResponse, UpdateGameRequest};
pub use error::{ApiError, Operation};

/// Shared handler state.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Recorder behind every route.
    pub recorder: Arc<MatchRecorder>,
}

/// Builds the application router with permissive CORS.
#[instrument(skip(recorder))]
pub fn router(recorder: MatchRecorder) -> Router {
    info!("Building games router");

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(handlers::liveness))
        .route("/games", get(handlers::list_games).post(handlers::create_game))
        .route("/games/{id}", put(handlers::update_game).delete(handlers::delete_game))
        .layer(cors)
        .with_state(AppState {
            recorder: Arc::new(recorder),
        })
}
