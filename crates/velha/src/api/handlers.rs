//! Route handlers for the games API.

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};
use tracing::{debug, error, instrument, warn};

use crate::api::AppState;
use crate::api::dto::{CreateGameRequest, MessageResponse, UpdateGameRequest};
use crate::api::error::{ApiError, Operation};
use crate::{GameResult, MatchRecorder, RecorderError};

/// Liveness text for `GET /`.
pub async fn liveness() -> &'static str {
    "Tic-tac-toe server is running and connected to the database"
}

/// `POST /games`
#[instrument(skip_all)]
pub async fn create_game(
    State(state): State<AppState>,
    body: Result<Json<CreateGameRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<GameResult>), ApiError> {
    let Json(request) = body?;
    debug!(winner = %request.winner, name = ?request.name, "Create requested");

    let created = with_recorder(&state, Operation::Create, move |recorder| {
        recorder.create(request.winner, request.name)
    })
    .await?;

    Ok((StatusCode::CREATED, Json(created)))
}

/// `GET /games`
#[instrument(skip_all)]
pub async fn list_games(State(state): State<AppState>) -> Result<Json<Vec<GameResult>>, ApiError> {
    let games = with_recorder(&state, Operation::List, |recorder| recorder.list()).await?;
    Ok(Json(games))
}

/// `PUT /games/{id}`
#[instrument(skip_all)]
pub async fn update_game(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    body: Result<Json<UpdateGameRequest>, JsonRejection>,
) -> Result<Json<GameResult>, ApiError> {
    let id = parse_id(&raw_id)?;
    let Json(request) = body?;
    debug!(id, winner = ?request.winner, name = ?request.name, "Update requested");

    let updated = with_recorder(&state, Operation::Update, move |recorder| {
        recorder.update(id, request.winner, request.name)
    })
    .await?;

    Ok(Json(updated))
}

/// `DELETE /games/{id}`
#[instrument(skip_all)]
pub async fn delete_game(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    let id = parse_id(&raw_id)?;
    debug!(id, "Delete requested");

    with_recorder(&state, Operation::Delete, move |recorder| recorder.delete(id)).await?;

    Ok(Json(MessageResponse {
        message: "Game deleted".to_string(),
    }))
}

/// Ids arrive as path text and must parse as integers.
fn parse_id(raw: &str) -> Result<i32, ApiError> {
    raw.trim()
        .parse::<i32>()
        .map_err(|e| {
            warn!(raw, error = %e, "Rejected game id");
            ApiError::BadRequest(format!("Invalid game id: {}", raw))
        })
}

/// Runs a blocking recorder call off the async workers.
async fn with_recorder<T, F>(state: &AppState, operation: Operation, call: F) -> Result<T, ApiError>
where
    T: Send + 'static,
    F: FnOnce(&MatchRecorder) -> Result<T, RecorderError> + Send + 'static,
{
    let recorder = state.recorder.clone();
    match tokio::task::spawn_blocking(move || call(recorder.as_ref())).await {
        Ok(result) => result.map_err(|e| ApiError::from_recorder(operation, e)),
        Err(join_error) => {
            error!(%operation, error = %join_error, "Recorder task failed");
            Err(ApiError::Internal(operation))
        }
    }
}
