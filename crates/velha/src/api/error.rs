//! Mapping of recorder failures onto HTTP responses.

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use derive_more::Display;
use tracing::{error, warn};

use crate::RecorderError;
use crate::api::dto::ErrorResponse;

/// The endpoint an error came from; selects the fixed 500 message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Operation {
    /// `POST /games`
    #[display("create")]
    Create,
    /// `GET /games`
    #[display("list")]
    List,
    /// `PUT /games/{id}`
    #[display("update")]
    Update,
    /// `DELETE /games/{id}`
    #[display("delete")]
    Delete,
}

impl Operation {
    /// Message returned to clients when the store fails.
    pub fn failure_message(self) -> &'static str {
        match self {
            Operation::Create => "Failed to save game",
            Operation::List => "Failed to fetch games",
            Operation::Update => "Failed to update game",
            Operation::Delete => "Failed to delete game",
        }
    }
}

/// Error returned by the games handlers.
#[derive(Debug)]
pub enum ApiError {
    /// Malformed body or id.
    BadRequest(String),
    /// Update or delete of an unknown id.
    NotFound(i32),
    /// Storage fault; details stay in the server log.
    Internal(Operation),
}

impl ApiError {
    /// Classifies a recorder failure, logging storage faults.
    pub fn from_recorder(operation: Operation, err: RecorderError) -> Self {
        match err {
            RecorderError::NotFound(id) => {
                warn!(%operation, id, "Game not found");
                ApiError::NotFound(id)
            }
            RecorderError::Storage(db) => {
                error!(%operation, error = %db, "Persistence operation failed");
                ApiError::Internal(operation)
            }
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        warn!(error = %rejection.body_text(), "Rejected request body");
        ApiError::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::BadRequest(message) => (StatusCode::BAD_REQUEST, message),
            ApiError::NotFound(id) => (StatusCode::NOT_FOUND, format!("Game {} not found", id)),
            ApiError::Internal(operation) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                operation.failure_message().to_string(),
            ),
        };

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{DbError, DbErrorKind};

    #[test]
    fn test_unknown_id_is_client_error() {
        let err = ApiError::from_recorder(Operation::Update, RecorderError::NotFound(7));
        assert!(matches!(err, ApiError::NotFound(7)));
        assert_eq!(err.into_response().status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_storage_fault_is_server_error() {
        let db = DbError::new(DbErrorKind::Connection, "unable to open database file");
        let err = ApiError::from_recorder(Operation::Delete, RecorderError::Storage(db));
        assert!(matches!(err, ApiError::Internal(Operation::Delete)));
        assert_eq!(err.into_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
