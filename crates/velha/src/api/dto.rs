//! Request and response bodies for the games API.

use serde::{Deserialize, Deserializer, Serialize};
use velha_tictactoe::Winner;

/// Body of `POST /games`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateGameRequest {
    /// Outcome of the match.
    pub winner: Winner,
    /// Optional label; blank or missing becomes the default name.
    #[serde(default)]
    pub name: Option<String>,
}

/// Body of `PUT /games/{id}`.
///
/// Absent fields are left unchanged. `"name": null` clears the name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateGameRequest {
    /// New outcome, if changing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub winner: Option<Winner>,
    /// New label, if changing.
    #[serde(
        default,
        deserialize_with = "present_or_null",
        skip_serializing_if = "Option::is_none"
    )]
    pub name: Option<Option<String>>,
}

/// Body of `DELETE /games/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Confirmation text.
    pub message: String,
}

/// Body of every error response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Human-readable failure.
    pub error: String,
}

// A present key (even `null`) maps to `Some(_)`; `default` covers absence.
fn present_or_null<'de, D>(deserializer: D) -> Result<Option<Option<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Some)
}
