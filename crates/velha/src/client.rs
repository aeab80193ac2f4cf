//! HTTP client for the match history API.

use anyhow::{Context, Result};
use async_trait::async_trait;
use tracing::{debug, info, instrument};

use crate::GameResult;
use crate::api::{CreateGameRequest, MessageResponse, UpdateGameRequest};

/// Where the game client reads and writes match history.
#[async_trait]
pub trait MatchStore: Send + Sync {
    /// All records, newest first.
    async fn list(&self) -> Result<Vec<GameResult>>;

    /// Records a finished match.
    async fn create(&self, request: CreateGameRequest) -> Result<GameResult>;

    /// Changes winner and/or name of a record.
    async fn update(&self, id: i32, request: UpdateGameRequest) -> Result<GameResult>;

    /// Removes a record.
    async fn delete(&self, id: i32) -> Result<()>;
}

/// [`MatchStore`] backed by the REST API.
#[derive(Debug, Clone)]
pub struct RestClient {
    base_url: String,
    client: reqwest::Client,
}

impl RestClient {
    /// Creates a client for the server at `base_url`.
    #[instrument(skip_all)]
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        info!(base_url = %base_url, "Creating REST client");
        Self {
            base_url,
            client: reqwest::Client::new(),
        }
    }

    /// Server base URL without trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn games_url(&self) -> String {
        format!("{}/games", self.base_url)
    }

    fn game_url(&self, id: i32) -> String {
        format!("{}/games/{}", self.base_url, id)
    }
}

#[async_trait]
impl MatchStore for RestClient {
    #[instrument(skip(self))]
    async fn list(&self) -> Result<Vec<GameResult>> {
        let games: Vec<GameResult> = self
            .client
            .get(self.games_url())
            .send()
            .await
            .context("Failed to reach server")?
            .error_for_status()
            .context("Server rejected list request")?
            .json()
            .await
            .context("Invalid history payload")?;

        debug!(count = games.len(), "History fetched");
        Ok(games)
    }

    #[instrument(skip(self))]
    async fn create(&self, request: CreateGameRequest) -> Result<GameResult> {
        let created: GameResult = self
            .client
            .post(self.games_url())
            .json(&request)
            .send()
            .await
            .context("Failed to reach server")?
            .error_for_status()
            .context("Server rejected create request")?
            .json()
            .await
            .context("Invalid created record")?;

        info!(id = created.id(), "Match saved");
        Ok(created)
    }

    #[instrument(skip(self))]
    async fn update(&self, id: i32, request: UpdateGameRequest) -> Result<GameResult> {
        let updated: GameResult = self
            .client
            .put(self.game_url(id))
            .json(&request)
            .send()
            .await
            .context("Failed to reach server")?
            .error_for_status()
            .with_context(|| format!("Server rejected update of game {}", id))?
            .json()
            .await
            .context("Invalid updated record")?;

        info!(id, "Match updated");
        Ok(updated)
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: i32) -> Result<()> {
        let confirmation: MessageResponse = self
            .client
            .delete(self.game_url(id))
            .send()
            .await
            .context("Failed to reach server")?
            .error_for_status()
            .with_context(|| format!("Server rejected delete of game {}", id))?
            .json()
            .await
            .context("Invalid delete confirmation")?;

        info!(id, message = %confirmation.message, "Match deleted");
        Ok(())
    }
}
