//! Runtime configuration for the server and the terminal client.
//!
//! Precedence, lowest first: built-in defaults, the TOML file, `VELHA_*`
//! environment variables (a `.env` file is loaded by the binary), then
//! command-line flags.

use std::path::Path;

use derive_getters::Getters;
use derive_more::{Display, Error};
use derive_setters::Setters;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Configuration file read when no `--config` flag is given.
pub const DEFAULT_CONFIG_FILE: &str = "velha.toml";

/// Settings shared by `serve` and `play`.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Setters, Serialize, Deserialize)]
#[setters(prefix = "with_", into)]
#[serde(default)]
pub struct AppConfig {
    /// Interface the server binds to.
    host: String,
    /// Port the server listens on.
    port: u16,
    /// SQLite database file.
    database_url: String,
    /// Base URL the client talks to.
    server_url: String,
    /// File the terminal client writes its log to.
    tui_log_file: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 5000,
            database_url: "velha.db".to_string(),
            server_url: "http://localhost:5000".to_string(),
            tui_log_file: "velha_tui.log".to_string(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from an optional TOML file plus the environment.
    ///
    /// An explicit `path` must exist. Without one, [`DEFAULT_CONFIG_FILE`] is
    /// read if present and defaults are used otherwise.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the file cannot be read or parsed, or an
    /// environment override is malformed.
    #[instrument(skip(path), fields(path = ?path))]
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let config = match path {
            Some(path) => Self::from_file(path)?,
            None if Path::new(DEFAULT_CONFIG_FILE).exists() => Self::from_file(DEFAULT_CONFIG_FILE)?,
            None => {
                debug!("No config file, using defaults");
                Self::default()
            }
        };
        config.apply_env(|key| std::env::var(key).ok())
    }

    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(host = %config.host, port = config.port, "Config loaded successfully");
        Ok(config)
    }

    /// Overrides fields from `VELHA_*` variables looked up through `lookup`.
    pub fn apply_env(
        mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        if let Some(host) = lookup("VELHA_HOST") {
            self.host = host;
        }
        if let Some(port) = lookup("VELHA_PORT") {
            self.port = port
                .parse()
                .map_err(|e| ConfigError::new(format!("Invalid VELHA_PORT '{}': {}", port, e)))?;
        }
        if let Some(url) = lookup("VELHA_DATABASE_URL") {
            self.database_url = url;
        }
        if let Some(url) = lookup("VELHA_SERVER_URL") {
            self.server_url = url;
        }
        Ok(self)
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
