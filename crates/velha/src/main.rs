//! Velha - unified CLI
//!
//! `serve` runs the match history server, `play` runs the terminal game.

#![warn(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;
use velha::cli::{Cli, Command};
use velha::{AppConfig, GameResultRepository, MatchRecorder, api, ui};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = AppConfig::load(cli.config.as_deref())?;

    match cli.command {
        Command::Serve {
            port,
            host,
            database_url,
        } => {
            let mut config = config;
            if let Some(port) = port {
                config = config.with_port(port);
            }
            if let Some(host) = host {
                config = config.with_host(host);
            }
            if let Some(database_url) = database_url {
                config = config.with_database_url(database_url);
            }
            run_server(config).await
        }
        Command::Play { server_url } => {
            let config = match server_url {
                Some(url) => config.with_server_url(url),
                None => config,
            };
            ui::run_tui(&config).await
        }
    }
}

/// Run the match history HTTP server
#[instrument(skip_all, fields(host = %config.host(), port = config.port()))]
async fn run_server(config: AppConfig) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    info!(database = %config.database_url(), "Starting velha server");

    let repository = GameResultRepository::new(config.database_url().clone());
    repository
        .run_migrations()
        .context("Failed to prepare database")?;

    let app = api::router(MatchRecorder::new(repository));

    let listener = tokio::net::TcpListener::bind((config.host().as_str(), *config.port()))
        .await
        .with_context(|| format!("Failed to bind {}:{}", config.host(), config.port()))?;
    info!("Server ready at http://{}:{}/", config.host(), config.port());

    axum::serve(listener, app).await?;
    Ok(())
}
