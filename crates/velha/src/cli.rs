//! Command-line interface for velha.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Velha - tic-tac-toe with a persisted match history
#[derive(Parser, Debug)]
#[command(name = "velha")]
#[command(about = "Tic-tac-toe with a recorded match history", long_about = None)]
#[command(version)]
pub struct Cli {
    /// TOML configuration file (defaults to ./velha.toml when present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the match history HTTP server
    Serve {
        /// Port to bind to
        #[arg(short, long)]
        port: Option<u16>,

        /// Host to bind to
        #[arg(long)]
        host: Option<String>,

        /// Path to the SQLite database file (created if it doesn't exist)
        #[arg(long)]
        database_url: Option<String>,
    },

    /// Play in the terminal, recording results on the server
    Play {
        /// Match history server URL
        #[arg(long)]
        server_url: Option<String>,
    },
}
