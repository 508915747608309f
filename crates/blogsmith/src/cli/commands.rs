//! CLI command definitions.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// AI-assisted blog content generation service.
#[derive(Debug, Parser)]
#[command(name = "blogsmith", version, about)]
pub struct Cli {
    /// Command to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Start the content generation HTTP server
    Serve {
        /// Path to a TOML configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Bind address override, e.g. 127.0.0.1:3000
        #[arg(short, long)]
        bind: Option<String>,
    },
    /// Load the configuration and print the resolved values
    CheckConfig {
        /// Path to a TOML configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}
