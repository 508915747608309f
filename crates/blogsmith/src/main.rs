//! blogsmith binary entry point.

use blogsmith::cli::{Cli, Commands, handle_check_config_command, handle_serve_command};
use clap::Parser;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Serve { config, bind } => handle_serve_command(config, bind).await,
        Commands::CheckConfig { config } => handle_check_config_command(config),
    }
}
