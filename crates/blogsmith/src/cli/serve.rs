//! Serve command handler.

use anyhow::Context;
use blogsmith_models::{GeminiClient, OpenAiImageClient};
use blogsmith_server::{ContentService, ServerConfig, create_router};
use std::path::PathBuf;
use std::sync::Arc;

/// Handle the `serve` command.
pub async fn handle_serve_command(
    config_path: Option<PathBuf>,
    bind: Option<String>,
) -> anyhow::Result<()> {
    let config = ServerConfig::load(config_path.as_deref()).context("loading configuration")?;
    let bind_addr = bind.unwrap_or_else(|| config.bind_addr().clone());

    let text = GeminiClient::new(config.text_config()?).context("building text gateway")?;
    let image =
        OpenAiImageClient::new(config.image_config()?).context("building image gateway")?;
    let service = Arc::new(ContentService::new(text, image));
    let router = create_router(service);

    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("binding {}", bind_addr))?;
    tracing::info!(addr = %bind_addr, "Content generation server listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("serving")?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to listen for Ctrl+C");
    tracing::info!("Shutdown signal received");
}
