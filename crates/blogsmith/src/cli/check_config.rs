//! Check-config command handler.

use anyhow::Context;
use blogsmith_server::ServerConfig;
use std::path::PathBuf;

/// Handle the `check-config` command: load, resolve and print the
/// configuration with keys redacted.
pub fn handle_check_config_command(config_path: Option<PathBuf>) -> anyhow::Result<()> {
    let config = ServerConfig::load(config_path.as_deref()).context("loading configuration")?;

    println!("bind_addr = {}", config.bind_addr());
    println!(
        "text: model = {}, api_key = {}, timeout = {}s",
        config.text().model(),
        redact(config.text().api_key().as_deref()),
        config.text().timeout_secs(),
    );
    println!(
        "image: model = {}, size = {}, api_key = {}, timeout = {}s",
        config.image().model(),
        config.image().size(),
        redact(config.image().api_key().as_deref()),
        config.image().timeout_secs(),
    );

    // Resolving the gateway configs is the actual check: it fails when a
    // required key is missing.
    config.text_config().context("text gateway")?;
    config.image_config().context("image gateway")?;
    println!("configuration ok");
    Ok(())
}

fn redact(key: Option<&str>) -> &'static str {
    match key {
        Some(k) if !k.is_empty() => "set",
        _ => "missing",
    }
}
