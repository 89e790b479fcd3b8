//! Interactive configuration wizard.

use anyhow::Result;
use dialoguer::Input;

use crate::config::Config;
use crate::global;

pub fn handle_configure_command() -> Result<()> {
    let config_path = global::config_file()?;
    let mut config = if config_path.exists() {
        Config::load_from(&config_path)?
    } else {
        Config::default()
    };

    let api_url: String = Input::new()
        .with_prompt("Backend API URL")
        .default(config.backend.api_url.clone())
        .interact_text()?;

    let api_token: String = Input::new()
        .with_prompt("API token")
        .default(config.backend.api_token.clone())
        .allow_empty(true)
        .interact_text()?;

    let interval_ms: u64 = Input::new()
        .with_prompt("Sync interval in milliseconds")
        .default(config.sync.interval_ms)
        .interact_text()?;

    config.backend.api_url = api_url.trim_end_matches('/').to_string();
    config.backend.api_token = api_token;
    config.sync.interval_ms = interval_ms;
    config.save_to(&config_path)?;

    println!("Configuration saved to {}", config_path.display());
    Ok(())
}
