use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};

pub const TOKEN_ENV_VAR: &str = "B4ND_TOKEN";
const APP_DIR_NAME: &str = "b4nd-archiver";
const CONFIG_FILE_NAME: &str = "config.json";

/// Token supplied through the environment, if any (blank values count as unset)
pub fn token_from_env() -> Option<String> {
    env::var(TOKEN_ENV_VAR).ok().map(|t| t.trim().to_string()).filter(|t| !t.is_empty())
}

/// Default catalog file location (`<config_dir>/b4nd-archiver/config.json`)
pub fn default_config_path() -> Result<PathBuf> {
    let config_dir = dirs::config_dir().context("Failed to get platform config directory")?;
    Ok(config_dir.join(APP_DIR_NAME).join(CONFIG_FILE_NAME))
}
