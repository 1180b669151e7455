//! Platform directories
//!
//! plate-desk persists nothing but its config file; this resolves where it
//! lives.

use anyhow::Result;
use std::path::PathBuf;

/// Name of the config file inside the config directory
pub const CONFIG_FILE_NAME: &str = "config.toml";

fn project_dirs() -> Result<directories::ProjectDirs> {
    directories::ProjectDirs::from("com", "platedesk", "PlateDesk")
        .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))
}

/// Get the configuration directory, creating it if needed
pub fn get_config_dir() -> Result<PathBuf> {
    let config_dir = project_dirs()?.config_dir().to_path_buf();
    std::fs::create_dir_all(&config_dir)?;

    Ok(config_dir)
}

/// Default location of the config file
pub fn default_config_path() -> Result<PathBuf> {
    Ok(get_config_dir()?.join(CONFIG_FILE_NAME))
}
