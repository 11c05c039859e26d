//! Subcommand implementations.

/// Translation command handler.
pub mod translate;

use anyhow::Result;

use crate::config::{AppConfig, ConfigManager, ResolveOptions, resolve_config};

/// Loads the config file (explicit path or default location) and merges overrides.
pub fn load_config(config_path: Option<&str>, options: &ResolveOptions) -> Result<AppConfig> {
    let manager = match config_path {
        Some(path) => ConfigManager::with_path(path),
        None => ConfigManager::new()?,
    };
    let file_config = manager.load_or_default()?;
    resolve_config(options, &file_config)
}
