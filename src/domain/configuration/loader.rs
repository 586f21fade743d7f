//! Configuration loading and discovery.

use std::path::{Path, PathBuf};

use crate::domain::{AppConfig, AppError};

/// File name looked up in the working directory when no config is given.
pub const CONFIG_FILE_NAME: &str = "addonctl.toml";

/// Find `addonctl.toml` in `dir`.
pub fn discover_config(dir: &Path) -> Option<PathBuf> {
    let candidate = dir.join(CONFIG_FILE_NAME);
    candidate.is_file().then_some(candidate)
}

/// Load and validate the configuration at `path`.
///
/// Relative paths inside the file are resolved against the file's directory.
pub fn load_config(path: &Path) -> Result<AppConfig, AppError> {
    if !path.is_file() {
        return Err(AppError::ConfigNotFound(path.display().to_string()));
    }

    let content = std::fs::read_to_string(path)?;
    let mut config: AppConfig = toml::from_str(&content)?;
    if let Some(base) = path.parent() {
        config.anchor_paths(base);
    }
    config.validate()?;
    Ok(config)
}

/// Parse configuration from string content.
pub fn parse_config_content(content: &str) -> Result<AppConfig, AppError> {
    let config: AppConfig = toml::from_str(content)?;
    config.validate()?;
    Ok(config)
}
