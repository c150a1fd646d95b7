//! Config file resolution and loading.
//!
//! A `--config` path must already exist. The platform default path is
//! seeded with a commented template on first run.

use crate::schema::LiteConfig;
use lite_common::ConfigError;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use super::template::default_config_toml;

/// Parse a config from TOML text.
///
/// Missing sections and fields take their defaults.
pub fn parse_str(content: &str) -> Result<LiteConfig, ConfigError> {
    toml::from_str(content)
        .map_err(|e| ConfigError::ParseError(format!("failed to parse TOML: {e}")))
}

/// Load config from a specific TOML file path.
///
/// Validation is left to the caller.
pub fn load_from_path(path: &Path) -> Result<LiteConfig, ConfigError> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| ConfigError::ParseError(format!("failed to read {}: {e}", path.display())))?;

    let config = parse_str(&content)?;
    info!(path = %path.display(), "loaded config");
    Ok(config)
}

/// Load from an explicit override, or from the platform default.
pub fn load(explicit: Option<&Path>) -> Result<LiteConfig, ConfigError> {
    match explicit {
        Some(path) if !path.exists() => Err(ConfigError::FileNotFound(path.to_path_buf())),
        Some(path) => load_from_path(path),
        None => load_or_create(&default_config_path()?),
    }
}

/// Load `path`, writing the default template there first if it is missing.
///
/// A freshly written file yields the defaults without a reparse.
pub fn load_or_create(path: &Path) -> Result<LiteConfig, ConfigError> {
    if path.exists() {
        return load_from_path(path);
    }
    debug!(path = %path.display(), "no config file found, writing default");
    write_default_config(path)?;
    Ok(LiteConfig::default())
}

/// The platform config path.
///
/// On macOS: `~/Library/Application Support/lite/config.toml`
/// On Linux: `~/.config/lite/config.toml`
pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    let config_dir = dirs::config_dir()
        .ok_or_else(|| ConfigError::ParseError("could not determine config directory".into()))?;
    Ok(config_dir.join("lite").join("config.toml"))
}

fn write_default_config(path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| {
            ConfigError::ParseError(format!("failed to create {}: {e}", parent.display()))
        })?;
    }
    std::fs::write(path, default_config_toml()).map_err(|e| {
        ConfigError::ParseError(format!("failed to write {}: {e}", path.display()))
    })?;
    info!(path = %path.display(), "created default config");
    Ok(())
}
