//! Lite browser configuration system.
//!
//! Provides TOML-based configuration with full validation. All config
//! sections use sensible defaults so partial configs work out of the box.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use lite_config::{load_config, validation};
//!
//! let config = load_config().expect("failed to load config");
//! if let Err(e) = validation::validate(&config) {
//!     eprintln!("{e}");
//! }
//! ```

pub mod keybinds;
pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use schema::LiteConfig;

use lite_common::ConfigError;
use std::path::Path;

/// Load config from the platform default path.
///
/// Loads `config.toml` from the OS config directory, creating a default
/// if none exists. Values are not validated here; callers run
/// [`validation::validate`] once logging is up.
pub fn load_config() -> Result<LiteConfig, ConfigError> {
    toml_loader::load(None)
}

/// Load config from an explicit path (the `--config` override).
pub fn load_config_from(path: &Path) -> Result<LiteConfig, ConfigError> {
    toml_loader::load(Some(path))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_config_from_keeps_invalid_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[sidebar]\nwidth = 9000\n").unwrap();
        let config = load_config_from(&path).unwrap();
        assert_eq!(config.sidebar.width, 9000);
        assert!(validation::validate(&config).is_err());
    }

    #[test]
    fn load_config_from_missing_path_is_file_not_found() {
        let err = load_config_from(Path::new("/tmp/definitely_missing_lite.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::FileNotFound(_)));
    }
}
