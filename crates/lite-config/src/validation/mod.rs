//! Full configuration validation.
//!
//! Validates numeric ranges, keybind uniqueness, and the search template.
//! Each domain has its own submodule; this orchestrator calls them all
//! and collects errors into a single `ConfigError`.

mod chrome;
mod helpers;


use crate::keybinds;
use crate::schema::LiteConfig;
use lite_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &LiteConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    // Keybind duplicates
    if let Err(e) = keybinds::validate_no_duplicates(&config.keybinds) {
        errors.push(e.to_string());
    }

    chrome::validate_window(&mut errors, config);
    chrome::validate_sidebar(&mut errors, config);
    chrome::validate_search(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
