//! Keybind validation utilities.

use crate::schema::KeybindConfig;
use lite_common::ConfigError;
use std::collections::HashMap;

/// Returns all keybinds as `(name, binding)` pairs.
pub fn all_keybinds(config: &KeybindConfig) -> Vec<(&str, &str)> {
    vec![
        ("new_tab", &config.new_tab),
        ("close_tab", &config.close_tab),
        ("focus_address_bar", &config.focus_address_bar),
        ("reload", &config.reload),
        ("reload_alt", &config.reload_alt),
        ("open_search", &config.open_search),
        ("escape", &config.escape),
        ("next_tab", &config.next_tab),
        ("prev_tab", &config.prev_tab),
        ("toggle_sidebar", &config.toggle_sidebar),
        ("go_back", &config.go_back),
        ("go_forward", &config.go_forward),
    ]
}

/// Validate that no two keybinds are mapped to the same key combination.
///
/// Empty bindings are treated as unbound and never conflict.
pub fn validate_no_duplicates(config: &KeybindConfig) -> Result<(), ConfigError> {
    let binds = all_keybinds(config);
    let mut seen: HashMap<&str, &str> = HashMap::new();

    for (name, binding) in &binds {
        if binding.is_empty() {
            continue;
        }
        if let Some(existing_name) = seen.get(binding) {
            return Err(ConfigError::ValidationError(format!(
                "duplicate keybind '{binding}': assigned to both '{existing_name}' and '{name}'"
            )));
        }
        seen.insert(binding, name);
    }

    Ok(())
}
