//! Window configuration types.

use serde::{Deserialize, Serialize};

/// Window appearance and initial size.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Static window title.
    pub title: String,
    /// Initial inner width in logical pixels.
    pub width: u32,
    /// Initial inner height in logical pixels.
    pub height: u32,
    /// Height of the custom title bar in logical pixels (valid range: 0-100).
    /// Tab surfaces are always placed below it.
    pub titlebar_height: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Lite Browser".into(),
            width: 1200,
            height: 800,
            titlebar_height: 36,
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_config_defaults() {
        let config = WindowConfig::default();
        assert_eq!(config.title, "Lite Browser");
        assert_eq!(config.width, 1200);
        assert_eq!(config.height, 800);
        assert_eq!(config.titlebar_height, 36);
    }

    #[test]
    fn window_config_partial_toml() {
        let toml_str = r#"
title = "Browser"
titlebar_height = 0
"#;
        let config: WindowConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.title, "Browser");
        assert_eq!(config.titlebar_height, 0);
        // Defaults preserved
        assert_eq!(config.width, 1200);
    }
}
