//! Keyboard shortcuts configuration types.
//!
//! Named `keybind_config` to avoid clash with the crate-level `keybinds` module.

use serde::{Deserialize, Serialize};

/// Keyboard shortcuts configuration.
///
/// Format: "Modifier+Key" where Modifier is one of: Ctrl, Alt, Shift, Cmd, Super.
/// Multiple modifiers: "Ctrl+Shift+Tab".
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct KeybindConfig {
    pub new_tab: String,
    pub close_tab: String,
    pub focus_address_bar: String,
    pub reload: String,
    pub reload_alt: String,
    pub open_search: String,
    pub escape: String,
    pub next_tab: String,
    pub prev_tab: String,
    pub toggle_sidebar: String,
    pub go_back: String,
    pub go_forward: String,
}

impl Default for KeybindConfig {
    fn default() -> Self {
        Self {
            new_tab: "Ctrl+T".into(),
            close_tab: "Ctrl+W".into(),
            focus_address_bar: "Ctrl+L".into(),
            reload: "Ctrl+R".into(),
            reload_alt: "F5".into(),
            open_search: "Ctrl+Space".into(),
            escape: "Escape".into(),
            next_tab: "Ctrl+Tab".into(),
            prev_tab: "Ctrl+Shift+Tab".into(),
            toggle_sidebar: "Ctrl+B".into(),
            go_back: "Alt+Left".into(),
            go_forward: "Alt+Right".into(),
        }
    }
}
