use std::collections::HashMap;

use lite_common::actions::Action;
use lite_config::schema::KeybindConfig;

use crate::keymap::{keybind_to_display, parse_keybind};

use super::key_combo::KeyCombo;

/// Maps key combinations to browser [`Action`]s.
pub struct KeybindRegistry {
    bindings: HashMap<KeyCombo, Action>,
}

impl KeybindRegistry {
    /// Build the registry from the `[keybinds]` config section.
    ///
    /// Empty strings are unbound. Unparseable bindings are logged and skipped.
    pub fn from_config(config: &KeybindConfig) -> Self {
        let mappings: [(&str, Action); 12] = [
            (&config.new_tab, Action::NewTab),
            (&config.close_tab, Action::CloseTab),
            (&config.focus_address_bar, Action::FocusAddressBar),
            (&config.reload, Action::Reload),
            (&config.reload_alt, Action::Reload),
            (&config.open_search, Action::OpenSearch),
            (&config.escape, Action::Escape),
            (&config.next_tab, Action::NextTab),
            (&config.prev_tab, Action::PrevTab),
            (&config.toggle_sidebar, Action::ToggleSidebar),
            (&config.go_back, Action::GoBack),
            (&config.go_forward, Action::GoForward),
        ];

        let mut bindings = HashMap::new();
        for (binding, action) in mappings {
            if binding.is_empty() {
                continue;
            }
            match parse_keybind(binding) {
                Ok(kb) => {
                    bindings.insert(KeyCombo::from_keybind(&kb), action);
                }
                Err(e) => tracing::warn!(binding, error = %e, "skipping invalid keybind"),
            }
        }

        Self { bindings }
    }

    pub fn lookup(&self, combo: &KeyCombo) -> Option<&Action> {
        self.bindings.get(combo)
    }

    /// Display string for the first binding of `action`, for menu hints.
    pub fn keybind_for_action(&self, action: &Action) -> Option<String> {
        self.bindings
            .iter()
            .find(|(_, a)| *a == action)
            .map(|(combo, _)| keybind_to_display(&combo.to_keybind()))
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}
