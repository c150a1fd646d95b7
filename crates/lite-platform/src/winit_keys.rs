//! Key name normalization.
//!
//! winit's logical key names and the DOM `KeyboardEvent.key` values
//! forwarded from webviews share the same vocabulary (`"ArrowLeft"`,
//! `" "`, `"F5"`). Both are folded into the names produced by
//! [`parse_keybind`](crate::keymap::parse_keybind).

/// Convert a winit or DOM key name to the normalized `KeyCombo` key.
pub fn normalize_winit_key(key: &str) -> String {
    match key {
        "ArrowUp" => "Up".into(),
        "ArrowDown" => "Down".into(),
        "ArrowLeft" => "Left".into(),
        "ArrowRight" => "Right".into(),
        " " | "Spacebar" => "Space".into(),
        "Esc" => "Escape".into(),
        // Single characters: uppercase so Shift does not change the key name
        k if k.chars().count() == 1 => k.to_uppercase(),
        // F-keys and named keys pass through
        k => k.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keymap::parse_keybind;

    #[test]
    fn arrow_keys() {
        assert_eq!(normalize_winit_key("ArrowLeft"), "Left");
        assert_eq!(normalize_winit_key("ArrowRight"), "Right");
        assert_eq!(normalize_winit_key("ArrowUp"), "Up");
    }

    #[test]
    fn space_variants() {
        assert_eq!(normalize_winit_key(" "), "Space");
        assert_eq!(normalize_winit_key("Spacebar"), "Space");
    }

    #[test]
    fn letters_uppercased() {
        assert_eq!(normalize_winit_key("t"), "T");
        assert_eq!(normalize_winit_key("W"), "W");
    }

    #[test]
    fn named_keys_pass_through() {
        assert_eq!(normalize_winit_key("F5"), "F5");
        assert_eq!(normalize_winit_key("Tab"), "Tab");
        assert_eq!(normalize_winit_key("Escape"), "Escape");
    }

    #[test]
    fn agrees_with_keybind_parser() {
        for (live, configured) in [
            ("ArrowLeft", "Alt+Left"),
            (" ", "Ctrl+Space"),
            ("Tab", "Ctrl+Tab"),
            ("l", "Ctrl+L"),
            ("F5", "F5"),
        ] {
            assert_eq!(normalize_winit_key(live), parse_keybind(configured).unwrap().key);
        }
    }
}
