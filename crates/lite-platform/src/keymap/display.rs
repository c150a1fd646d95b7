use super::types::{KeyBind, Modifier};

/// Renders a [`KeyBind`] for menus and tooltips.
///
/// macOS uses the usual modifier glyphs with no separator; other
/// platforms use `Ctrl+Shift+T` style.
pub fn keybind_to_display(kb: &KeyBind) -> String {
    let mac = cfg!(target_os = "macos");
    let mut parts: Vec<&str> = kb
        .modifiers
        .iter()
        .map(|m| modifier_label(*m, mac))
        .collect();
    parts.push(key_label(&kb.key, mac));
    parts.join(if mac { "" } else { "+" })
}

fn modifier_label(modifier: Modifier, mac: bool) -> &'static str {
    match (modifier, mac) {
        (Modifier::Ctrl, true) => "\u{2303}",
        (Modifier::Alt, true) => "\u{2325}",
        (Modifier::Shift, true) => "\u{21E7}",
        (Modifier::Super, true) => "\u{2318}",
        (Modifier::Ctrl, false) => "Ctrl",
        (Modifier::Alt, false) => "Alt",
        (Modifier::Shift, false) => "Shift",
        (Modifier::Super, false) if cfg!(target_os = "windows") => "Win",
        (Modifier::Super, false) => "Super",
    }
}

fn key_label(key: &str, mac: bool) -> &str {
    if !mac {
        return key;
    }
    match key {
        "Enter" => "\u{21A9}",
        "Escape" => "\u{238B}",
        "Tab" => "\u{21E5}",
        "Space" => "\u{2423}",
        "Left" => "\u{2190}",
        "Right" => "\u{2192}",
        "Up" => "\u{2191}",
        "Down" => "\u{2193}",
        other => other,
    }
}
