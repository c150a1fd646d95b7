use lite_common::PlatformError;

use super::types::{KeyBind, Modifier};

/// Parses a shortcut string like `"Ctrl+T"`, `"Ctrl+Shift+Tab"`, or
/// `"Alt+Left"` into a [`KeyBind`].
///
/// - `Cmd` / `Command` is `Super` on macOS and `Ctrl` elsewhere
/// - `Option` / `Opt` is `Alt`
/// - `Win` / `Meta` is `Super`
///
/// The final token is always the key, so `"Shift"` alone binds the Shift key.
pub fn parse_keybind(s: &str) -> Result<KeyBind, PlatformError> {
    let tokens: Vec<&str> = s.split('+').map(str::trim).collect();
    let Some((last, mods)) = tokens.split_last() else {
        return Err(PlatformError::NotSupported("empty keybind string".into()));
    };
    if last.is_empty() {
        return Err(PlatformError::NotSupported(format!(
            "keybind '{s}' has no key component"
        )));
    }

    let mut seen = Vec::new();
    for token in mods {
        let modifier = normalize_modifier(token).ok_or_else(|| {
            PlatformError::NotSupported(format!("unrecognized modifier: {token}"))
        })?;
        if !seen.contains(&modifier) {
            seen.push(modifier);
        }
    }

    let modifiers = Modifier::ALL
        .into_iter()
        .filter(|m| seen.contains(m))
        .collect();

    Ok(KeyBind {
        modifiers,
        key: normalize_key_name(last),
    })
}

pub(super) fn normalize_modifier(token: &str) -> Option<Modifier> {
    match token.to_ascii_lowercase().as_str() {
        "ctrl" | "control" => Some(Modifier::Ctrl),
        "alt" | "option" | "opt" => Some(Modifier::Alt),
        "shift" => Some(Modifier::Shift),
        "cmd" | "command" if cfg!(target_os = "macos") => Some(Modifier::Super),
        "cmd" | "command" => Some(Modifier::Ctrl),
        "super" | "win" | "meta" => Some(Modifier::Super),
        _ => None,
    }
}

pub(super) fn normalize_key_name(token: &str) -> String {
    let lower = token.to_ascii_lowercase();
    let named = match lower.as_str() {
        "period" => ".",
        "comma" => ",",
        "slash" => "/",
        "space" | "spacebar" => "Space",
        "enter" | "return" => "Enter",
        "escape" | "esc" => "Escape",
        "tab" => "Tab",
        "backspace" => "Backspace",
        "delete" | "del" => "Delete",
        "up" | "arrowup" => "Up",
        "down" | "arrowdown" => "Down",
        "left" | "arrowleft" => "Left",
        "right" | "arrowright" => "Right",
        "home" => "Home",
        "end" => "End",
        "pageup" => "PageUp",
        "pagedown" => "PageDown",
        _ => "",
    };
    if !named.is_empty() {
        return named.to_string();
    }

    if token.chars().count() == 1 {
        return token.to_uppercase();
    }

    // F-keys and anything else: capitalize the first letter
    let mut chars = lower.chars();
    match chars.next() {
        Some(c) => c.to_uppercase().chain(chars).collect(),
        None => lower,
    }
}
