use serde::{Deserialize, Serialize};

/// A keyboard modifier key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Modifier {
    Ctrl,
    /// Option on macOS.
    Alt,
    Shift,
    /// Cmd on macOS, Win on Windows.
    Super,
}

impl Modifier {
    /// Canonical ordering used when building a [`KeyBind`].
    pub(crate) const ALL: [Modifier; 4] =
        [Modifier::Ctrl, Modifier::Alt, Modifier::Shift, Modifier::Super];
}

/// A shortcut: zero or more modifiers plus one key name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyBind {
    pub modifiers: Vec<Modifier>,
    pub key: String,
}

impl KeyBind {
    pub fn has(&self, modifier: Modifier) -> bool {
        self.modifiers.contains(&modifier)
    }
}
