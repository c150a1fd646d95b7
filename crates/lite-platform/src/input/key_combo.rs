use crate::keymap::{KeyBind, Modifier};

pub(super) const MOD_CTRL: u8 = 0b0001;
pub(super) const MOD_ALT: u8 = 0b0010;
pub(super) const MOD_SHIFT: u8 = 0b0100;
pub(super) const MOD_SUPER: u8 = 0b1000;

fn bit(modifier: Modifier) -> u8 {
    match modifier {
        Modifier::Ctrl => MOD_CTRL,
        Modifier::Alt => MOD_ALT,
        Modifier::Shift => MOD_SHIFT,
        Modifier::Super => MOD_SUPER,
    }
}

/// Hashable lookup key: modifier bitmask plus normalized key name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyCombo {
    /// Ctrl=1, Alt=2, Shift=4, Super=8.
    pub mods: u8,
    pub key: String,
}

impl KeyCombo {
    pub fn from_keybind(kb: &KeyBind) -> Self {
        Self {
            mods: kb.modifiers.iter().fold(0, |acc, m| acc | bit(*m)),
            key: kb.key.clone(),
        }
    }

    /// Build from live modifier state, as reported by winit or by a
    /// DOM `KeyboardEvent` forwarded over IPC.
    pub fn from_winit(ctrl: bool, alt: bool, shift: bool, super_key: bool, key: String) -> Self {
        let mods = [
            (ctrl, MOD_CTRL),
            (alt, MOD_ALT),
            (shift, MOD_SHIFT),
            (super_key, MOD_SUPER),
        ]
        .into_iter()
        .filter(|(held, _)| *held)
        .fold(0, |acc, (_, b)| acc | b);
        Self { mods, key }
    }

    pub(super) fn to_keybind(&self) -> KeyBind {
        KeyBind {
            modifiers: Modifier::ALL
                .into_iter()
                .filter(|m| self.mods & bit(*m) != 0)
                .collect(),
            key: self.key.clone(),
        }
    }
}
