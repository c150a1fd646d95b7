//! Platform glue: shortcut parsing, the keybind registry, key name
//! normalization, and profile paths.

pub mod input;
pub mod keymap;
pub mod paths;
pub mod winit_keys;

pub use input::{KeyCombo, KeybindRegistry};
pub use keymap::{KeyBind, Modifier};
pub use paths::{data_dir, ensure_dirs, webview_data_dir};
pub use winit_keys::normalize_winit_key;
