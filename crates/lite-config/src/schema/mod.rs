//! Configuration schema types for the Lite browser.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod keybind_config;
mod logging;
mod search;
mod sidebar;
mod window;

pub use keybind_config::*;
pub use logging::*;
pub use search::*;
pub use sidebar::*;
pub use window::*;

use serde::{Deserialize, Serialize};

/// Root configuration.
///
/// Only override what you want to change.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LiteConfig {
    pub window: WindowConfig,
    pub sidebar: SidebarConfig,
    pub search: SearchConfig,
    pub keybinds: KeybindConfig,
    pub logging: LoggingConfig,
}

// =============================================================================
// Tests
// =============================================================================
