//! Sidebar configuration types.

use serde::{Deserialize, Serialize};

/// Sidebar width and auto-hide behavior.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SidebarConfig {
    /// Sidebar width in logical pixels (valid range: 120-600).
    pub width: u32,
    /// Delay before the sidebar hides after the pointer leaves it,
    /// in milliseconds (valid range: 0-5000).
    pub hide_delay_ms: u64,
    /// Whether the sidebar starts visible.
    #[serde(alias = "visible")]
    pub start_visible: bool,
    /// Whether the sidebar starts pinned open.
    #[serde(alias = "pinned")]
    pub start_pinned: bool,
}

impl Default for SidebarConfig {
    fn default() -> Self {
        Self {
            width: 260,
            hide_delay_ms: 300,
            start_visible: true,
            start_pinned: false,
        }
    }
}

impl SidebarConfig {
    pub fn hide_delay(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.hide_delay_ms)
    }
}
