//! Content-area geometry.
//!
//! Tab surfaces sit below the title bar and to the right of the sidebar
//! when the sidebar is effectively visible.

use lite_common::{Rect, WindowSize};
use lite_config::LiteConfig;

pub const TITLEBAR_HEIGHT: f64 = 36.0;
pub const SIDEBAR_WIDTH: f64 = 260.0;

/// Fixed chrome dimensions in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChromeMetrics {
    pub titlebar_height: f64,
    pub sidebar_width: f64,
}

impl Default for ChromeMetrics {
    fn default() -> Self {
        Self {
            titlebar_height: TITLEBAR_HEIGHT,
            sidebar_width: SIDEBAR_WIDTH,
        }
    }
}

impl ChromeMetrics {
    pub fn from_config(config: &LiteConfig) -> Self {
        Self {
            titlebar_height: f64::from(config.window.titlebar_height),
            sidebar_width: f64::from(config.sidebar.width),
        }
    }

    /// Rectangle occupied by the active tab surface.
    ///
    /// Width and height floor at zero when the window is smaller than
    /// the chrome, which happens mid-animation on some platforms.
    pub fn resolve(&self, window: WindowSize, sidebar_visible: bool) -> Rect {
        let x = if sidebar_visible {
            self.sidebar_width
        } else {
            0.0
        };
        Rect {
            x,
            y: self.titlebar_height,
            width: (window.width - x).max(0.0),
            height: (window.height - self.titlebar_height).max(0.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn window() -> WindowSize {
        WindowSize::new(1200.0, 800.0)
    }

    #[test]
    fn sidebar_visible_offsets_content() {
        let rect = ChromeMetrics::default().resolve(window(), true);
        assert_eq!(
            rect,
            Rect {
                x: 260.0,
                y: 36.0,
                width: 940.0,
                height: 764.0
            }
        );
    }

    #[test]
    fn sidebar_hidden_uses_full_width() {
        let rect = ChromeMetrics::default().resolve(window(), false);
        assert_eq!(
            rect,
            Rect {
                x: 0.0,
                y: 36.0,
                width: 1200.0,
                height: 764.0
            }
        );
    }

    #[test]
    fn tiny_window_floors_at_zero() {
        let rect = ChromeMetrics::default().resolve(WindowSize::new(100.0, 20.0), true);
        assert_eq!(rect.x, 260.0);
        assert_eq!(rect.y, 36.0);
        assert_eq!(rect.width, 0.0);
        assert_eq!(rect.height, 0.0);
    }

    #[test]
    fn metrics_follow_config() {
        let mut config = LiteConfig::default();
        config.sidebar.width = 300;
        config.window.titlebar_height = 0;
        let rect = ChromeMetrics::from_config(&config).resolve(window(), true);
        assert_eq!(rect.x, 300.0);
        assert_eq!(rect.y, 0.0);
        assert_eq!(rect.height, 800.0);
    }
}
