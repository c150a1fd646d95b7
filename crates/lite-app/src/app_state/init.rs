//! Window creation and webview setup.

use std::sync::Arc;

use winit::event_loop::ActiveEventLoop;
use winit::window::WindowAttributes;

use lite_webview::{rect_to_wry, ViewId, WebViewConfig, WebViewManager, WebViewRegistry};

use super::chrome::CHROME_HTML;
use super::core::LiteApp;

/// Smallest window the chrome still lays out in.
const MIN_WINDOW_SIZE: (f64, f64) = (480.0, 320.0);

impl LiteApp {
    /// Create the window, the webview registry, and the chrome webview.
    /// Returns `false` if initialization failed and the event loop should exit.
    pub(super) fn initialize_window(&mut self, event_loop: &ActiveEventLoop) -> bool {
        let window_config = &self.config.window;
        let attrs = WindowAttributes::default()
            .with_title(window_config.title.clone())
            .with_inner_size(winit::dpi::LogicalSize::new(
                f64::from(window_config.width),
                f64::from(window_config.height),
            ))
            .with_min_inner_size(winit::dpi::LogicalSize::new(
                MIN_WINDOW_SIZE.0,
                MIN_WINDOW_SIZE.1,
            ))
            // The chrome draws its own title bar when one is configured.
            .with_decorations(window_config.titlebar_height == 0);

        let window = match event_loop.create_window(attrs) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                tracing::error!("Failed to create window: {e}");
                return false;
            }
        };

        self.initialize_webviews();
        self.window = Some(window);

        if !self.create_chrome() {
            return false;
        }

        tracing::info!("Window created and chrome loaded");
        true
    }

    /// Set up the WebView registry over the persistent profile directory.
    fn initialize_webviews(&mut self) {
        if self.profile_dir.is_none() {
            tracing::warn!("No profile directory; webview data will not persist");
        }
        let manager = WebViewManager::new(self.profile_dir.clone());
        self.webviews = Some(WebViewRegistry::new(manager));
        tracing::info!(
            profile_dir = ?self.profile_dir,
            "WebView registry initialized"
        );
    }

    /// Create the chrome webview covering the whole window.
    fn create_chrome(&mut self) -> bool {
        let bounds = self.chrome_bounds();
        let (Some(window), Some(webviews)) = (self.window.as_ref(), self.webviews.as_mut()) else {
            return false;
        };
        match webviews.create(
            ViewId::Chrome,
            window.as_ref(),
            rect_to_wry(&bounds),
            WebViewConfig::chrome(CHROME_HTML),
        ) {
            Ok(()) => true,
            Err(e) => {
                tracing::error!("Failed to create chrome webview: {e}");
                false
            }
        }
    }
}
