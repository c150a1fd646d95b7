//! WebView lifecycle management.
//!
//! `WebViewManager` builds `wry::WebView` instances as children of the
//! main window; `WebViewRegistry` keys them by [`ViewId`](crate::ViewId).

use std::path::PathBuf;
use std::sync::{Arc, Mutex, PoisonError};

use wry::WebContext;

use crate::events::WebViewEvent;

mod handle;
pub mod handlers;
mod lifecycle;
mod registry;
mod types;

pub use handle::WebViewHandle;
pub use handlers::is_navigation_allowed;
pub use registry::WebViewRegistry;
pub use types::{NavigationPolicy, WebViewConfig};

/// Shared event sink and browsing context for every webview.
pub struct WebViewManager {
    /// Events are pushed here for the main event loop to drain.
    pub(crate) events: Arc<Mutex<Vec<WebViewEvent>>>,
    /// Cookie and cache storage shared by all tabs.
    context: WebContext,
}

impl WebViewManager {
    /// `data_dir` holds cookies, cache, and local storage; `None` uses the
    /// platform default.
    pub fn new(data_dir: Option<PathBuf>) -> Self {
        Self {
            events: Arc::new(Mutex::new(Vec::new())),
            context: WebContext::new(data_dir),
        }
    }

    pub(crate) fn push_event(&self, event: WebViewEvent) {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(event);
    }

    /// Drain all pending events.
    pub fn drain_events(&self) -> Vec<WebViewEvent> {
        let mut events = self.events.lock().unwrap_or_else(PoisonError::into_inner);
        std::mem::take(&mut *events)
    }
}

impl Default for WebViewManager {
    fn default() -> Self {
        Self::new(None)
    }
}
