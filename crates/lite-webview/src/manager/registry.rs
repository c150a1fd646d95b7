use std::collections::HashMap;

use lite_common::TabId;
use tracing::{debug, warn};
use wry::raw_window_handle;

use crate::error::WebViewError;
use crate::events::{ViewId, WebViewEvent};

use super::handle::WebViewHandle;
use super::types::WebViewConfig;
use super::WebViewManager;

/// Live webviews keyed by [`ViewId`].
///
/// Operations on a view with no webview are no-ops, so a command that
/// races a close never fails.
pub struct WebViewRegistry {
    manager: WebViewManager,
    handles: HashMap<ViewId, WebViewHandle>,
}

impl WebViewRegistry {
    pub fn new(manager: WebViewManager) -> Self {
        Self {
            manager,
            handles: HashMap::new(),
        }
    }

    /// Create a webview for `view`, replacing any existing one.
    ///
    /// The old webview is dropped only once the new one is built, so a
    /// failed create leaves the previous page showing.
    pub fn create<W: raw_window_handle::HasWindowHandle>(
        &mut self,
        view: ViewId,
        window: &W,
        bounds: wry::Rect,
        config: WebViewConfig,
    ) -> Result<(), wry::Error> {
        let handle = self.manager.create(view, window, bounds, config)?;
        if self.install(view, handle).is_some() {
            debug!(%view, "replaced existing webview");
        }
        Ok(())
    }

    /// Put `handle` in place for `view`, returning the replaced one.
    fn install(&mut self, view: ViewId, handle: WebViewHandle) -> Option<WebViewHandle> {
        let old = self.handles.insert(view, handle);
        if old.is_some() {
            self.manager.push_event(WebViewEvent::Closed { view });
        }
        old
    }

    pub fn get(&self, view: ViewId) -> Option<&WebViewHandle> {
        self.handles.get(&view)
    }

    /// Destroy a webview. Returns whether one existed.
    pub fn destroy(&mut self, view: ViewId) -> bool {
        if self.handles.remove(&view).is_some() {
            debug!(%view, "WebView destroyed");
            self.manager.push_event(WebViewEvent::Closed { view });
            true
        } else {
            false
        }
    }

    pub fn set_bounds(&self, view: ViewId, bounds: wry::Rect) -> Result<(), wry::Error> {
        match self.handles.get(&view) {
            Some(handle) => handle.set_bounds(bounds),
            None => Ok(()),
        }
    }

    /// Show `active` and hide every other listed tab.
    ///
    /// Every view is attempted; the first failure is returned.
    pub fn show_only(&self, active: TabId, tabs: &[TabId]) -> Result<(), wry::Error> {
        let mut first_err = None;
        for &tab in tabs {
            let Some(handle) = self.handles.get(&ViewId::Tab(tab)) else {
                continue;
            };
            if let Err(e) = handle.set_visible(tab == active) {
                warn!(tab_id = %tab, error = %e, "set_visible failed");
                first_err.get_or_insert(e);
            }
        }
        first_err.map_or(Ok(()), Err)
    }

    /// Run `f` against the webview for `view`.
    pub fn with_view<T>(
        &self,
        view: ViewId,
        f: impl FnOnce(&WebViewHandle) -> Result<T, wry::Error>,
    ) -> Result<T, WebViewError> {
        let handle = self.handles.get(&view).ok_or(WebViewError::Missing(view))?;
        Ok(f(handle)?)
    }

    pub fn drain_events(&self) -> Vec<WebViewEvent> {
        self.manager.drain_events()
    }

    /// Destroy every webview. Used during shutdown.
    pub fn destroy_all(&mut self) {
        let views: Vec<ViewId> = self.handles.keys().copied().collect();
        for view in views {
            self.destroy(view);
        }
    }
}
