//! Geometry fan-out and the resize-then-switch presentation step.

use lite_common::{Event, TabId, WindowSize};
use tracing::{debug, warn};

use super::Coordinator;
use crate::host::HostError;

impl Coordinator {
    /// Window metrics from the host window, in physical pixels.
    pub async fn set_window_size(&self, width: u32, height: u32, scale_factor: f64) {
        self.set_logical_window_size(WindowSize::from_physical(width, height, scale_factor))
            .await;
    }

    pub async fn set_logical_window_size(&self, size: WindowSize) {
        self.lock().window = size;
        self.sync_layout().await;
    }

    /// Publish sidebar changes and, when the content rect moved, resize
    /// every url-bearing surface to it.
    ///
    /// Resize failures are logged only; the next change corrects them.
    /// A fan-out stops early once a newer layout has been computed.
    pub async fn sync_layout(&self) {
        let (bounds, targets) = {
            let mut s = self.lock();
            let sidebar = s.sidebar_snapshot();
            if s.last_sidebar != Some(sidebar) {
                s.last_sidebar = Some(sidebar);
                self.publish(Event::SidebarChanged(sidebar));
            }

            let bounds = s.geometry(&self.inner.metrics);
            if s.last_geometry == Some(bounds) {
                return;
            }
            s.last_geometry = Some(bounds);
            (bounds, s.registry.url_bearing_ids())
        };

        debug!(?bounds, surfaces = targets.len(), "layout changed");
        for tab in targets {
            let current = self.lock().last_geometry;
            if current != Some(bounds) {
                debug!("layout superseded mid fan-out");
                return;
            }
            if let Err(e) = self.inner.host.resize_surface(tab, bounds).await {
                warn!(tab_id = %tab, error = %e, "resize failed");
            }
        }
    }

    /// Show `target`: resize it to the current geometry when it has a
    /// surface, then switch the host to it.
    pub(super) async fn present(&self, target: TabId) -> Result<(), HostError> {
        let (resize, tabs) = {
            let s = self.lock();
            let bounds = s.geometry(&self.inner.metrics);
            let resize = s
                .registry
                .get(target)
                .filter(|t| t.has_url())
                .map(|_| bounds);
            (resize, s.registry.ids())
        };

        if let Some(bounds) = resize {
            if let Err(e) = self.inner.host.resize_surface(target, bounds).await {
                warn!(tab_id = %target, error = %e, "pre-switch resize failed");
            }
        }
        debug!(tab_id = %target, "switch active surface");
        self.inner.host.switch_active(target, &tabs).await
    }
}
