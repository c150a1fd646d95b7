//! Tab creation, closing, and selection.

use lite_common::{Event, TabId};
use tracing::{debug, info, warn};

use super::{Coordinator, CoordinatorError};
use crate::registry::CloseOutcome;

impl Coordinator {
    /// Open an empty tab, make it active, and show the welcome page.
    pub async fn new_tab(&self) -> Result<TabId, CoordinatorError> {
        let id = {
            let mut s = self.lock();
            let id = s.registry.create_tab();
            s.registry.select_tab(id)?;
            s.sidebar.show();
            if let Some(tab) = s.registry.get(id) {
                self.publish(Event::TabOpened(tab.snapshot()));
            }
            self.publish(Event::TabActivated(id));
            id
        };
        self.cancel_hide_task();
        info!(tab_id = %id, "opened tab");

        self.sync_layout().await;
        self.present(id).await?;
        Ok(id)
    }

    /// Close a tab. The surface goes first so the host never renders a
    /// tab the registry no longer has. Closing the only tab resets it.
    ///
    /// A navigation that starts while `closeSurface` is pending may build
    /// a new surface; the close is then issued again once the tab is gone.
    pub async fn close_tab(&self, id: TabId) -> Result<(), CoordinatorError> {
        let seq = {
            let mut s = self.lock();
            if !s.registry.contains(id) {
                return Err(CoordinatorError::NotFound(id));
            }
            // Any navigation still in flight for this tab is now stale.
            let seq = s.next_nav_seq();
            if let Some(tab) = s.registry.get_mut(id) {
                tab.nav_seq = seq;
            }
            seq
        };

        self.close_surface_best_effort(id).await;

        let (new_active, reclose) = {
            let mut s = self.lock();
            let reclose = s.registry.get(id).is_some_and(|t| t.nav_seq != seq);
            let fresh = s.next_nav_seq();
            if let Some(tab) = s.registry.get_mut(id) {
                tab.nav_seq = fresh;
            }
            let new_active = match s.registry.close_tab(id)? {
                CloseOutcome::Reset => {
                    if let Some(tab) = s.registry.get(id) {
                        self.publish(Event::TabUpdated(tab.snapshot()));
                    }
                    None
                }
                CloseOutcome::Removed { new_active } => {
                    self.publish(Event::TabClosed(id));
                    if let Some(next) = new_active {
                        self.publish(Event::TabActivated(next));
                    }
                    new_active
                }
            };
            (new_active, reclose)
        };
        if reclose {
            debug!(tab_id = %id, "navigation raced the close; closing again");
            self.close_surface_best_effort(id).await;
        }
        info!(tab_id = %id, "closed tab");

        self.sync_layout().await;
        if let Some(next) = new_active {
            self.present(next).await?;
        }
        Ok(())
    }

    /// Make `id` the active tab and show its surface.
    pub async fn switch_tab(&self, id: TabId) -> Result<(), CoordinatorError> {
        {
            let mut s = self.lock();
            s.registry.select_tab(id)?;
            self.publish(Event::TabActivated(id));
        }
        debug!(tab_id = %id, "switched tab");

        self.sync_layout().await;
        self.present(id).await?;
        Ok(())
    }

    pub async fn select_next_tab(&self) -> Result<(), CoordinatorError> {
        let id = self.lock().registry.neighbor_of_active(1);
        self.switch_tab(id).await
    }

    pub async fn select_prev_tab(&self) -> Result<(), CoordinatorError> {
        let id = self.lock().registry.neighbor_of_active(-1);
        self.switch_tab(id).await
    }

    /// `closeSurface` is idempotent on the host; failures are only logged.
    pub(super) async fn close_surface_best_effort(&self, id: TabId) {
        debug!(tab_id = %id, "close surface");
        if let Err(e) = self.inner.host.close_surface(id).await {
            warn!(tab_id = %id, error = %e, "close surface failed");
        }
    }
}
