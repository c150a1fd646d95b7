//! Navigation, search-in-new-tab, and go-home.
//!
//! Each navigation takes a session-wide sequence number and stamps it on
//! its tab. After every host call the stamp is compared again: if the
//! tab is gone or carries a newer stamp the result is dropped.

use lite_common::{Event, TabId};
use tracing::{debug, error, info};

use super::{Coordinator, CoordinatorError, NavigateOutcome};
use crate::registry::{Tab, TabState};
use crate::session::Session;

fn staleness(s: &Session, tab: TabId, seq: u64) -> Option<NavigateOutcome> {
    match s.registry.get(tab) {
        None => Some(NavigateOutcome::TabGone),
        Some(t) if t.nav_seq != seq => Some(NavigateOutcome::Superseded),
        Some(_) => None,
    }
}

impl Coordinator {
    /// Resolve `input` and show it in `tab`.
    ///
    /// Sequence: resolve, record url, `createSurface`, resize and
    /// `switchActive` for the active tab, then collapse the sidebar unless
    /// pinned. A resolver or host failure restores the tab and is
    /// returned; the welcome page stays up.
    pub async fn navigate(
        &self,
        tab: TabId,
        input: &str,
    ) -> Result<NavigateOutcome, CoordinatorError> {
        if input.trim().is_empty() {
            return Err(CoordinatorError::UnresolvableInput(input.to_string()));
        }

        let Some((seq, prior)) = self.begin_navigation(tab, input) else {
            debug!(tab_id = %tab, "navigate on unknown tab ignored");
            return Ok(NavigateOutcome::TabGone);
        };

        let url = match self.inner.host.resolve_input(input).await {
            Ok(Some(url)) => url,
            Ok(None) => {
                let err = CoordinatorError::UnresolvableInput(input.to_string());
                return self.fail_navigation(tab, seq, prior, err).await;
            }
            Err(e) => return self.fail_navigation(tab, seq, prior, e.into()).await,
        };

        let bounds = {
            let mut s = self.lock();
            if let Some(outcome) = staleness(&s, tab, seq) {
                return Ok(outcome);
            }
            if let Some(t) = s.registry.get_mut(tab) {
                t.url = Some(url.clone());
                t.title = url.clone();
                self.publish(Event::TabUpdated(t.snapshot()));
            }
            s.geometry(&self.inner.metrics)
        };

        debug!(tab_id = %tab, %url, seq, "create surface");
        if let Err(e) = self.inner.host.create_surface(tab, &url, bounds).await {
            return self.fail_navigation(tab, seq, prior, e.into()).await;
        }

        let acked = {
            let mut s = self.lock();
            match staleness(&s, tab, seq) {
                Some(outcome) => {
                    let orphaned = match s.registry.get_mut(tab) {
                        None => true,
                        // The newer navigation replaces this surface, or
                        // closes it if it fails.
                        Some(t) if t.state == TabState::Loading => {
                            t.stray_surface = true;
                            false
                        }
                        Some(t) => !t.has_url(),
                    };
                    Err((outcome, orphaned))
                }
                None => {
                    if let Some(t) = s.registry.get_mut(tab) {
                        t.state = TabState::Live;
                        t.stray_surface = false;
                        self.publish(Event::TabUpdated(t.snapshot()));
                    }
                    Ok(s.registry.active_id())
                }
            }
        };
        let active = match acked {
            Ok(active) => active,
            Err((outcome, orphaned)) => {
                if orphaned {
                    // Closed or sent home while the surface was being made.
                    self.close_surface_best_effort(tab).await;
                }
                return Ok(outcome);
            }
        };

        if let Err(e) = self.present(active).await {
            self.publish(Event::NavigationFailed {
                tab_id: tab,
                error: e.to_string(),
            });
            error!(tab_id = %tab, error = %e, "switch after navigation failed");
            return Err(e.into());
        }

        let collapsed = {
            let mut s = self.lock();
            if let Some(outcome) = staleness(&s, tab, seq) {
                return Ok(outcome);
            }
            s.sidebar.collapse_after_navigation()
        };
        if collapsed {
            self.cancel_hide_task();
        }
        self.sync_layout().await;

        info!(tab_id = %tab, %url, "navigation complete");
        Ok(NavigateOutcome::Live)
    }

    /// Stamp a new sequence number on `tab` and mark it loading.
    fn begin_navigation(&self, tab: TabId, input: &str) -> Option<(u64, Tab)> {
        let mut s = self.lock();
        if !s.registry.contains(tab) {
            return None;
        }
        let seq = s.next_nav_seq();
        let t = s.registry.get_mut(tab)?;
        let prior = t.clone();
        t.nav_seq = seq;
        t.state = TabState::Loading;
        self.publish(Event::TabUpdated(t.snapshot()));
        self.publish(Event::NavigationStarted {
            tab_id: tab,
            input: input.to_string(),
        });
        Some((seq, prior))
    }

    /// Restore the tab's page as it was before this navigation, unless a
    /// newer operation owns it by now.
    ///
    /// The state follows the restored url and is never `Loading`: an
    /// older navigation that was in flight has been superseded by this one.
    async fn fail_navigation(
        &self,
        tab: TabId,
        seq: u64,
        prior: Tab,
        err: CoordinatorError,
    ) -> Result<NavigateOutcome, CoordinatorError> {
        let close_stray = {
            let mut s = self.lock();
            if let Some(outcome) = staleness(&s, tab, seq) {
                debug!(tab_id = %tab, error = %err, "stale navigation failure dropped");
                return Ok(outcome);
            }
            match s.registry.get_mut(tab) {
                Some(t) => {
                    t.url = prior.url;
                    t.title = prior.title;
                    t.state = if t.has_url() {
                        TabState::Live
                    } else {
                        TabState::Empty
                    };
                    let stray = std::mem::take(&mut t.stray_surface);
                    self.publish(Event::TabUpdated(t.snapshot()));
                    stray && !t.has_url()
                }
                None => false,
            }
        };
        if close_stray {
            debug!(tab_id = %tab, "closing surface left by a superseded navigation");
            self.close_surface_best_effort(tab).await;
        }
        self.publish(Event::NavigationFailed {
            tab_id: tab,
            error: err.to_string(),
        });
        error!(tab_id = %tab, error = %err, "navigation failed");

        // Another operation may have laid out against the provisional url.
        self.sync_layout().await;
        Err(err)
    }

    /// Open a new tab and navigate it. Blank input opens nothing.
    pub async fn search_in_new_tab(
        &self,
        input: &str,
    ) -> Result<NavigateOutcome, CoordinatorError> {
        self.close_search();
        if input.trim().is_empty() {
            return Err(CoordinatorError::UnresolvableInput(input.to_string()));
        }
        let id = self.new_tab().await?;
        self.navigate(id, input).await
    }

    /// Tear down `tab`'s surface and return it to the welcome page.
    ///
    /// The tab is reset before `closeSurface` is issued, so a navigation
    /// started while the close is pending begins from the welcome state
    /// and owns the tab afterwards.
    pub async fn go_home(&self, tab: TabId) -> Result<(), CoordinatorError> {
        let seq = {
            let mut s = self.lock();
            let seq = s.next_nav_seq();
            let Some(t) = s.registry.get_mut(tab) else {
                return Err(CoordinatorError::NotFound(tab));
            };
            t.nav_seq = seq;
            t.reset();
            self.publish(Event::TabUpdated(t.snapshot()));
            seq
        };

        self.close_surface_best_effort(tab).await;

        {
            let mut s = self.lock();
            if staleness(&s, tab, seq).is_some() {
                debug!(tab_id = %tab, "tab navigated or closed while going home");
                return Ok(());
            }
            s.sidebar.show();
        }
        self.cancel_hide_task();
        info!(tab_id = %tab, "went home");

        self.sync_layout().await;
        Ok(())
    }
}
