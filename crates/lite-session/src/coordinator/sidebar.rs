//! Sidebar, search overlay, and the debounced hide timer.

use lite_common::Event;
use tracing::debug;

use super::Coordinator;
use crate::sidebar::{EscapeOutcome, HideToken};

impl Coordinator {
    pub async fn toggle_sidebar(&self) {
        self.lock().sidebar.toggle();
        self.cancel_hide_task();
        self.sync_layout().await;
    }

    pub async fn toggle_pin(&self) {
        let pinned = {
            let mut s = self.lock();
            s.sidebar.toggle_pin();
            s.sidebar.pinned()
        };
        if pinned {
            self.cancel_hide_task();
        }
        self.sync_layout().await;
    }

    pub async fn sidebar_enter(&self) {
        self.lock().sidebar.enter();
        self.cancel_hide_task();
        self.sync_layout().await;
    }

    /// Start the hide delay, replacing any pending one.
    pub fn sidebar_leave(&self) {
        let token = {
            let mut s = self.lock();
            let has_url = s.active_has_url();
            s.sidebar.leave(has_url)
        };
        match token {
            Some(token) => self.schedule_hide(token),
            None => self.cancel_hide_task(),
        }
    }

    /// Close the search overlay, or else hide an unpinned sidebar.
    pub async fn escape(&self) {
        let outcome = {
            let mut s = self.lock();
            let has_url = s.active_has_url();
            s.sidebar.escape(has_url)
        };
        match outcome {
            EscapeOutcome::ClosedSearch => self.publish(Event::SearchOverlay { open: false }),
            EscapeOutcome::Hid => {
                self.cancel_hide_task();
                self.sync_layout().await;
            }
            EscapeOutcome::Ignored => {}
        }
    }

    /// Reveal the sidebar so the address bar can take focus.
    pub async fn focus_address_bar(&self) {
        self.lock().sidebar.show();
        self.cancel_hide_task();
        self.sync_layout().await;
        self.publish(Event::FocusAddressBar);
    }

    pub fn open_search(&self) {
        self.set_search_open(true);
    }

    pub fn close_search(&self) {
        self.set_search_open(false);
    }

    fn set_search_open(&self, open: bool) {
        let changed = self.lock().sidebar.set_search_open(open);
        if changed {
            self.publish(Event::SearchOverlay { open });
        }
    }

    fn schedule_hide(&self, token: HideToken) {
        let this = self.clone();
        let delay = self.inner.hide_delay;
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            this.hide_expired(token);
        });
        let previous = self.hide_slot().replace(handle);
        if let Some(previous) = previous {
            previous.abort();
        }
    }

    /// Runs inside the timer task with no await before the layout task is
    /// spawned, so aborting the timer can only ever cancel the sleep.
    fn hide_expired(&self, token: HideToken) {
        let fired = self.lock().sidebar.hide_expired(token);
        if !fired {
            return;
        }
        debug!("sidebar auto-hidden");
        let this = self.clone();
        tokio::spawn(async move { this.sync_layout().await });
    }

    pub(super) fn cancel_hide_task(&self) {
        if let Some(handle) = self.hide_slot().take() {
            handle.abort();
        }
    }

    fn hide_slot(&self) -> std::sync::MutexGuard<'_, Option<tokio::task::JoinHandle<()>>> {
        self.inner
            .hide_task
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}
