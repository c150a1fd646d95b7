//! Sidebar visibility state machine.
//!
//! Holds the raw `visible`/`pinned` flags, the transient search overlay,
//! and the pending hide timer. The timer itself lives in the coordinator;
//! here it is only a token, so at most one can be pending and any
//! expiry carrying an old token is ignored.

#[cfg(test)]
mod tests;

use lite_common::SidebarSnapshot;

/// Identifies one scheduled hide.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HideToken(u64);

/// What [`SidebarState::escape`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EscapeOutcome {
    ClosedSearch,
    Hid,
    Ignored,
}

#[derive(Debug, Clone, Default)]
pub struct SidebarState {
    visible: bool,
    pinned: bool,
    search_open: bool,
    pending_hide: Option<HideToken>,
    issued: u64,
}

impl SidebarState {
    pub fn new(visible: bool, pinned: bool) -> Self {
        Self {
            visible,
            pinned,
            ..Self::default()
        }
    }

    pub fn visible(&self) -> bool {
        self.visible
    }

    pub fn pinned(&self) -> bool {
        self.pinned
    }

    pub fn search_open(&self) -> bool {
        self.search_open
    }

    pub fn hide_pending(&self) -> bool {
        self.pending_hide.is_some()
    }

    /// `visible || pinned || active tab is on the welcome page`.
    pub fn effective(&self, active_has_url: bool) -> bool {
        self.visible || self.pinned || !active_has_url
    }

    pub fn snapshot(&self, active_has_url: bool) -> SidebarSnapshot {
        SidebarSnapshot {
            visible: self.visible,
            pinned: self.pinned,
            effective: self.effective(active_has_url),
        }
    }

    /// Drop any pending hide. No-op if none is pending.
    pub fn cancel_hide(&mut self) {
        self.pending_hide = None;
    }

    /// Pointer entered the sidebar zone.
    pub fn enter(&mut self) {
        self.show();
    }

    /// Force `Visible`, cancelling any pending hide.
    pub fn show(&mut self) {
        self.cancel_hide();
        self.visible = true;
    }

    /// Pointer left the sidebar zone.
    ///
    /// Returns a token to fire after the hide delay, replacing any earlier
    /// one, or `None` when the sidebar must stay open.
    pub fn leave(&mut self, active_has_url: bool) -> Option<HideToken> {
        self.cancel_hide();
        if self.pinned || !active_has_url {
            return None;
        }
        self.issued += 1;
        let token = HideToken(self.issued);
        self.pending_hide = Some(token);
        Some(token)
    }

    /// The hide delay for `token` elapsed. Returns whether it took effect.
    pub fn hide_expired(&mut self, token: HideToken) -> bool {
        if self.pending_hide != Some(token) {
            return false;
        }
        self.pending_hide = None;
        self.visible = false;
        true
    }

    /// Keyboard/menu toggle.
    pub fn toggle(&mut self) {
        self.cancel_hide();
        self.visible = !self.visible;
    }

    /// Flip the pin. Pinning clears a pending hide.
    pub fn toggle_pin(&mut self) {
        self.pinned = !self.pinned;
        if self.pinned {
            self.cancel_hide();
        }
    }

    /// Collapse after a successful navigation unless pinned.
    pub fn collapse_after_navigation(&mut self) -> bool {
        if self.pinned {
            return false;
        }
        self.cancel_hide();
        self.visible = false;
        true
    }

    /// Escape closes the search overlay first, then hides an unpinned
    /// sidebar over a live page.
    pub fn escape(&mut self, active_has_url: bool) -> EscapeOutcome {
        if self.search_open {
            self.search_open = false;
            return EscapeOutcome::ClosedSearch;
        }
        if self.pinned || !active_has_url {
            return EscapeOutcome::Ignored;
        }
        self.cancel_hide();
        self.visible = false;
        EscapeOutcome::Hid
    }

    /// Returns whether the flag changed.
    pub fn set_search_open(&mut self, open: bool) -> bool {
        std::mem::replace(&mut self.search_open, open) != open
    }
}
