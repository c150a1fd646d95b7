//! The single owned session aggregate.

use lite_common::{Rect, SessionSnapshot, SidebarSnapshot, WindowSize};

use crate::geometry::ChromeMetrics;
use crate::registry::TabRegistry;
use crate::sidebar::SidebarState;

/// Tabs, sidebar, and the last layout pushed to the host.
#[derive(Debug, Clone)]
pub struct Session {
    pub registry: TabRegistry,
    pub sidebar: SidebarState,
    pub window: WindowSize,
    /// Geometry most recently fanned out to surfaces.
    pub(crate) last_geometry: Option<Rect>,
    pub(crate) last_sidebar: Option<SidebarSnapshot>,
    nav_counter: u64,
}

impl Session {
    pub fn new(window: WindowSize, sidebar: SidebarState) -> Self {
        Self {
            registry: TabRegistry::new(),
            sidebar,
            window,
            last_geometry: None,
            last_sidebar: None,
            nav_counter: 0,
        }
    }

    pub fn active_has_url(&self) -> bool {
        self.registry.find_active().has_url()
    }

    pub fn effective_sidebar(&self) -> bool {
        self.sidebar.effective(self.active_has_url())
    }

    pub fn sidebar_snapshot(&self) -> SidebarSnapshot {
        self.sidebar.snapshot(self.active_has_url())
    }

    pub fn geometry(&self, metrics: &ChromeMetrics) -> Rect {
        metrics.resolve(self.window, self.effective_sidebar())
    }

    pub fn last_geometry(&self) -> Option<Rect> {
        self.last_geometry
    }

    /// Session-wide so that a reused tab id never matches a stale number.
    pub(crate) fn next_nav_seq(&mut self) -> u64 {
        self.nav_counter += 1;
        self.nav_counter
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            tabs: self.registry.iter().map(|t| t.snapshot()).collect(),
            active: self.registry.active_id(),
            sidebar: self.sidebar_snapshot(),
            search_open: self.sidebar.search_open(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lite_common::TabId;

    fn session() -> Session {
        Session::new(WindowSize::new(1200.0, 800.0), SidebarState::new(false, false))
    }

    #[test]
    fn welcome_tab_forces_sidebar_into_geometry() {
        let s = session();
        assert!(s.effective_sidebar());
        assert_eq!(s.geometry(&ChromeMetrics::default()).x, 260.0);
    }

    #[test]
    fn live_tab_with_hidden_sidebar_uses_full_width() {
        let mut s = session();
        s.registry.get_mut(TabId(1)).unwrap().url = Some("https://a.test/".into());
        assert!(!s.effective_sidebar());
        assert_eq!(s.geometry(&ChromeMetrics::default()).width, 1200.0);
    }

    #[test]
    fn nav_seq_is_monotonic() {
        let mut s = session();
        let a = s.next_nav_seq();
        let b = s.next_nav_seq();
        assert!(b > a);
    }

    #[test]
    fn snapshot_lists_tabs_in_order() {
        let mut s = session();
        s.registry.create_tab();
        let snap = s.snapshot();
        assert_eq!(snap.tabs.len(), 2);
        assert_eq!(snap.tabs[1].id, TabId(2));
        assert_eq!(snap.active, TabId(1));
        assert!(snap.sidebar.effective);
    }
}
