use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

use crate::types::TabId;

/// Presentation view of one tab.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TabSnapshot {
    pub id: TabId,
    pub title: String,
    pub url: Option<String>,
    /// A navigation is in flight.
    #[serde(default)]
    pub loading: bool,
}

/// Presentation view of the sidebar flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SidebarSnapshot {
    pub visible: bool,
    pub pinned: bool,
    /// `visible || pinned || active tab has no url`.
    pub effective: bool,
}

/// Everything the chrome needs to redraw from scratch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub tabs: Vec<TabSnapshot>,
    pub active: TabId,
    pub sidebar: SidebarSnapshot,
    pub search_open: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum Event {
    TabOpened(TabSnapshot),
    TabUpdated(TabSnapshot),
    TabClosed(TabId),
    TabActivated(TabId),
    NavigationStarted { tab_id: TabId, input: String },
    NavigationFailed { tab_id: TabId, error: String },
    SidebarChanged(SidebarSnapshot),
    FocusAddressBar,
    SearchOverlay { open: bool },
    Snapshot(SessionSnapshot),
    Shutdown,
    #[serde(other)]
    Unknown,
}

pub struct EventBus {
    sender: broadcast::Sender<Event>,
}

impl EventBus {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<Event> {
        self.sender.subscribe()
    }

    pub fn publish(&self, event: Event) -> usize {
        self.sender.send(event).unwrap_or(0)
    }
}

impl Clone for EventBus {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
        }
    }
}
