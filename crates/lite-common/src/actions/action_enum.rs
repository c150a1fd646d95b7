use serde::{Deserialize, Serialize};

/// Every user-triggerable action in the browser shell.
///
/// Keybinds and chrome IPC messages both resolve to an `Action`.
/// The session dispatcher matches on this enum to route to the coordinator.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    // -- Tabs --
    NewTab,
    CloseTab,
    CloseTabId(u32),
    SelectTab(u32),
    NextTab,
    PrevTab,

    // -- Navigation --
    Navigate(String),
    SearchInNewTab(String),
    GoBack,
    GoForward,
    Reload,
    GoHome,

    // -- Chrome --
    FocusAddressBar,
    OpenSearch,
    CloseSearch,
    Escape,
    ToggleSidebar,
    TogglePin,
    SidebarEnter,
    SidebarLeave,

    // -- Window --
    /// Chrome (re)loaded and wants a full snapshot.
    SyncChrome,
    Quit,

    // -- Noop --
    None,
}
