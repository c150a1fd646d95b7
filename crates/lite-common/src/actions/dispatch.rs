use super::Action;

impl Action {
    /// Human-readable label for menus and tooltips.
    pub fn label(&self) -> &'static str {
        match self {
            Action::NewTab => "New Tab",
            Action::CloseTab => "Close Tab",
            Action::CloseTabId(_) => "Close Tab",
            Action::SelectTab(_) => "Select Tab",
            Action::NextTab => "Next Tab",
            Action::PrevTab => "Previous Tab",
            Action::Navigate(_) => "Go",
            Action::SearchInNewTab(_) => "Search in New Tab",
            Action::GoBack => "Back",
            Action::GoForward => "Forward",
            Action::Reload => "Reload",
            Action::GoHome => "Home",
            Action::FocusAddressBar => "Focus Address Bar",
            Action::OpenSearch => "Search",
            Action::CloseSearch => "Close Search",
            Action::Escape => "Escape",
            Action::ToggleSidebar => "Toggle Sidebar",
            Action::TogglePin => "Pin Sidebar",
            Action::SidebarEnter => "Sidebar Enter",
            Action::SidebarLeave => "Sidebar Leave",
            Action::SyncChrome => "Sync Chrome",
            Action::Quit => "Quit",
            Action::None => "None",
        }
    }

    /// Whether this action is a best-effort history command on the active surface.
    pub fn is_history(&self) -> bool {
        matches!(self, Action::GoBack | Action::GoForward | Action::Reload)
    }

    /// Actions offered in the window menu.
    pub fn menu_actions() -> Vec<Action> {
        vec![
            Action::NewTab,
            Action::CloseTab,
            Action::NextTab,
            Action::PrevTab,
            Action::GoBack,
            Action::GoForward,
            Action::Reload,
            Action::GoHome,
            Action::FocusAddressBar,
            Action::OpenSearch,
            Action::ToggleSidebar,
            Action::TogglePin,
            Action::Quit,
        ]
    }
}
