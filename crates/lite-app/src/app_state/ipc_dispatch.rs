//! IPC message validation and dispatch from the chrome to Rust.

use lite_common::Action;
use lite_platform::{normalize_winit_key, KeyCombo, KeybindRegistry};
use lite_webview::{IpcMessage, ViewId};

use crate::app_state::core::LiteApp;

// =============================================================================
// IPC ALLOWLIST
// =============================================================================

/// Allowed IPC message kinds from the chrome.
///
/// Any message with a `kind` not in this list is rejected and logged.
const ALLOWED_IPC_KINDS: &[&str] = &[
    "ready",
    "keybind",
    "navigate",
    "search",
    "new_tab",
    "close_tab",
    "select_tab",
    "go_back",
    "go_forward",
    "reload",
    "go_home",
    "toggle_sidebar",
    "toggle_pin",
    "sidebar_enter",
    "sidebar_leave",
    "open_search",
    "close_search",
    "escape",
    "focus_address_bar",
    "window_minimize",
    "window_maximize",
    "window_close",
    "window_drag",
];

/// Check whether an IPC message kind is in the allowlist.
pub fn is_ipc_kind_allowed(kind: &str) -> bool {
    ALLOWED_IPC_KINDS.contains(&kind)
}

/// Native window operations requested from the custom title bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum WindowControl {
    Minimize,
    ToggleMaximize,
    Close,
    Drag,
}

/// What an allowed chrome message asks for.
#[derive(Debug, Clone, PartialEq)]
pub(super) enum ChromeRequest {
    /// The page loaded; send config and a full snapshot.
    Ready,
    Action(Action),
    Window(WindowControl),
}

/// Translate a chrome message. `None` means malformed or unbound.
pub(super) fn route_message(msg: &IpcMessage, keybinds: &KeybindRegistry) -> Option<ChromeRequest> {
    let action = match msg.kind.as_str() {
        "ready" => return Some(ChromeRequest::Ready),
        "window_minimize" => return Some(ChromeRequest::Window(WindowControl::Minimize)),
        "window_maximize" => return Some(ChromeRequest::Window(WindowControl::ToggleMaximize)),
        "window_close" => return Some(ChromeRequest::Window(WindowControl::Close)),
        "window_drag" => return Some(ChromeRequest::Window(WindowControl::Drag)),
        "keybind" => keybind_action(msg, keybinds)?,
        "navigate" => Action::Navigate(msg.payload.as_text()?.to_string()),
        "search" => Action::SearchInNewTab(msg.payload.as_text()?.to_string()),
        "new_tab" => Action::NewTab,
        // No id closes the active tab.
        "close_tab" => match msg.payload.as_u32() {
            Some(id) => Action::CloseTabId(id),
            None => Action::CloseTab,
        },
        "select_tab" => Action::SelectTab(msg.payload.as_u32()?),
        "go_back" => Action::GoBack,
        "go_forward" => Action::GoForward,
        "reload" => Action::Reload,
        "go_home" => Action::GoHome,
        "toggle_sidebar" => Action::ToggleSidebar,
        "toggle_pin" => Action::TogglePin,
        "sidebar_enter" => Action::SidebarEnter,
        "sidebar_leave" => Action::SidebarLeave,
        "open_search" => Action::OpenSearch,
        "close_search" => Action::CloseSearch,
        "escape" => Action::Escape,
        "focus_address_bar" => Action::FocusAddressBar,
        _ => return None,
    };
    Some(ChromeRequest::Action(action))
}

/// Resolve a forwarded DOM keydown through the keybind registry.
fn keybind_action(msg: &IpcMessage, keybinds: &KeybindRegistry) -> Option<Action> {
    let key = msg.payload.field("key")?.as_str()?;
    let flag = |name: &str| {
        msg.payload
            .field(name)
            .and_then(serde_json::Value::as_bool)
            .unwrap_or(false)
    };
    let combo = KeyCombo::from_winit(
        flag("ctrl"),
        flag("alt"),
        flag("shift"),
        flag("meta"),
        normalize_winit_key(key),
    );
    keybinds.lookup(&combo).cloned()
}

// =============================================================================
// DISPATCH
// =============================================================================

impl LiteApp {
    /// Handle a single IPC message from a webview.
    pub(in crate::app_state) fn handle_ipc_message(&mut self, view: ViewId, body: &str) {
        if view != ViewId::Chrome {
            tracing::warn!(%view, "IPC message rejected: not from the chrome");
            return;
        }

        let msg = match IpcMessage::from_json(body) {
            Some(m) => m,
            None => {
                tracing::warn!(body_len = body.len(), "IPC message rejected: failed to parse");
                return;
            }
        };

        if !is_ipc_kind_allowed(&msg.kind) {
            tracing::warn!(kind = %msg.kind, "IPC message rejected: unknown kind");
            return;
        }

        tracing::debug!(kind = %msg.kind, "IPC message dispatched");

        match route_message(&msg, &self.registry) {
            Some(ChromeRequest::Ready) => {
                self.chrome_ready = true;
                self.push_chrome_config();
                self.send_session(Action::SyncChrome);
            }
            Some(ChromeRequest::Action(action)) => self.dispatch_action(action),
            Some(ChromeRequest::Window(control)) => self.handle_window_control(control),
            None => {
                tracing::debug!(kind = %msg.kind, "IPC message ignored: bad payload or unbound key");
            }
        }
    }

    fn handle_window_control(&mut self, control: WindowControl) {
        if control == WindowControl::Close {
            self.should_exit = true;
            return;
        }
        let Some(ref window) = self.window else {
            return;
        };
        match control {
            WindowControl::Minimize => window.set_minimized(true),
            WindowControl::ToggleMaximize => window.set_maximized(!window.is_maximized()),
            WindowControl::Drag => {
                if let Err(e) = window.drag_window() {
                    tracing::debug!(error = %e, "Window drag refused");
                }
            }
            WindowControl::Close => {}
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
