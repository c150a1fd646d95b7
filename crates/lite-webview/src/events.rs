//! WebView identifiers and event types.

use std::fmt;

use lite_common::TabId;
use serde::{Deserialize, Serialize};

/// Which native webview an event or command refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ViewId {
    /// The shell UI: title bar, sidebar, welcome page, search overlay.
    Chrome,
    /// The content surface of one tab.
    Tab(TabId),
}

impl fmt::Display for ViewId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViewId::Chrome => f.write_str("chrome"),
            ViewId::Tab(id) => id.fmt(f),
        }
    }
}

/// State of a page load lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PageLoadState {
    /// Navigation has started.
    Started,
    /// Page has fully loaded.
    Finished,
}

impl From<wry::PageLoadEvent> for PageLoadState {
    fn from(e: wry::PageLoadEvent) -> Self {
        match e {
            wry::PageLoadEvent::Started => Self::Started,
            wry::PageLoadEvent::Finished => Self::Finished,
        }
    }
}

/// Events emitted by a webview.
#[derive(Debug, Clone)]
pub enum WebViewEvent {
    PageLoad {
        view: ViewId,
        state: PageLoadState,
        url: String,
    },
    TitleChanged {
        view: ViewId,
        title: String,
    },
    /// Raw JSON body posted by the chrome.
    IpcMessage {
        view: ViewId,
        body: String,
    },
    NavigationRequested {
        view: ViewId,
        url: String,
    },
    Closed {
        view: ViewId,
    },
}
