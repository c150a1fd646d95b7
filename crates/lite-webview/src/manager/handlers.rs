use std::sync::{Arc, Mutex};

use tracing::{debug, warn};
use wry::WebViewBuilder;

use crate::events::{PageLoadState, ViewId, WebViewEvent};

use super::types::NavigationPolicy;
use super::WebViewManager;

// =============================================================================
// NAVIGATION POLICY
// =============================================================================

/// Url prefixes a tab may load.
const BROWSING_PREFIXES: &[&str] = &["https://", "http://", "about:blank"];

/// The chrome is inline HTML; it only ever sits on `about:blank`.
const CHROME_PREFIXES: &[&str] = &["about:blank"];

/// Check whether `url` may be loaded under `policy`.
pub fn is_navigation_allowed(policy: NavigationPolicy, url: &str) -> bool {
    let prefixes = match policy {
        NavigationPolicy::Chrome => CHROME_PREFIXES,
        NavigationPolicy::Browsing => BROWSING_PREFIXES,
    };
    let url = url.trim_start();
    prefixes.iter().any(|prefix| {
        url.get(..prefix.len())
            .is_some_and(|head| head.eq_ignore_ascii_case(prefix))
    })
}

// =============================================================================
// HANDLER ATTACHMENTS
// =============================================================================

fn push(events: &Mutex<Vec<WebViewEvent>>, event: WebViewEvent) {
    if let Ok(mut evts) = events.lock() {
        evts.push(event);
    }
}

impl WebViewManager {
    pub(super) fn attach_ipc_handler<'a>(
        builder: WebViewBuilder<'a>,
        events: Arc<Mutex<Vec<WebViewEvent>>>,
        view: ViewId,
    ) -> WebViewBuilder<'a> {
        builder.with_ipc_handler(move |request| {
            let body = request.body().to_string();

            if serde_json::from_str::<serde_json::Value>(&body).is_err() {
                warn!(%view, body_len = body.len(), "IPC message rejected: invalid JSON");
                return;
            }

            debug!(%view, body_len = body.len(), "IPC message from JS");
            push(&events, WebViewEvent::IpcMessage { view, body });
        })
    }

    pub(super) fn attach_page_load_handler<'a>(
        builder: WebViewBuilder<'a>,
        events: Arc<Mutex<Vec<WebViewEvent>>>,
        view: ViewId,
    ) -> WebViewBuilder<'a> {
        builder.with_on_page_load_handler(move |event, url| {
            let state = PageLoadState::from(event);
            debug!(%view, ?state, url = %url, "page load");
            push(&events, WebViewEvent::PageLoad { view, state, url });
        })
    }

    pub(super) fn attach_title_handler<'a>(
        builder: WebViewBuilder<'a>,
        events: Arc<Mutex<Vec<WebViewEvent>>>,
        view: ViewId,
    ) -> WebViewBuilder<'a> {
        builder.with_document_title_changed_handler(move |title| {
            push(&events, WebViewEvent::TitleChanged { view, title });
        })
    }

    pub(super) fn attach_navigation_handler<'a>(
        builder: WebViewBuilder<'a>,
        events: Arc<Mutex<Vec<WebViewEvent>>>,
        view: ViewId,
        policy: NavigationPolicy,
    ) -> WebViewBuilder<'a> {
        builder.with_navigation_handler(move |url| {
            if !is_navigation_allowed(policy, &url) {
                warn!(%view, url = %url, "navigation blocked");
                return false;
            }
            push(&events, WebViewEvent::NavigationRequested { view, url });
            true
        })
    }
}

// =============================================================================
// TESTS
// =============================================================================
