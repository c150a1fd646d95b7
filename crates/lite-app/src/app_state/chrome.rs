//! The chrome webview: title bar, sidebar, welcome page, search overlay.
//!
//! Session events are forwarded to it as `event` IPC messages, serialized
//! in the bus's `{"type", "data"}` form.

use tokio::sync::broadcast::error::TryRecvError;

use lite_common::{Action, Event, Rect, WindowSize};
use lite_webview::{rect_to_wry, ViewId};

use super::core::LiteApp;

pub(super) const CHROME_HTML: &str = include_str!("../../assets/chrome.html");

impl LiteApp {
    /// The whole inner window, in logical pixels.
    pub(super) fn chrome_bounds(&self) -> Rect {
        let size = match &self.window {
            Some(w) => {
                let inner = w.inner_size();
                WindowSize::from_physical(inner.width, inner.height, w.scale_factor())
            }
            None => WindowSize::new(
                f64::from(self.config.window.width),
                f64::from(self.config.window.height),
            ),
        };
        Rect {
            x: 0.0,
            y: 0.0,
            width: size.width,
            height: size.height,
        }
    }

    pub(super) fn resize_chrome(&self) {
        let bounds = rect_to_wry(&self.chrome_bounds());
        if let Some(ref registry) = self.webviews {
            if let Err(e) = registry.set_bounds(ViewId::Chrome, bounds) {
                tracing::warn!(error = %e, "Failed to resize chrome");
            }
        }
    }

    /// Send an IPC message to the chrome.
    pub(super) fn send_to_chrome(&self, kind: &str, payload: &serde_json::Value) {
        let Some(ref registry) = self.webviews else {
            return;
        };
        if let Some(handle) = registry.get(ViewId::Chrome) {
            if let Err(e) = handle.send_ipc(kind, payload) {
                tracing::warn!(kind, error = %e, "Failed to send IPC to chrome");
            }
        }
    }

    /// Push chrome metrics and title. Sent once the page reports ready.
    pub(super) fn push_chrome_config(&self) {
        let payload = serde_json::json!({
            "title": self.config.window.title,
            "titlebar_height": self.config.window.titlebar_height,
            "sidebar_width": self.config.sidebar.width,
        });
        self.send_to_chrome("config", &payload);
    }

    /// Drain the session event bus into the chrome.
    ///
    /// Events published before the chrome is ready are dropped; it asks
    /// for a full snapshot when it loads.
    pub(super) fn forward_session_events(&mut self) {
        let mut resync = false;
        let mut closed = false;
        let mut outgoing = Vec::new();
        if let Some(ref mut rx) = self.session_events {
            loop {
                match rx.try_recv() {
                    Ok(Event::Shutdown | Event::Unknown) => {}
                    Ok(event) => outgoing.push(event),
                    Err(TryRecvError::Empty) => break,
                    Err(TryRecvError::Lagged(missed)) => {
                        tracing::warn!(missed, "Chrome fell behind the session; resyncing");
                        resync = true;
                    }
                    Err(TryRecvError::Closed) => {
                        closed = true;
                        break;
                    }
                }
            }
        }
        if closed {
            self.session_events = None;
        }

        if !self.chrome_ready {
            return;
        }
        for event in &outgoing {
            match serde_json::to_value(event) {
                Ok(payload) => self.send_to_chrome("event", &payload),
                Err(e) => tracing::warn!(error = %e, "Failed to serialize session event"),
            }
        }
        if resync {
            self.send_session(Action::SyncChrome);
        }
    }
}
