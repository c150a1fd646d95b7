//! Polling for surface requests, webview events, and session events.

use std::time::Instant;

use winit::event_loop::ActiveEventLoop;

use lite_webview::{PageLoadState, WebViewEvent};

use super::core::LiteApp;
use super::types::POLL_INTERVAL;

impl LiteApp {
    /// Run polling and schedule the next wake-up.
    pub(super) fn poll_and_schedule(&mut self, event_loop: &ActiveEventLoop) {
        let now = Instant::now();

        if now.duration_since(self.last_poll) >= POLL_INTERVAL {
            self.last_poll = now;
            self.poll_surface_requests();
            self.poll_webview_events();
            self.forward_session_events();
        }

        event_loop.set_control_flow(winit::event_loop::ControlFlow::WaitUntil(
            Instant::now() + POLL_INTERVAL,
        ));
    }

    /// Drain webview callbacks queued since the last poll.
    pub(super) fn poll_webview_events(&mut self) {
        let events = match self.webviews {
            Some(ref registry) => registry.drain_events(),
            None => return,
        };

        for event in events {
            match event {
                WebViewEvent::IpcMessage { view, body } => {
                    self.handle_ipc_message(view, &body);
                }
                WebViewEvent::PageLoad { view, state, url } => match state {
                    PageLoadState::Started => tracing::debug!(%view, %url, "Page loading"),
                    PageLoadState::Finished => tracing::debug!(%view, %url, "Page loaded"),
                },
                WebViewEvent::TitleChanged { view, title } => {
                    tracing::debug!(%view, %title, "Page title changed");
                }
                WebViewEvent::NavigationRequested { view, url } => {
                    tracing::debug!(%view, %url, "Navigation requested");
                }
                WebViewEvent::Closed { view } => {
                    tracing::debug!(%view, "WebView closed");
                }
            }
        }
    }
}
