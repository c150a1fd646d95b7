//! Executes the coordinator's surface commands against native webviews.

use lite_session::{SurfaceCommand, SurfaceRequest};
use lite_webview::{rect_to_wry, ViewId, WebViewConfig, WebViewError, WebViewHandle};

use super::core::LiteApp;

impl LiteApp {
    /// Answer every queued surface request.
    pub(super) fn poll_surface_requests(&mut self) {
        let mut pending: Vec<SurfaceRequest> = Vec::new();
        if let Some(ref mut rx) = self.surface_rx {
            while let Ok(request) = rx.try_recv() {
                pending.push(request);
            }
        }

        for request in pending {
            let outcome = self.apply_surface_command(&request.command);
            match outcome {
                Ok(()) => tracing::debug!(command = request.command.name(), "Surface command done"),
                Err(ref e) => tracing::warn!(
                    command = request.command.name(),
                    error = %e,
                    "Surface command failed"
                ),
            }
            request.respond(outcome);
        }
    }

    fn apply_surface_command(&mut self, command: &SurfaceCommand) -> Result<(), String> {
        let (Some(window), Some(webviews)) = (self.window.as_ref(), self.webviews.as_mut()) else {
            return Err("window is not open".into());
        };

        match command {
            SurfaceCommand::Create { tab, url, bounds } => {
                tracing::info!(tab_id = %tab, url = %url, "Creating surface");
                webviews
                    .create(
                        ViewId::Tab(*tab),
                        window.as_ref(),
                        rect_to_wry(bounds),
                        WebViewConfig::tab(url.clone()),
                    )
                    .map_err(|e| e.to_string())
            }
            SurfaceCommand::Resize { tab, bounds } => webviews
                .set_bounds(ViewId::Tab(*tab), rect_to_wry(bounds))
                .map_err(|e| e.to_string()),
            SurfaceCommand::SwitchActive { active, tabs } => webviews
                .show_only(*active, tabs)
                .map_err(|e| e.to_string()),
            SurfaceCommand::Close { tab } => {
                webviews.destroy(ViewId::Tab(*tab));
                Ok(())
            }
            SurfaceCommand::GoBack { tab } => {
                history(webviews.with_view(ViewId::Tab(*tab), WebViewHandle::go_back))
            }
            SurfaceCommand::GoForward { tab } => {
                history(webviews.with_view(ViewId::Tab(*tab), WebViewHandle::go_forward))
            }
            SurfaceCommand::Reload { tab } => {
                history(webviews.with_view(ViewId::Tab(*tab), WebViewHandle::reload))
            }
        }
    }
}

/// History on a tab with no surface does nothing.
fn history(outcome: Result<(), WebViewError>) -> Result<(), String> {
    match outcome {
        Ok(()) | Err(WebViewError::Missing(_)) => Ok(()),
        Err(e) => Err(e.to_string()),
    }
}
