//! Session coordinator startup and the channel into it.

use std::sync::Arc;

use tokio::sync::mpsc;

use lite_common::{Action, EventBus};
use lite_session::{ChannelHost, Coordinator, InputResolver};

use super::core::LiteApp;
use super::types::{SessionInput, EVENT_BUS_CAPACITY};

impl LiteApp {
    /// Start the coordinator on a background runtime.
    ///
    /// Surface commands come back through `surface_rx` and are executed
    /// on the UI thread while polling.
    pub(super) fn start_session(&mut self) {
        let rt = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .enable_all()
            .build();

        let rt = match rt {
            Ok(rt) => rt,
            Err(e) => {
                tracing::error!("Failed to create tokio runtime: {e}");
                return;
            }
        };

        let (host, surface_rx) = ChannelHost::new(InputResolver::from_config(&self.config));
        let bus = EventBus::new(EVENT_BUS_CAPACITY);
        self.session_events = Some(bus.subscribe());
        let coordinator = Coordinator::new(Arc::new(host), &self.config, bus);

        let (tx, rx) = mpsc::unbounded_channel();
        rt.spawn(run_session(coordinator, rx));

        self.session_tx = Some(tx);
        self.surface_rx = Some(surface_rx);
        self.tokio_runtime = Some(rt);
        tracing::info!("Session coordinator started");

        self.send_window_size();
        if let Some(url) = self.startup_url.take() {
            self.send_session(Action::Navigate(url));
        }
    }

    /// Queue an action for the coordinator.
    pub(super) fn send_session(&self, action: Action) {
        self.send_input(SessionInput::Action(action));
    }

    /// Report the current inner window size to the coordinator.
    pub(super) fn send_window_size(&self) {
        let Some(ref window) = self.window else {
            return;
        };
        let size = window.inner_size();
        if size.width == 0 || size.height == 0 {
            return;
        }
        self.send_input(SessionInput::WindowResized {
            width: size.width,
            height: size.height,
            scale_factor: window.scale_factor(),
        });
    }

    fn send_input(&self, input: SessionInput) {
        match self.session_tx {
            Some(ref tx) => {
                if tx.send(input).is_err() {
                    tracing::warn!("Session task has stopped; input dropped");
                }
            }
            None => tracing::debug!(?input, "No session running; input dropped"),
        }
    }

    /// Route a resolved action: app-level actions stay here, the rest go
    /// to the coordinator.
    pub(super) fn dispatch_action(&mut self, action: Action) {
        match action {
            Action::Quit => self.should_exit = true,
            Action::None => {}
            other => self.send_session(other),
        }
    }
}

/// Consume inputs until the UI thread drops its sender.
///
/// Each input runs as its own task so a slow navigation never blocks
/// tab switches or sidebar events queued behind it.
async fn run_session(coordinator: Coordinator, mut rx: mpsc::UnboundedReceiver<SessionInput>) {
    while let Some(input) = rx.recv().await {
        let coordinator = coordinator.clone();
        tokio::spawn(async move {
            match input {
                SessionInput::Action(action) => {
                    let label = action.label();
                    if let Err(e) = coordinator.dispatch(action).await {
                        tracing::debug!(action = label, error = %e, "Action failed");
                    }
                }
                SessionInput::WindowResized {
                    width,
                    height,
                    scale_factor,
                } => coordinator.set_window_size(width, height, scale_factor).await,
            }
        });
        // Let the new task reach its first await so inputs start in order.
        tokio::task::yield_now().await;
    }
    tracing::debug!("Session input channel closed");
}
