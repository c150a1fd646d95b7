//! Channel-backed [`SurfaceHost`].
//!
//! Native webviews must be touched on the UI thread, so the session
//! sends each command as a [`SurfaceRequest`] and awaits the reply. The
//! UI thread drains the receiver while polling and answers through the
//! oneshot.

use async_trait::async_trait;
use lite_common::{Rect, TabId};
use serde::{Deserialize, Serialize};
use tokio::sync::{mpsc, oneshot};
use tracing::debug;

use crate::host::{HostError, SurfaceHost};
use crate::resolve::InputResolver;

/// One surface operation, as executed on the UI thread.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum SurfaceCommand {
    Create { tab: TabId, url: String, bounds: Rect },
    Resize { tab: TabId, bounds: Rect },
    SwitchActive { active: TabId, tabs: Vec<TabId> },
    Close { tab: TabId },
    GoBack { tab: TabId },
    GoForward { tab: TabId },
    Reload { tab: TabId },
}

impl SurfaceCommand {
    /// Name used in logs and [`HostError::command`].
    pub fn name(&self) -> &'static str {
        match self {
            SurfaceCommand::Create { .. } => "createSurface",
            SurfaceCommand::Resize { .. } => "resizeSurface",
            SurfaceCommand::SwitchActive { .. } => "switchActive",
            SurfaceCommand::Close { .. } => "closeSurface",
            SurfaceCommand::GoBack { .. } => "surfaceGoBack",
            SurfaceCommand::GoForward { .. } => "surfaceGoForward",
            SurfaceCommand::Reload { .. } => "surfaceReload",
        }
    }
}

/// A command plus the slot for its outcome.
#[derive(Debug)]
pub struct SurfaceRequest {
    pub command: SurfaceCommand,
    pub reply: oneshot::Sender<Result<(), String>>,
}

impl SurfaceRequest {
    /// Answer the request. A session that stopped waiting is not an error.
    pub fn respond(self, outcome: Result<(), String>) {
        let _ = self.reply.send(outcome);
    }
}

/// Sends surface commands to the UI thread; resolves input locally.
#[derive(Debug, Clone)]
pub struct ChannelHost {
    tx: mpsc::UnboundedSender<SurfaceRequest>,
    resolver: InputResolver,
}

impl ChannelHost {
    pub fn new(resolver: InputResolver) -> (Self, mpsc::UnboundedReceiver<SurfaceRequest>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx, resolver }, rx)
    }

    async fn send(&self, command: SurfaceCommand) -> Result<(), HostError> {
        let name = command.name();
        let (reply, outcome) = oneshot::channel();
        debug!(command = name, "dispatching surface command");
        self.tx
            .send(SurfaceRequest { command, reply })
            .map_err(|_| HostError::new(name, "surface host has shut down"))?;
        outcome
            .await
            .map_err(|_| HostError::new(name, "reply dropped"))?
            .map_err(|message| HostError::new(name, message))
    }
}

#[async_trait]
impl SurfaceHost for ChannelHost {
    async fn resolve_input(&self, input: &str) -> Result<Option<String>, HostError> {
        Ok(self.resolver.resolve(input))
    }

    async fn create_surface(&self, tab: TabId, url: &str, bounds: Rect) -> Result<(), HostError> {
        self.send(SurfaceCommand::Create {
            tab,
            url: url.to_string(),
            bounds,
        })
        .await
    }

    async fn resize_surface(&self, tab: TabId, bounds: Rect) -> Result<(), HostError> {
        self.send(SurfaceCommand::Resize { tab, bounds }).await
    }

    async fn switch_active(&self, active: TabId, tabs: &[TabId]) -> Result<(), HostError> {
        self.send(SurfaceCommand::SwitchActive {
            active,
            tabs: tabs.to_vec(),
        })
        .await
    }

    async fn close_surface(&self, tab: TabId) -> Result<(), HostError> {
        self.send(SurfaceCommand::Close { tab }).await
    }

    async fn go_back(&self, tab: TabId) -> Result<(), HostError> {
        self.send(SurfaceCommand::GoBack { tab }).await
    }

    async fn go_forward(&self, tab: TabId) -> Result<(), HostError> {
        self.send(SurfaceCommand::GoForward { tab }).await
    }

    async fn reload(&self, tab: TabId) -> Result<(), HostError> {
        self.send(SurfaceCommand::Reload { tab }).await
    }
}
