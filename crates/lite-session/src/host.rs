//! Boundary to the process that owns the native tab surfaces.

use async_trait::async_trait;
use lite_common::{Rect, TabId};
use thiserror::Error;

/// A host call was rejected or never answered.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{command} failed: {message}")]
pub struct HostError {
    pub command: &'static str,
    pub message: String,
}

impl HostError {
    pub fn new(command: &'static str, message: impl Into<String>) -> Self {
        Self {
            command,
            message: message.into(),
        }
    }
}

/// Commands the coordinator issues against tab surfaces.
///
/// Every call is independent; the host guarantees nothing beyond
/// per-call completion. `close_surface` must be idempotent and
/// `create_surface` replaces any surface the tab already has.
#[async_trait]
pub trait SurfaceHost: Send + Sync {
    /// Turn free text into a canonical url. `Ok(None)` means the text
    /// could not be interpreted.
    async fn resolve_input(&self, input: &str) -> Result<Option<String>, HostError>;

    /// On failure any surface the tab already had stays in place.
    async fn create_surface(&self, tab: TabId, url: &str, bounds: Rect) -> Result<(), HostError>;

    async fn resize_surface(&self, tab: TabId, bounds: Rect) -> Result<(), HostError>;

    /// Show `active`'s surface and hide every other one in `tabs`.
    async fn switch_active(&self, active: TabId, tabs: &[TabId]) -> Result<(), HostError>;

    async fn close_surface(&self, tab: TabId) -> Result<(), HostError>;

    async fn go_back(&self, tab: TabId) -> Result<(), HostError>;

    async fn go_forward(&self, tab: TabId) -> Result<(), HostError>;

    async fn reload(&self, tab: TabId) -> Result<(), HostError>;
}
