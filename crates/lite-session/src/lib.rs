//! Tab and surface session coordination for the Lite browser.
//!
//! The [`Coordinator`] owns tab identity, sidebar visibility, and content
//! geometry, and drives an out-of-process [`SurfaceHost`] that renders
//! one native surface per tab.

pub mod channel;
pub mod coordinator;
pub mod geometry;
pub mod host;
pub mod registry;
pub mod resolve;
pub mod session;
pub mod sidebar;

pub use channel::{ChannelHost, SurfaceCommand, SurfaceRequest};
pub use coordinator::{Coordinator, CoordinatorError, NavigateOutcome};
pub use geometry::{ChromeMetrics, SIDEBAR_WIDTH, TITLEBAR_HEIGHT};
pub use host::{HostError, SurfaceHost};
pub use registry::{CloseOutcome, RegistryError, Tab, TabRegistry, TabState};
pub use resolve::InputResolver;
pub use session::Session;
pub use sidebar::{EscapeOutcome, SidebarState};
