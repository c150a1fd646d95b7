//! Internal types and constants for the app state module.

use std::time::Duration;

use lite_common::Action;

/// How often to poll for events (approx 120 Hz).
pub(super) const POLL_INTERVAL: Duration = Duration::from_millis(8);

/// Capacity of the session event bus.
pub(super) const EVENT_BUS_CAPACITY: usize = 256;

/// Grace period for in-flight session tasks at shutdown.
pub(super) const SHUTDOWN_TIMEOUT: Duration = Duration::from_secs(2);

/// Work sent from the UI thread to the session task.
#[derive(Debug, Clone, PartialEq)]
pub(super) enum SessionInput {
    Action(Action),
    WindowResized {
        width: u32,
        height: u32,
        scale_factor: f64,
    },
}
