//! Native webview surfaces for the browser shell.
//!
//! Wraps the `wry` crate to provide:
//! - One child webview per tab, plus the chrome webview that draws the
//!   title bar, sidebar, and welcome page
//! - Bidirectional IPC between the chrome and Rust
//! - Per-surface navigation policy
//! - Page load, title, and navigation events

pub mod bounds;
pub mod error;
pub mod events;
pub mod ipc;
pub mod manager;

pub use bounds::rect_to_wry;
pub use error::WebViewError;
pub use events::{PageLoadState, ViewId, WebViewEvent};
pub use ipc::{IpcMessage, IpcPayload};
pub use manager::{NavigationPolicy, WebViewConfig, WebViewHandle, WebViewManager, WebViewRegistry};
