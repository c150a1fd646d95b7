//! Top-level application state.
//!
//! Implements `winit::application::ApplicationHandler` to drive the main
//! event loop. Owns the window and every native webview, runs the session
//! coordinator on a background runtime, and executes its surface commands
//! on the UI thread.

mod chrome;
mod core;
mod event_handler;
mod init;
mod ipc_dispatch;
mod polling;
mod session;
mod shutdown;
mod surfaces;
mod types;

pub use core::LiteApp;
