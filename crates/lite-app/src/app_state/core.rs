//! LiteApp struct definition and constructor.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use tokio::sync::{broadcast, mpsc};
use winit::window::Window;

use lite_common::Event;
use lite_config::LiteConfig;
use lite_platform::KeybindRegistry;
use lite_session::SurfaceRequest;
use lite_webview::WebViewRegistry;

use super::types::SessionInput;

/// Top-level application state.
pub struct LiteApp {
    pub(super) config: LiteConfig,
    pub(super) registry: KeybindRegistry,
    /// Persistent webview profile (cookies, storage).
    pub(super) profile_dir: Option<PathBuf>,
    /// Opened in the first tab once the session is running.
    pub(super) startup_url: Option<String>,

    // Windowing
    pub(super) window: Option<Arc<Window>>,
    pub(super) webviews: Option<WebViewRegistry>,

    // Modifier tracking (winit sends these separately)
    pub(super) modifiers: winit::keyboard::ModifiersState,

    // Session coordinator, running on its own runtime
    pub(super) tokio_runtime: Option<tokio::runtime::Runtime>,
    pub(super) session_tx: Option<mpsc::UnboundedSender<SessionInput>>,
    pub(super) surface_rx: Option<mpsc::UnboundedReceiver<SurfaceRequest>>,
    pub(super) session_events: Option<broadcast::Receiver<Event>>,

    /// The chrome page has loaded and registered its IPC handlers.
    pub(super) chrome_ready: bool,

    // Whether the app should exit
    pub(super) should_exit: bool,
    pub(super) last_poll: Instant,
}

impl LiteApp {
    pub fn new(
        config: LiteConfig,
        registry: KeybindRegistry,
        profile_dir: Option<PathBuf>,
        startup_url: Option<String>,
    ) -> Self {
        Self {
            config,
            registry,
            profile_dir,
            startup_url,
            window: None,
            webviews: None,
            modifiers: winit::keyboard::ModifiersState::empty(),
            tokio_runtime: None,
            session_tx: None,
            surface_rx: None,
            session_events: None,
            chrome_ready: false,
            should_exit: false,
            last_poll: Instant::now(),
        }
    }
}
