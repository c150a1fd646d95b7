//! Graceful shutdown: stop the session, destroy webviews, close the window.

use super::core::LiteApp;
use super::types::SHUTDOWN_TIMEOUT;

// =============================================================================
// SHUTDOWN
// =============================================================================

impl LiteApp {
    /// Perform graceful shutdown of all subsystems.
    ///
    /// Order matters:
    /// 1. Close the session input channel (no new actions)
    /// 2. Drop pending surface requests so waiting tasks see a dropped reply
    /// 3. Shut down the tokio runtime
    /// 4. Destroy webviews, then the window
    pub(super) fn shutdown(&mut self) {
        tracing::info!("Initiating graceful shutdown");

        self.session_tx = None;
        self.surface_rx = None;
        self.session_events = None;
        self.chrome_ready = false;

        if let Some(rt) = self.tokio_runtime.take() {
            rt.shutdown_timeout(SHUTDOWN_TIMEOUT);
        }

        if let Some(ref mut registry) = self.webviews {
            registry.destroy_all();
        }
        self.webviews = None;
        self.window = None;

        tracing::info!("Graceful shutdown complete");
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use crate::app_state::core::LiteApp;
    use lite_common::Action;
    use lite_config::LiteConfig;
    use lite_platform::KeybindRegistry;

    fn app() -> LiteApp {
        let config = LiteConfig::default();
        let registry = KeybindRegistry::from_config(&config.keybinds);
        LiteApp::new(config, registry, None, Some("example.com".into()))
    }

    #[test]
    fn shutdown_on_fresh_app_does_not_panic() {
        let mut app = app();

        app.shutdown();

        assert!(app.session_tx.is_none());
        assert!(app.surface_rx.is_none());
        assert!(app.tokio_runtime.is_none());
        assert!(app.webviews.is_none());
        assert!(app.window.is_none());
    }

    #[test]
    fn shutdown_is_idempotent() {
        let mut app = app();

        app.shutdown();
        app.shutdown(); // second call must not panic

        assert!(app.tokio_runtime.is_none());
        assert!(!app.chrome_ready);
    }

    #[test]
    fn shutdown_stops_a_running_runtime() {
        let mut app = app();
        app.tokio_runtime = Some(
            tokio::runtime::Builder::new_multi_thread()
                .worker_threads(1)
                .enable_all()
                .build()
                .unwrap(),
        );
        app.chrome_ready = true;

        app.shutdown();

        assert!(app.tokio_runtime.is_none());
        assert!(!app.chrome_ready);
    }

    #[test]
    fn quit_sets_exit_flag_and_other_actions_need_a_session() {
        let mut app = app();

        app.dispatch_action(Action::NewTab);
        assert!(!app.should_exit);

        app.dispatch_action(Action::Quit);
        assert!(app.should_exit);
    }
}
