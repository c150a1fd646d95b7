//! Surface lifecycle coordinator.
//!
//! Owns the [`Session`] and turns every state transition into the
//! host commands that keep the native surfaces in line with it.
//!
//! All methods take `&self` and may interleave at host calls. The
//! session lock is never held across an `.await`; each operation
//! re-reads the session after every host call and treats a tab that
//! vanished meanwhile as a benign no-op.

mod history;
mod layout;
mod navigation;
mod sidebar;
mod tabs;

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use lite_common::{Action, Event, EventBus, SessionSnapshot, TabId, WindowSize};
use lite_config::LiteConfig;
use thiserror::Error;
use tokio::task::JoinHandle;
use tracing::debug;

use crate::geometry::ChromeMetrics;
use crate::host::{HostError, SurfaceHost};
use crate::registry::{RegistryError, Tab};
use crate::session::Session;
use crate::sidebar::SidebarState;

#[derive(Debug, Error)]
pub enum CoordinatorError {
    #[error("cannot interpret {0:?} as a url or search")]
    UnresolvableInput(String),

    #[error(transparent)]
    HostCommandFailed(#[from] HostError),

    #[error("{0} not found")]
    NotFound(TabId),
}

impl CoordinatorError {
    /// Expected outcome of interleaving; never shown to the user.
    pub fn is_benign(&self) -> bool {
        matches!(self, CoordinatorError::NotFound(_))
    }
}

impl From<RegistryError> for CoordinatorError {
    fn from(err: RegistryError) -> Self {
        match err {
            RegistryError::NotFound(id) => CoordinatorError::NotFound(id),
        }
    }
}

/// How a `navigate` call ended when it did not fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigateOutcome {
    /// The surface was created and shown.
    Live,
    /// A later navigation or reset of the same tab took over.
    Superseded,
    /// The tab was closed before the navigation finished.
    TabGone,
}

struct Inner {
    host: Arc<dyn SurfaceHost>,
    session: Mutex<Session>,
    metrics: ChromeMetrics,
    hide_delay: Duration,
    bus: EventBus,
    hide_task: Mutex<Option<JoinHandle<()>>>,
}

/// Cheap, cloneable handle to one browsing session.
#[derive(Clone)]
pub struct Coordinator {
    inner: Arc<Inner>,
}

impl Coordinator {
    pub fn new(host: Arc<dyn SurfaceHost>, config: &LiteConfig, bus: EventBus) -> Self {
        let window = WindowSize::new(
            f64::from(config.window.width),
            f64::from(config.window.height),
        );
        let sidebar = SidebarState::new(config.sidebar.start_visible, config.sidebar.start_pinned);
        Self {
            inner: Arc::new(Inner {
                host,
                session: Mutex::new(Session::new(window, sidebar)),
                metrics: ChromeMetrics::from_config(config),
                hide_delay: config.sidebar.hide_delay(),
                bus,
                hide_task: Mutex::new(None),
            }),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Session> {
        self.inner
            .session
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    fn publish(&self, event: Event) {
        self.inner.bus.publish(event);
    }

    pub fn events(&self) -> &EventBus {
        &self.inner.bus
    }

    pub fn metrics(&self) -> ChromeMetrics {
        self.inner.metrics
    }

    /// Copy of the current session state.
    pub fn session(&self) -> Session {
        self.lock().clone()
    }

    pub fn active_tab(&self) -> Tab {
        self.lock().registry.find_active().clone()
    }

    pub fn tab(&self, id: TabId) -> Option<Tab> {
        self.lock().registry.get(id).cloned()
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        self.lock().snapshot()
    }

    /// Publish a full snapshot for a freshly loaded chrome.
    pub fn publish_snapshot(&self) {
        let snapshot = self.snapshot();
        self.publish(Event::Snapshot(snapshot));
    }

    /// Route an [`Action`] to its operation.
    ///
    /// Benign errors are logged here and not returned.
    pub async fn dispatch(&self, action: Action) -> Result<(), CoordinatorError> {
        debug!(action = action.label(), "dispatch");
        let active = self.lock().registry.active_id();
        let result = match action {
            Action::NewTab => self.new_tab().await.map(drop),
            Action::CloseTab => self.close_tab(active).await,
            Action::CloseTabId(id) => self.close_tab(TabId(id)).await,
            Action::SelectTab(id) => self.switch_tab(TabId(id)).await,
            Action::NextTab => self.select_next_tab().await,
            Action::PrevTab => self.select_prev_tab().await,
            Action::Navigate(input) => self.navigate(active, &input).await.map(drop),
            Action::SearchInNewTab(input) => self.search_in_new_tab(&input).await.map(drop),
            Action::GoBack => {
                self.go_back().await;
                Ok(())
            }
            Action::GoForward => {
                self.go_forward().await;
                Ok(())
            }
            Action::Reload => {
                self.reload().await;
                Ok(())
            }
            Action::GoHome => self.go_home(active).await,
            Action::FocusAddressBar => {
                self.focus_address_bar().await;
                Ok(())
            }
            Action::OpenSearch => {
                self.open_search();
                Ok(())
            }
            Action::CloseSearch => {
                self.close_search();
                Ok(())
            }
            Action::Escape => {
                self.escape().await;
                Ok(())
            }
            Action::ToggleSidebar => {
                self.toggle_sidebar().await;
                Ok(())
            }
            Action::TogglePin => {
                self.toggle_pin().await;
                Ok(())
            }
            Action::SidebarEnter => {
                self.sidebar_enter().await;
                Ok(())
            }
            Action::SidebarLeave => {
                self.sidebar_leave();
                Ok(())
            }
            Action::SyncChrome => {
                self.publish_snapshot();
                Ok(())
            }
            Action::Quit | Action::None => Ok(()),
        };

        match result {
            Err(e) if e.is_benign() => {
                debug!(error = %e, "ignoring stale tab reference");
                Ok(())
            }
            other => other,
        }
    }
}
