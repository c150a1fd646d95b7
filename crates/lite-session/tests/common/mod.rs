//! Recording surface host and helpers shared by the coordinator suites.

#![allow(dead_code)]

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use lite_common::{Event, EventBus, Rect, TabId};
use lite_config::LiteConfig;
use lite_session::{Coordinator, HostError, InputResolver, SurfaceHost};
use tokio::sync::{broadcast, watch};

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Resolve(String),
    Create { tab: TabId, url: String, bounds: Rect },
    Resize { tab: TabId, bounds: Rect },
    Switch { active: TabId, tabs: Vec<TabId> },
    Close(TabId),
    Back(TabId),
    Forward(TabId),
    Reload(TabId),
}

impl Call {
    pub fn name(&self) -> &'static str {
        match self {
            Call::Resolve(_) => "resolveInput",
            Call::Create { .. } => "createSurface",
            Call::Resize { .. } => "resizeSurface",
            Call::Switch { .. } => "switchActive",
            Call::Close(_) => "closeSurface",
            Call::Back(_) => "surfaceGoBack",
            Call::Forward(_) => "surfaceGoForward",
            Call::Reload(_) => "surfaceReload",
        }
    }
}

/// Records every call; can fail or hold any command by name.
#[derive(Default)]
pub struct MockHost {
    calls: Mutex<Vec<Call>>,
    failing: Mutex<HashSet<&'static str>>,
    gates: Mutex<HashMap<&'static str, watch::Sender<bool>>>,
    reject_input: Mutex<bool>,
    resolver: InputResolver,
}

impl MockHost {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.calls().iter().map(Call::name).collect()
    }

    pub fn count(&self, name: &str) -> usize {
        self.calls().iter().filter(|c| c.name() == name).count()
    }

    pub fn clear(&self) {
        self.calls.lock().unwrap().clear();
    }

    pub fn fail(&self, name: &'static str) {
        self.failing.lock().unwrap().insert(name);
    }

    pub fn reject_input(&self) {
        *self.reject_input.lock().unwrap() = true;
    }

    /// Calls to `name` are recorded but do not complete until released.
    pub fn hold(&self, name: &'static str) {
        let (tx, _) = watch::channel(false);
        self.gates.lock().unwrap().insert(name, tx);
    }

    pub fn release(&self, name: &'static str) {
        if let Some(tx) = self.gates.lock().unwrap().remove(name) {
            tx.send_replace(true);
        }
    }

    async fn record(&self, call: Call) -> Result<(), HostError> {
        let name = call.name();
        self.calls.lock().unwrap().push(call);

        let gate = self.gates.lock().unwrap().get(name).map(|tx| tx.subscribe());
        if let Some(mut rx) = gate {
            let _ = rx.wait_for(|open| *open).await;
        }

        let failing = self.failing.lock().unwrap().contains(name);
        if failing {
            Err(HostError::new(name, "injected failure"))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl SurfaceHost for MockHost {
    async fn resolve_input(&self, input: &str) -> Result<Option<String>, HostError> {
        self.record(Call::Resolve(input.to_string())).await?;
        let reject = *self.reject_input.lock().unwrap();
        Ok(if reject {
            None
        } else {
            self.resolver.resolve(input)
        })
    }

    async fn create_surface(&self, tab: TabId, url: &str, bounds: Rect) -> Result<(), HostError> {
        self.record(Call::Create {
            tab,
            url: url.to_string(),
            bounds,
        })
        .await
    }

    async fn resize_surface(&self, tab: TabId, bounds: Rect) -> Result<(), HostError> {
        self.record(Call::Resize { tab, bounds }).await
    }

    async fn switch_active(&self, active: TabId, tabs: &[TabId]) -> Result<(), HostError> {
        self.record(Call::Switch {
            active,
            tabs: tabs.to_vec(),
        })
        .await
    }

    async fn close_surface(&self, tab: TabId) -> Result<(), HostError> {
        self.record(Call::Close(tab)).await
    }

    async fn go_back(&self, tab: TabId) -> Result<(), HostError> {
        self.record(Call::Back(tab)).await
    }

    async fn go_forward(&self, tab: TabId) -> Result<(), HostError> {
        self.record(Call::Forward(tab)).await
    }

    async fn reload(&self, tab: TabId) -> Result<(), HostError> {
        self.record(Call::Reload(tab)).await
    }
}

pub fn coordinator(host: &Arc<MockHost>) -> Coordinator {
    coordinator_with(host, LiteConfig::default())
}

pub fn coordinator_with(host: &Arc<MockHost>, config: LiteConfig) -> Coordinator {
    let host: Arc<dyn SurfaceHost> = host.clone();
    Coordinator::new(host, &config, EventBus::new(256))
}

pub const SIDEBAR_RECT: Rect = Rect {
    x: 260.0,
    y: 36.0,
    width: 940.0,
    height: 764.0,
};

pub const FULL_RECT: Rect = Rect {
    x: 0.0,
    y: 36.0,
    width: 1200.0,
    height: 764.0,
};

/// Let spawned tasks run to their next suspension point.
pub async fn settle() {
    for _ in 0..32 {
        tokio::task::yield_now().await;
    }
}

/// Yield until the host has seen at least `count` calls named `name`.
pub async fn wait_for_calls(host: &MockHost, name: &str, count: usize) {
    for _ in 0..1000 {
        if host.count(name) >= count {
            return;
        }
        tokio::task::yield_now().await;
    }
    panic!("host never saw {count} {name} call(s); saw {:?}", host.names());
}

/// Everything published so far, without waiting.
pub fn drain(rx: &mut broadcast::Receiver<Event>) -> Vec<Event> {
    let mut events = Vec::new();
    while let Ok(event) = rx.try_recv() {
        events.push(event);
    }
    events
}
