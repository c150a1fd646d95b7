use tracing::{debug, warn};

use super::Coordinator;

#[derive(Debug, Clone, Copy)]
enum History {
    Back,
    Forward,
    Reload,
}

impl Coordinator {
    pub async fn go_back(&self) {
        self.history(History::Back).await;
    }

    pub async fn go_forward(&self) {
        self.history(History::Forward).await;
    }

    pub async fn reload(&self) {
        self.history(History::Reload).await;
    }

    /// Best-effort; only a tab with a url has a surface to drive.
    async fn history(&self, command: History) {
        let tab = {
            let s = self.lock();
            let active = s.registry.find_active();
            if !active.has_url() {
                debug!(?command, "no surface on active tab");
                return;
            }
            active.id
        };

        let host = &self.inner.host;
        let result = match command {
            History::Back => host.go_back(tab).await,
            History::Forward => host.go_forward(tab).await,
            History::Reload => host.reload(tab).await,
        };
        if let Err(e) = result {
            warn!(tab_id = %tab, error = %e, "history command failed");
        }
    }
}
