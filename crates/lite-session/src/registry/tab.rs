use lite_common::{TabId, TabSnapshot};
use serde::{Deserialize, Serialize};

/// Title shown for a tab with no url.
pub const NEW_TAB_TITLE: &str = "New Tab";

/// Where a tab is in its surface lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TabState {
    /// No surface; the welcome page is shown.
    #[default]
    Empty,
    /// A navigation is in flight.
    Loading,
    /// A surface exists and shows `url`.
    Live,
}

/// One tab record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tab {
    pub id: TabId,
    pub title: String,
    pub url: Option<String>,
    pub state: TabState,
    /// Sequence number of the latest navigation issued for this tab.
    /// Completions carrying an older number are stale.
    #[serde(skip)]
    pub(crate) nav_seq: u64,
    /// A superseded navigation left a surface behind while a newer one
    /// was loading; whoever settles the tab must replace or close it.
    #[serde(skip)]
    pub(crate) stray_surface: bool,
}

impl Tab {
    pub fn new(id: TabId) -> Self {
        Self {
            id,
            title: NEW_TAB_TITLE.into(),
            url: None,
            state: TabState::Empty,
            nav_seq: 0,
            stray_surface: false,
        }
    }

    pub fn has_url(&self) -> bool {
        self.url.as_deref().is_some_and(|u| !u.is_empty())
    }

    /// Back to the welcome state, keeping the id.
    pub fn reset(&mut self) {
        self.title = NEW_TAB_TITLE.into();
        self.url = None;
        self.state = TabState::Empty;
        self.stray_surface = false;
    }

    /// Short label for the sidebar: the host without `www.`.
    pub fn display_title(&self) -> String {
        let Some(url) = self.url.as_deref().filter(|u| !u.is_empty()) else {
            return self.title.clone();
        };
        match url::Url::parse(url).ok().and_then(|u| u.host_str().map(str::to_owned)) {
            Some(host) => host.strip_prefix("www.").unwrap_or(&host).to_string(),
            None => self.title.clone(),
        }
    }

    pub fn snapshot(&self) -> TabSnapshot {
        TabSnapshot {
            id: self.id,
            title: self.display_title(),
            url: self.url.clone(),
            loading: self.state == TabState::Loading,
        }
    }
}
