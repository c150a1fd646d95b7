/// Which urls a webview may navigate to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationPolicy {
    /// The chrome renders inline HTML and never leaves it.
    Chrome,
    /// Tab content: any http or https page.
    Browsing,
}

/// Configuration for creating a new WebView instance.
#[derive(Debug, Clone)]
pub struct WebViewConfig {
    /// Initial URL to load (mutually exclusive with `html`).
    pub url: Option<String>,
    /// Initial HTML content to render (mutually exclusive with `url`).
    pub html: Option<String>,
    pub transparent: bool,
    /// Whether to enable dev tools (always on in debug builds).
    pub devtools: bool,
    pub user_agent: Option<String>,
    pub clipboard: bool,
    pub autoplay: bool,
    /// Install the IPC bridge and forward posted messages.
    pub ipc: bool,
    pub policy: NavigationPolicy,
}

impl Default for WebViewConfig {
    fn default() -> Self {
        Self {
            url: None,
            html: None,
            transparent: false,
            devtools: cfg!(debug_assertions),
            user_agent: None,
            clipboard: true,
            autoplay: true,
            ipc: false,
            policy: NavigationPolicy::Browsing,
        }
    }
}

impl WebViewConfig {
    /// A tab surface showing `url`.
    pub fn tab(url: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
            ..Default::default()
        }
    }

    /// The chrome: inline HTML with the IPC bridge.
    pub fn chrome(html: impl Into<String>) -> Self {
        Self {
            html: Some(html.into()),
            transparent: true,
            autoplay: false,
            ipc: true,
            policy: NavigationPolicy::Chrome,
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tab_config_browses_without_ipc() {
        let config = WebViewConfig::tab("https://example.com/");
        assert_eq!(config.url.as_deref(), Some("https://example.com/"));
        assert!(config.html.is_none());
        assert!(!config.ipc);
        assert_eq!(config.policy, NavigationPolicy::Browsing);
    }

    #[test]
    fn chrome_config_has_ipc_and_locked_navigation() {
        let config = WebViewConfig::chrome("<html></html>");
        assert!(config.url.is_none());
        assert!(config.ipc);
        assert!(config.transparent);
        assert_eq!(config.policy, NavigationPolicy::Chrome);
    }
}
