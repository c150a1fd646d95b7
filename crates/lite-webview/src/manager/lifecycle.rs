use std::sync::Arc;

use tracing::debug;
use wry::raw_window_handle;
use wry::WebViewBuilder;

use crate::events::ViewId;
use crate::ipc::IPC_INIT_SCRIPT;

use super::handle::WebViewHandle;
use super::types::WebViewConfig;
use super::WebViewManager;

impl WebViewManager {
    /// Create a new WebView as a child of `window`, positioned at `bounds`.
    pub fn create<W: raw_window_handle::HasWindowHandle>(
        &mut self,
        view: ViewId,
        window: &W,
        bounds: wry::Rect,
        config: WebViewConfig,
    ) -> Result<WebViewHandle, wry::Error> {
        let events = Arc::clone(&self.events);

        let mut builder = WebViewBuilder::with_web_context(&mut self.context)
            .with_bounds(bounds)
            .with_transparent(config.transparent)
            .with_devtools(config.devtools)
            .with_clipboard(config.clipboard)
            .with_autoplay(config.autoplay)
            .with_focused(false);

        if let Some(ua) = &config.user_agent {
            builder = builder.with_user_agent(ua);
        }

        if config.ipc {
            builder = builder.with_initialization_script(IPC_INIT_SCRIPT);
            builder = Self::attach_ipc_handler(builder, Arc::clone(&events), view);
        }

        builder = Self::attach_page_load_handler(builder, Arc::clone(&events), view);
        builder = Self::attach_title_handler(builder, Arc::clone(&events), view);
        builder = Self::attach_navigation_handler(builder, Arc::clone(&events), view, config.policy);

        let initial_url;
        if let Some(url) = &config.url {
            builder = builder.with_url(url);
            initial_url = url.clone();
        } else if let Some(html) = &config.html {
            builder = builder.with_html(html);
            initial_url = "about:blank".to_string();
        } else {
            builder = builder.with_html("<html><body></body></html>");
            initial_url = "about:blank".to_string();
        }

        let webview = builder.build_as_child(window)?;

        debug!(%view, url = %initial_url, "WebView created");

        Ok(WebViewHandle { webview })
    }
}
