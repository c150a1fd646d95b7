use wry::WebView;

/// A live webview.
pub struct WebViewHandle {
    pub(super) webview: WebView,
}

impl WebViewHandle {
    /// Send a typed IPC message to JavaScript.
    pub fn send_ipc(&self, kind: &str, payload: &serde_json::Value) -> Result<(), wry::Error> {
        let script = crate::ipc::js_dispatch_message(kind, payload);
        self.webview.evaluate_script(&script)
    }

    pub fn set_bounds(&self, bounds: wry::Rect) -> Result<(), wry::Error> {
        self.webview.set_bounds(bounds)
    }

    pub fn set_visible(&self, visible: bool) -> Result<(), wry::Error> {
        self.webview.set_visible(visible)
    }

    pub fn reload(&self) -> Result<(), wry::Error> {
        self.webview.evaluate_script("location.reload()")
    }

    pub fn go_back(&self) -> Result<(), wry::Error> {
        self.webview.evaluate_script("history.back()")
    }

    pub fn go_forward(&self) -> Result<(), wry::Error> {
        self.webview.evaluate_script("history.forward()")
    }
}
