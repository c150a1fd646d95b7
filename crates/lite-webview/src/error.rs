use crate::events::ViewId;

#[derive(Debug, thiserror::Error)]
pub enum WebViewError {
    #[error("no webview for {0}")]
    Missing(ViewId),

    #[error(transparent)]
    Wry(#[from] wry::Error),
}
