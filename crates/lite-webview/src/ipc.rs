//! IPC protocol between the chrome webview and Rust.
//!
//! - **JS -> Rust**: the chrome calls `window.lite.ipc.send(kind, payload)`,
//!   which posts `{"kind": ..., "payload": ...}` through `window.ipc`.
//! - **Rust -> JS**: Rust evaluates `window.lite.ipc._dispatch(kind, payload)`
//!   in the chrome.

use serde::{Deserialize, Serialize};

/// A typed IPC message from JavaScript to Rust.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IpcMessage {
    pub kind: String,
    #[serde(default = "IpcPayload::none")]
    pub payload: IpcPayload,
}

/// Payload of an IPC message: a bare string or structured JSON.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum IpcPayload {
    Text(String),
    Json(serde_json::Value),
    None,
}

impl IpcPayload {
    fn none() -> Self {
        IpcPayload::None
    }

    /// The payload as text, if it is a string.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            IpcPayload::Text(s) => Some(s),
            IpcPayload::Json(serde_json::Value::String(s)) => Some(s),
            _ => None,
        }
    }

    /// The payload as a tab id, accepting `3` or `"3"`.
    pub fn as_u32(&self) -> Option<u32> {
        match self {
            IpcPayload::Json(v) => v.as_u64().and_then(|n| u32::try_from(n).ok()),
            IpcPayload::Text(s) => s.trim().parse().ok(),
            IpcPayload::None => None,
        }
    }

    /// Field `key` of an object payload.
    pub fn field(&self, key: &str) -> Option<&serde_json::Value> {
        match self {
            IpcPayload::Json(v) => v.get(key),
            _ => None,
        }
    }
}

impl IpcMessage {
    /// Parse an IPC message from a raw JSON string (from JS postMessage).
    pub fn from_json(raw: &str) -> Option<Self> {
        serde_json::from_str(raw).ok()
    }

    pub fn text(kind: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            payload: IpcPayload::Text(text.into()),
        }
    }

    pub fn json(kind: impl Into<String>, value: serde_json::Value) -> Self {
        Self {
            kind: kind.into(),
            payload: IpcPayload::Json(value),
        }
    }
}

/// Injected into the chrome before any page script runs.
pub const IPC_INIT_SCRIPT: &str = r#"
(function() {
    window.lite = window.lite || {};
    window.lite.ipc = {
        send: function(kind, payload) {
            window.ipc.postMessage(JSON.stringify({
                kind: kind,
                payload: payload === undefined ? null : payload
            }));
        },
        _handlers: {},
        on: function(kind, callback) {
            this._handlers[kind] = callback;
        },
        _dispatch: function(kind, payload) {
            var handler = this._handlers[kind];
            if (handler) {
                handler(payload);
            }
        }
    };
})();
"#;

/// JS snippet that hands `payload` to the chrome's `kind` handler.
pub fn js_dispatch_message(kind: &str, payload: &serde_json::Value) -> String {
    let payload_json = serde_json::to_string(payload).unwrap_or_else(|_| "null".to_string());
    format!(
        "window.lite.ipc._dispatch({}, {});",
        serde_json::to_string(kind).unwrap_or_else(|_| "\"unknown\"".to_string()),
        payload_json,
    )
}
