//! Search engine configuration.

use serde::{Deserialize, Serialize};

/// Placeholder replaced by the percent-encoded query.
pub const QUERY_PLACEHOLDER: &str = "{query}";

/// Where free-text input that is not a URL gets sent.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// URL template; must contain `{query}`.
    pub engine: String,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            engine: "https://www.google.com/search?q={query}".into(),
        }
    }
}
