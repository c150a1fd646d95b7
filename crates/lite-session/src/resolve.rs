//! Address bar input resolution.

use url::Url;

const PLACEHOLDER: &str = "{query}";

/// Turns address-bar text into a url: absolute http(s) urls pass
/// through, bare hosts get `https://`, and anything else becomes a
/// search.
#[derive(Debug, Clone)]
pub struct InputResolver {
    engine: String,
}

impl InputResolver {
    /// `engine` is a url template containing `{query}`. A template
    /// without it gets the query appended.
    pub fn new(engine: impl Into<String>) -> Self {
        Self {
            engine: engine.into(),
        }
    }

    pub fn from_config(config: &lite_config::LiteConfig) -> Self {
        Self::new(config.search.engine.clone())
    }

    /// Canonical url for `input`, or `None` when it is blank.
    pub fn resolve(&self, input: &str) -> Option<String> {
        let text = input.trim();
        if text.is_empty() {
            return None;
        }

        if let Ok(url) = Url::parse(text) {
            if matches!(url.scheme(), "http" | "https") && url.has_host() {
                return Some(url.into());
            }
        }

        if text.contains('.') && !text.contains(char::is_whitespace) {
            if let Ok(url) = Url::parse(&format!("https://{text}")) {
                return Some(url.into());
            }
        }

        self.search_url(text)
    }

    fn search_url(&self, query: &str) -> Option<String> {
        let encoded = urlencoding::encode(query);
        let raw = if self.engine.contains(PLACEHOLDER) {
            self.engine.replace(PLACEHOLDER, &encoded)
        } else {
            format!("{}{encoded}", self.engine)
        };
        Url::parse(&raw).ok().map(Into::into)
    }
}

impl Default for InputResolver {
    fn default() -> Self {
        Self::from_config(&lite_config::LiteConfig::default())
    }
}
