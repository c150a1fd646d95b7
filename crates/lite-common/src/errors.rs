use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),
}

#[derive(Debug, thiserror::Error)]
pub enum PlatformError {
    #[error("path error: {0}")]
    PathError(String),

    #[error("not supported: {0}")]
    NotSupported(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_display() {
        let err = ConfigError::FileNotFound(PathBuf::from("/tmp/missing.toml"));
        assert_eq!(err.to_string(), "config file not found: /tmp/missing.toml");

        let err = ConfigError::ParseError("unexpected token".into());
        assert_eq!(err.to_string(), "config parse error: unexpected token");

        let err = ConfigError::ValidationError("sidebar.width = 5 is out of range".into());
        assert_eq!(
            err.to_string(),
            "config validation error: sidebar.width = 5 is out of range"
        );
    }

    #[test]
    fn platform_error_display() {
        let err = PlatformError::PathError("no home".into());
        assert_eq!(err.to_string(), "path error: no home");

        let err = PlatformError::NotSupported("empty keybind string".into());
        assert_eq!(err.to_string(), "not supported: empty keybind string");
    }
}
