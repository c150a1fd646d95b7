mod resolve;

pub use resolve::{data_dir, webview_data_dir};

use std::path::PathBuf;

use lite_common::PlatformError;

/// Creates the profile directory if it does not already exist.
pub fn ensure_dirs() -> Result<PathBuf, PlatformError> {
    let dir = webview_data_dir()?;
    std::fs::create_dir_all(&dir).map_err(|e| PlatformError::PathError(e.to_string()))?;
    Ok(dir)
}
