use std::path::PathBuf;

use lite_common::PlatformError;

pub(super) const APP_NAME: &str = "lite";

/// Platform data directory for the browser.
///
/// - macOS: `~/Library/Application Support/lite`
/// - Linux: `$XDG_DATA_HOME/lite` (defaults to `~/.local/share/lite`)
/// - Windows: `%APPDATA%\lite`
pub fn data_dir() -> Result<PathBuf, PlatformError> {
    Ok(dirs::data_dir()
        .ok_or_else(|| PlatformError::PathError("could not determine data directory".into()))?
        .join(APP_NAME))
}

/// Browsing profile (cookies, storage, cache) shared by every tab surface.
pub fn webview_data_dir() -> Result<PathBuf, PlatformError> {
    Ok(data_dir()?.join("webview"))
}
