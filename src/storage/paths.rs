//! Data path utilities - uses ~/.local/share/periodic/ (per-user data dir)

use std::path::PathBuf;

const APP_DIR: &str = "periodic";
const DATA_FILE: &str = "data";

/// Get the per-user data directory.
/// Uses ~/.local/share/periodic/ on Linux, ~/Library/Application Support/periodic/
/// on macOS and %APPDATA%/periodic/ on Windows.
pub fn default_data_dir() -> PathBuf {
    let base = dirs::data_dir().unwrap_or_else(|| {
        // Fallback to ~/.local/share
        dirs::home_dir()
            .map(|h| h.join(".local").join("share"))
            .unwrap_or_else(|| PathBuf::from("."))
    });

    base.join(APP_DIR)
}

/// Get the default event log file path.
pub fn default_data_file() -> PathBuf {
    default_data_dir().join(DATA_FILE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_file_format() {
        let path = default_data_file();
        assert!(path.ends_with("periodic/data"));
    }
}
