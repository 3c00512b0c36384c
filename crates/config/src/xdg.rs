//! XDG Base Directory support for revscope.

use anyhow::{Context, Result};
use std::path::PathBuf;

const APP_NAME: &str = "revscope";

/// Get the configuration directory following XDG conventions.
///
/// Returns `$XDG_CONFIG_HOME/revscope` or `~/.config/revscope`.
pub fn get_config_dir() -> Result<PathBuf> {
    dirs::config_dir()
        .map(|p| p.join(APP_NAME))
        .context("Failed to determine config directory")
}

/// Get the data directory following XDG conventions.
///
/// Returns `$XDG_DATA_HOME/revscope` or `~/.local/share/revscope`.
pub fn get_data_dir() -> Result<PathBuf> {
    dirs::data_dir()
        .map(|p| p.join(APP_NAME))
        .context("Failed to determine data directory")
}

/// Get the cache directory following XDG conventions.
///
/// Returns `$XDG_CACHE_HOME/revscope` or `~/.cache/revscope`.
pub fn get_cache_dir() -> Result<PathBuf> {
    dirs::cache_dir()
        .map(|p| p.join(APP_NAME))
        .context("Failed to determine cache directory")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_config_dir() {
        let dir = get_config_dir().unwrap();
        assert!(dir.ends_with("revscope"));
    }

    #[test]
    fn test_get_data_dir() {
        let dir = get_data_dir().unwrap();
        assert!(dir.ends_with("revscope"));
    }

    #[test]
    fn test_directories_are_different() {
        let config = get_config_dir().unwrap();
        let data = get_data_dir().unwrap();
        assert_ne!(config, data);
    }
}
