//! Configuration management for revscope.
//!
//! Loading, saving, and validation of the TOML configuration, following XDG
//! directory conventions.

mod settings;
mod xdg;

pub use settings::{Config, GeneralSettings, LoggingSettings};
pub use xdg::{get_cache_dir, get_config_dir, get_data_dir};

use anyhow::Result;
use std::path::PathBuf;

/// Default values as constants
pub mod defaults {
    pub const SHOW_LIST_FOOTER: bool = true;
    pub const MIN_LOG_LEVEL: &str = "info";
    pub const LOG_MAX_ENTRIES: usize = 1000;
}

impl Config {
    /// Load configuration from file.
    ///
    /// On first run, creates the config file with default values.
    /// Missing keys are auto-completed with defaults and written back.
    pub fn load() -> Result<Self> {
        let config_path = Self::config_file_path()?;

        if config_path.exists() {
            let original_content = std::fs::read_to_string(&config_path)?;
            let config: Self = toml::from_str(&original_content)?;

            // Serialize back to get normalized content
            let normalized_content = toml::to_string_pretty(&config)?;
            if original_content != normalized_content {
                config.save()?;
            }

            Ok(config)
        } else {
            // First run - create config file with default values
            let config = Self::default();
            config.save()?;
            Ok(config)
        }
    }

    /// Save configuration to file.
    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_file_path()?;

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    /// Get path to config file.
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(get_config_dir()?.join("config.toml"))
    }

    /// Validate config content.
    pub fn validate_content(content: &str) -> Result<Config> {
        toml::from_str(content).map_err(|e| anyhow::anyhow!("{}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_round_trips() {
        let config = Config::default();
        let content = toml::to_string_pretty(&config).unwrap();
        let parsed = Config::validate_content(&content).unwrap();
        assert_eq!(
            parsed.general.show_list_footer,
            config.general.show_list_footer
        );
        assert_eq!(parsed.logging.min_level, config.logging.min_level);
    }

    #[test]
    fn test_missing_keys_fall_back_to_defaults() {
        let parsed = Config::validate_content("[general]\n").unwrap();
        assert!(parsed.general.show_list_footer);
        assert_eq!(parsed.logging.min_level, defaults::MIN_LOG_LEVEL);
        assert_eq!(parsed.logging.max_entries, defaults::LOG_MAX_ENTRIES);
    }

    #[test]
    fn test_invalid_content_is_rejected() {
        assert!(Config::validate_content("general = 3").is_err());
    }
}
