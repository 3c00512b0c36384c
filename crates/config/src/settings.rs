//! Configuration structures for revscope settings.

use serde::{Deserialize, Serialize};

use crate::defaults;

/// Application configuration with nested sections.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// General interface settings
    #[serde(default)]
    pub general: GeneralSettings,

    /// Logging settings
    #[serde(default)]
    pub logging: LoggingSettings,
}

/// General interface settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralSettings {
    /// Show the "n of m" footer on list panels
    #[serde(default = "default_show_list_footer")]
    pub show_list_footer: bool,
}

/// Logging settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingSettings {
    /// Log file path (optional; data directory when unset)
    #[serde(default)]
    pub file_path: Option<String>,

    /// Minimum log level (debug, info, warn, error)
    #[serde(default = "default_min_level")]
    pub min_level: String,

    /// Maximum number of log entries kept in memory
    #[serde(default = "default_log_max_entries")]
    pub max_entries: usize,
}

// Default value functions for serde
fn default_show_list_footer() -> bool {
    defaults::SHOW_LIST_FOOTER
}

fn default_min_level() -> String {
    defaults::MIN_LOG_LEVEL.to_string()
}

fn default_log_max_entries() -> usize {
    defaults::LOG_MAX_ENTRIES
}

impl Default for GeneralSettings {
    fn default() -> Self {
        Self {
            show_list_footer: default_show_list_footer(),
        }
    }
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            file_path: None,
            min_level: default_min_level(),
            max_entries: default_log_max_entries(),
        }
    }
}
