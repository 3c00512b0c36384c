//! Revscope — interactive core of a terminal-based history browser.
//!
//! The workspace crates split the core into the pieces an embedding
//! application wires together:
//!
//! - `revscope-core` — item and collaborator traits (terminal view, UI
//!   coordinator)
//! - `revscope-state` — panel selection state and the process-wide focus
//!   registry
//! - `revscope-list` — the navigation controller shared by every list panel
//! - `revscope-graph` — commit-graph cells and the box-drawing row renderer
//! - `revscope-config` — TOML configuration with XDG directories
//! - `revscope-logger` — file plus in-memory logging
//!
//! The terminal backend, the data source, keybinding dispatch, and popup
//! content are collaborators supplied by the application; revscope defines
//! the traits they implement.

pub use revscope_config::{defaults, get_config_dir, get_data_dir, Config, GeneralSettings, LoggingSettings};
pub use revscope_core::{HistoryItem, ListView, UiCoordinator};
pub use revscope_graph::{
    box_drawing_chars, render_row, row_display_width, Cell, CellKind, CellRow,
};
pub use revscope_list::{ListController, ListPanelConfig};
pub use revscope_state::{FocusRegistry, PanelState, SelectionState};

pub use revscope_logger as logger;

use anyhow::Result;
use std::path::PathBuf;
use std::str::FromStr;

/// Initialize the global logger from the logging settings.
///
/// Falls back to the data directory when no file path is configured, and to
/// `info` when the configured level does not parse.
pub fn init_logging(config: &Config) -> Result<()> {
    let file_path = match &config.logging.file_path {
        Some(path) => PathBuf::from(path),
        None => get_data_dir()?.join("revscope.log"),
    };
    let min_level =
        logger::LogLevel::from_str(&config.logging.min_level).unwrap_or(logger::LogLevel::Info);

    logger::init(file_path, config.logging.max_entries, min_level);
    logger::info("Logging initialized");
    Ok(())
}
