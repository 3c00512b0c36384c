//! Core types and traits for revscope panels.
//!
//! Panels are decoupled from the application shell: the traits here describe
//! the capabilities a panel needs from its collaborators (the terminal view
//! and the top-level UI coordinator) without pulling in an implementation.

mod item;
mod view;

pub use item::HistoryItem;
pub use view::{ListView, UiCoordinator};
