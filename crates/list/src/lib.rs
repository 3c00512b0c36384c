//! List panel navigation for revscope.
//!
//! Every list-like panel (commits, files, stash entries, branches) shares one
//! navigation state machine: scrolling, paging, search jumps, click handling,
//! focus transfer, and suppression while a popup holds input.

mod config;
mod controller;

pub use config::{DisplayLinesFn, ItemsLenFn, LifecycleFn, ListPanelConfig, SelectedItemFn};
pub use controller::ListController;
