//! State types and data structures for revscope.
//!
//! This crate contains pure data types shared between panels and the
//! application shell, without dependencies on specific implementations.

use std::collections::HashSet;

/// Selection state backing a list panel.
///
/// The controller is the only writer; implementations just hold the index.
pub trait SelectionState {
    /// Currently selected row index.
    fn selected_line_idx(&self) -> usize;

    /// Replace the selected row index.
    fn set_selected_line_idx(&mut self, idx: usize);
}

/// Per-panel selection state.
///
/// The index is only meaningful while the owning list is non-empty; an empty
/// list leaves a stale value behind that must not be used to index the items.
#[derive(Debug, Clone, Copy, Default)]
pub struct PanelState {
    selected_line_idx: usize,
}

impl PanelState {
    /// Create panel state with the selection at the top.
    pub fn new() -> Self {
        Self::default()
    }
}

impl SelectionState for PanelState {
    fn selected_line_idx(&self) -> usize {
        self.selected_line_idx
    }

    fn set_selected_line_idx(&mut self, idx: usize) {
        self.selected_line_idx = idx;
    }
}

/// Process-wide focus state owned by the top-level UI coordinator.
///
/// Tracks which panel is the current input context and which panel names are
/// popups. Panels query this to decide whether navigation input should be
/// suppressed while a popup holds focus.
#[derive(Debug, Clone, Default)]
pub struct FocusRegistry {
    current_context: Option<String>,
    popup_panels: HashSet<String>,
}

impl FocusRegistry {
    /// Create an empty registry with no focused context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Name of the panel currently holding input focus, if any.
    pub fn current_context(&self) -> Option<&str> {
        self.current_context.as_deref()
    }

    /// Make the named panel the current input context.
    pub fn set_current_context(&mut self, name: impl Into<String>) {
        self.current_context = Some(name.into());
    }

    /// Clear the current input context.
    pub fn clear_current_context(&mut self) {
        self.current_context = None;
    }

    /// Declare a panel name as a popup.
    pub fn register_popup(&mut self, name: impl Into<String>) {
        self.popup_panels.insert(name.into());
    }

    /// Whether the named panel is a popup.
    pub fn is_popup_panel(&self, name: &str) -> bool {
        self.popup_panels.contains(name)
    }

    /// Whether the current input context is a popup panel.
    pub fn popup_panel_focused(&self) -> bool {
        self.current_context
            .as_deref()
            .is_some_and(|name| self.popup_panels.contains(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_panel_state_starts_at_top() {
        let state = PanelState::new();
        assert_eq!(state.selected_line_idx(), 0);
    }

    #[test]
    fn test_panel_state_set_and_get() {
        let mut state = PanelState::new();
        state.set_selected_line_idx(7);
        assert_eq!(state.selected_line_idx(), 7);
    }

    #[test]
    fn test_registry_starts_unfocused() {
        let registry = FocusRegistry::new();
        assert_eq!(registry.current_context(), None);
        assert!(!registry.popup_panel_focused());
    }

    #[test]
    fn test_popup_focused_only_for_registered_popups() {
        let mut registry = FocusRegistry::new();
        registry.register_popup("menu");
        registry.set_current_context("commits");
        assert!(!registry.popup_panel_focused());

        registry.set_current_context("menu");
        assert!(registry.popup_panel_focused());
    }

    #[test]
    fn test_is_popup_panel() {
        let mut registry = FocusRegistry::new();
        registry.register_popup("confirm");
        assert!(registry.is_popup_panel("confirm"));
        assert!(!registry.is_popup_panel("commits"));
    }

    #[test]
    fn test_clear_current_context() {
        let mut registry = FocusRegistry::new();
        registry.register_popup("menu");
        registry.set_current_context("menu");
        registry.clear_current_context();
        assert_eq!(registry.current_context(), None);
        assert!(!registry.popup_panel_focused());
    }
}
