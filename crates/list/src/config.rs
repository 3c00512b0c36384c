//! Per-panel configuration: data accessors and lifecycle callbacks.

use std::rc::Rc;

use anyhow::Result;
use ratatui::text::Line;
use revscope_core::HistoryItem;

/// Item count of the backing list.
pub type ItemsLenFn = Box<dyn Fn() -> usize>;

/// Styled lines for a contiguous row range `(start, count)`.
///
/// Supports partial re-render: the controller asks for just the visible
/// range when only the selection changed.
pub type DisplayLinesFn = Box<dyn Fn(usize, usize) -> Vec<Line<'static>>>;

/// Currently selected item. `None` means there is no selection, as distinct
/// from a selection whose item happens to render empty.
pub type SelectedItemFn = Box<dyn Fn() -> Option<Rc<dyn HistoryItem>>>;

/// Lifecycle callback; failures propagate to the caller of the navigation
/// operation that invoked it.
pub type LifecycleFn = Box<dyn FnMut() -> Result<()>>;

/// Configuration for one list panel, built once per panel instance.
pub struct ListPanelConfig {
    /// Name of the terminal view this panel renders into. The view is looked
    /// up per operation; an unmounted view makes the operation a no-op.
    pub view_name: String,

    /// Item count accessor (required).
    pub items_len: ItemsLenFn,

    /// Display line accessor. A panel without one cannot render, but
    /// navigation still works.
    pub display_lines: Option<DisplayLinesFn>,

    /// Selected item accessor (required).
    pub selected_item: SelectedItemFn,

    /// Invoked when the panel gains focus (unless a diffing mode is active).
    pub on_focus: Option<LifecycleFn>,

    /// Invoked when the panel loses focus; when absent, the horizontal
    /// scroll origin is reset instead.
    pub on_focus_lost: Option<LifecycleFn>,

    /// Invoked when the already-selected row of the already-focused panel is
    /// clicked again.
    pub on_click_selected_item: Option<LifecycleFn>,

    /// Re-render only the visible row range on focus changes. Useful when
    /// row content depends on which row is selected.
    pub render_selection: bool,
}

impl ListPanelConfig {
    /// Configuration with the required accessors; optional callbacks start
    /// unset and are assigned directly on the fields.
    pub fn new(
        view_name: impl Into<String>,
        items_len: impl Fn() -> usize + 'static,
        selected_item: impl Fn() -> Option<Rc<dyn HistoryItem>> + 'static,
    ) -> Self {
        Self {
            view_name: view_name.into(),
            items_len: Box::new(items_len),
            display_lines: None,
            selected_item: Box::new(selected_item),
            on_focus: None,
            on_focus_lost: None,
            on_click_selected_item: None,
            render_selection: false,
        }
    }
}
