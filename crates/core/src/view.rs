//! Collaborator traits: the terminal view and the top-level UI coordinator.
//!
//! Both are implemented outside this workspace (by the terminal backend and
//! the application shell). Panels hold neither — views are looked up by name
//! per operation, and the coordinator is passed into each handler.

use anyhow::Result;
use ratatui::text::Line;
use revscope_state::FocusRegistry;

/// Capabilities a list panel requires from its terminal view.
///
/// A view is a rectangular terminal region with its own scroll origin and
/// footer. It may not exist yet when an operation runs (panel not mounted);
/// callers treat that as a silent no-op, not an error.
pub trait ListView {
    /// Current viewport origin as `(x, y)`.
    fn origin(&self) -> (usize, usize);

    /// Set the horizontal scroll origin.
    fn set_origin_x(&mut self, x: usize);

    /// Number of visible content rows, used as the page-scroll delta.
    fn inner_height(&self) -> usize;

    /// Scroll the given position into view and highlight the row.
    fn focus_point(&mut self, x: usize, y: usize);

    /// Replace the footer text.
    fn set_footer(&mut self, footer: String);

    /// Render styled rows starting at the given row offset.
    fn render_lines(&mut self, origin_y: usize, lines: Vec<Line<'static>>);

    /// Row index under the most recent mouse click.
    fn clicked_line_idx(&self) -> usize;

    /// Scroll left by the view-defined amount.
    fn scroll_left(&mut self);

    /// Scroll right by the view-defined amount.
    fn scroll_right(&mut self);
}

/// Capabilities a panel requires from the application shell.
///
/// The coordinator owns the view registry, the focus state, and the global
/// rendering modes a panel has to respect.
pub trait UiCoordinator {
    /// Look up a view by name. `None` means the view is not mounted.
    fn view(&mut self, name: &str) -> Option<&mut dyn ListView>;

    /// Process-wide focus state.
    fn focus(&self) -> &FocusRegistry;

    /// Make the named panel the current input context.
    fn push_context(&mut self, name: &str) -> Result<()>;

    /// Trigger a full screen redraw.
    fn redraw(&mut self);

    /// Whether a commit-diffing mode is active.
    fn diffing_active(&self) -> bool;

    /// Render the diff for the current selection.
    fn render_diff(&mut self) -> Result<()>;
}
