//! The navigation state machine shared by every list panel.

use std::cell::RefCell;
use std::rc::Rc;

use anyhow::Result;

use revscope_config::{defaults, GeneralSettings};
use revscope_core::{HistoryItem, ListView, UiCoordinator};
use revscope_state::SelectionState;

use crate::config::ListPanelConfig;

/// Orchestrates one panel's selection state against externally supplied data
/// accessors and the terminal view.
///
/// The controller owns a reference to the panel's selection state but not to
/// the view or the coordinator: views are looked up by name per operation (an
/// unmounted view is a silent no-op), and the coordinator is passed into each
/// handler by the caller dispatching the input event.
pub struct ListController {
    config: ListPanelConfig,
    state: Rc<RefCell<dyn SelectionState>>,
    show_footer: bool,
}

impl ListController {
    pub fn new(config: ListPanelConfig, state: Rc<RefCell<dyn SelectionState>>) -> Self {
        Self {
            config,
            state,
            show_footer: defaults::SHOW_LIST_FOOTER,
        }
    }

    /// Cache interface settings ahead of rendering.
    pub fn apply_settings(&mut self, settings: &GeneralSettings) {
        self.show_footer = settings.show_list_footer;
    }

    /// Name of the terminal view this panel renders into.
    pub fn view_name(&self) -> &str {
        &self.config.view_name
    }

    /// Currently selected item, if any.
    pub fn selected_item(&self) -> Option<Rc<dyn HistoryItem>> {
        (self.config.selected_item)()
    }

    /// Identity of the selected item, or an empty string without a selection.
    pub fn selected_item_id(&self) -> String {
        self.selected_item()
            .map(|item| item.id())
            .unwrap_or_default()
    }

    /// Whether input should be suppressed: another panel's popup holds focus
    /// while this panel is not itself a popup.
    pub fn ignore_keybinding(&self, ui: &dyn UiCoordinator) -> bool {
        !ui.focus().is_popup_panel(&self.config.view_name) && ui.focus().popup_panel_focused()
    }

    /// Render the whole list into the view and trigger a screen redraw.
    pub fn on_render(&self, ui: &mut dyn UiCoordinator) -> Result<()> {
        if ui.view(&self.config.view_name).is_none() {
            return Ok(());
        }
        let Some(display_lines) = &self.config.display_lines else {
            return Ok(());
        };

        let items_len = (self.config.items_len)();
        self.refresh_selected_line(items_len);
        let lines = display_lines(0, items_len);

        if let Some(view) = ui.view(&self.config.view_name) {
            view.render_lines(0, lines);
            ui.redraw();
        }
        Ok(())
    }

    /// Render entry point used by the keybinding layer.
    pub fn handle_render(&self, ui: &mut dyn UiCoordinator) -> Result<()> {
        self.on_render(ui)
    }

    /// Scroll the selected row into view and refresh the selection-dependent
    /// parts of the panel.
    pub fn focus_line(&self, ui: &mut dyn UiCoordinator) {
        let selected_idx = self.selected_line_idx();
        let items_len = (self.config.items_len)();

        let Some(view) = ui.view(&self.config.view_name) else {
            return;
        };
        let (origin_x, _) = view.origin();
        view.focus_point(origin_x, selected_idx);

        if self.config.render_selection {
            if let Some(display_lines) = &self.config.display_lines {
                // Origin may have moved while focusing; re-read it.
                let (_, origin_y) = view.origin();
                let lines = display_lines(origin_y, view.inner_height());
                view.render_lines(origin_y, lines);
            }
        }

        if self.show_footer {
            view.set_footer(format_list_footer(selected_idx, items_len));
        }
    }

    /// Focus gained: reposition the view and run the focus hooks.
    pub fn handle_focus(&mut self, ui: &mut dyn UiCoordinator) -> Result<()> {
        if self.ignore_keybinding(ui) {
            return Ok(());
        }

        self.focus_line(ui);

        if ui.diffing_active() {
            return ui.render_diff();
        }
        if let Some(on_focus) = self.config.on_focus.as_mut() {
            return on_focus();
        }
        Ok(())
    }

    /// Focus lost: run the hook, or reset the horizontal scroll origin.
    pub fn handle_focus_lost(&mut self, ui: &mut dyn UiCoordinator) -> Result<()> {
        if let Some(on_focus_lost) = self.config.on_focus_lost.as_mut() {
            return on_focus_lost();
        }

        let Some(view) = ui.view(&self.config.view_name) else {
            return Ok(());
        };
        view.set_origin_x(0);
        Ok(())
    }

    /// Shift the selection by `delta`, clamped into range.
    ///
    /// Stepping past the first or last row is a no-op rather than a
    /// wraparound.
    pub fn handle_line_change(&mut self, ui: &mut dyn UiCoordinator, delta: isize) -> Result<()> {
        if self.ignore_keybinding(ui) {
            return Ok(());
        }

        let items_len = (self.config.items_len)();
        if items_len == 0 {
            return Ok(());
        }
        let selected_idx = self.selected_line_idx();
        if (delta < 0 && selected_idx == 0) || (delta > 0 && selected_idx == items_len - 1) {
            return Ok(());
        }

        self.change_selected_line(items_len, delta);
        self.handle_focus(ui)
    }

    pub fn handle_prev_line(&mut self, ui: &mut dyn UiCoordinator) -> Result<()> {
        self.handle_line_change(ui, -1)
    }

    pub fn handle_next_line(&mut self, ui: &mut dyn UiCoordinator) -> Result<()> {
        self.handle_line_change(ui, 1)
    }

    pub fn handle_prev_page(&mut self, ui: &mut dyn UiCoordinator) -> Result<()> {
        let Some(delta) = self.page_delta(ui) else {
            return Ok(());
        };
        self.handle_line_change(ui, -delta)
    }

    pub fn handle_next_page(&mut self, ui: &mut dyn UiCoordinator) -> Result<()> {
        let Some(delta) = self.page_delta(ui) else {
            return Ok(());
        };
        self.handle_line_change(ui, delta)
    }

    pub fn handle_goto_top(&mut self, ui: &mut dyn UiCoordinator) -> Result<()> {
        let items_len = (self.config.items_len)() as isize;
        self.handle_line_change(ui, -items_len)
    }

    pub fn handle_goto_bottom(&mut self, ui: &mut dyn UiCoordinator) -> Result<()> {
        let items_len = (self.config.items_len)() as isize;
        self.handle_line_change(ui, items_len)
    }

    pub fn handle_scroll_left(&mut self, ui: &mut dyn UiCoordinator) -> Result<()> {
        self.scroll(ui, |view| view.scroll_left())
    }

    pub fn handle_scroll_right(&mut self, ui: &mut dyn UiCoordinator) -> Result<()> {
        self.scroll(ui, |view| view.scroll_right())
    }

    /// Select the clicked row and focus this panel.
    ///
    /// Clicking the already-selected row of the already-focused panel runs
    /// the dedicated callback instead of the focus routine.
    pub fn handle_click(&mut self, ui: &mut dyn UiCoordinator) -> Result<()> {
        if self.ignore_keybinding(ui) {
            return Ok(());
        }

        let prev_selected_idx = self.selected_line_idx();
        let Some(view) = ui.view(&self.config.view_name) else {
            return Ok(());
        };
        let new_selected_idx = view.clicked_line_idx();
        let was_current_context =
            ui.focus().current_context() == Some(self.config.view_name.as_str());

        ui.push_context(&self.config.view_name)?;

        if new_selected_idx >= (self.config.items_len)() {
            return Ok(());
        }
        self.set_selected_line_idx(new_selected_idx);

        if prev_selected_idx == new_selected_idx && was_current_context {
            if let Some(on_click_selected_item) = self.config.on_click_selected_item.as_mut() {
                return on_click_selected_item();
            }
        }
        self.handle_focus(ui)
    }

    /// Jump the selection to a search match.
    pub fn on_search_select(
        &mut self,
        ui: &mut dyn UiCoordinator,
        selected_idx: usize,
    ) -> Result<()> {
        self.set_selected_line_idx(selected_idx);
        self.handle_focus(ui)
    }

    fn selected_line_idx(&self) -> usize {
        self.state.borrow().selected_line_idx()
    }

    fn set_selected_line_idx(&self, idx: usize) {
        self.state.borrow_mut().set_selected_line_idx(idx);
    }

    /// Clamp a stale selection into the current item range.
    fn refresh_selected_line(&self, items_len: usize) {
        if items_len == 0 {
            return;
        }
        if self.selected_line_idx() > items_len - 1 {
            self.set_selected_line_idx(items_len - 1);
        }
    }

    fn change_selected_line(&self, items_len: usize, delta: isize) {
        let target = (self.selected_line_idx() as isize).saturating_add(delta);
        self.set_selected_line_idx(target.clamp(0, items_len as isize - 1) as usize);
    }

    fn page_delta(&self, ui: &mut dyn UiCoordinator) -> Option<isize> {
        let view = ui.view(&self.config.view_name)?;
        Some(view.inner_height() as isize)
    }

    fn scroll(
        &mut self,
        ui: &mut dyn UiCoordinator,
        scroll_view: impl FnOnce(&mut dyn ListView),
    ) -> Result<()> {
        if self.ignore_keybinding(ui) {
            return Ok(());
        }

        let Some(view) = ui.view(&self.config.view_name) else {
            return Ok(());
        };
        scroll_view(view);

        self.handle_focus(ui)
    }
}

fn format_list_footer(selected_line_idx: usize, items_len: usize) -> String {
    format!("{} of {}", selected_line_idx + 1, items_len)
}
