//! End-to-end wiring: a commit list rendered through the graph engine and
//! driven through the navigation controller against a fake terminal view.

use std::cell::RefCell;
use std::rc::Rc;

use anyhow::Result;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};

use revscope::{
    Cell, CellKind, Config, FocusRegistry, HistoryItem, ListController, ListPanelConfig, ListView,
    PanelState, SelectionState, UiCoordinator,
};

#[derive(Clone)]
struct Commit {
    hash: &'static str,
    subject: &'static str,
    merge: bool,
}

impl HistoryItem for Commit {
    fn id(&self) -> String {
        self.hash.to_string()
    }

    fn description(&self) -> String {
        format!("{}: {}", self.hash, self.subject)
    }
}

fn commits() -> Rc<Vec<Commit>> {
    Rc::new(vec![
        Commit { hash: "f00dfeed", subject: "merge feature", merge: true },
        Commit { hash: "cafe4b1d", subject: "tweak footer", merge: false },
        Commit { hash: "deadbeef", subject: "initial import", merge: false },
    ])
}

/// One graph-decorated display line per commit, the way a graph builder
/// would feed the panel.
fn graph_line(commit: &Commit, first: bool, last: bool) -> Line<'static> {
    let trunk = Style::default().fg(Color::Green);
    let branch = Style::default().fg(Color::Magenta);

    let mut cell = Cell::new();
    if !first {
        cell.set_up(trunk);
    }
    if !last {
        cell.set_down(trunk);
    }
    if commit.merge {
        cell.set_right(branch, false);
        cell.set_kind(CellKind::Merge);
    } else {
        cell.set_kind(CellKind::Commit);
    }

    let mut line = revscope::render_row(&[cell]);
    line.spans.push(Span::raw(" "));
    line.spans.push(Span::raw(commit.subject));
    line
}

#[derive(Default)]
struct FakeView {
    origin: (usize, usize),
    inner_height: usize,
    footer: Option<String>,
    focus_point: Option<(usize, usize)>,
    rows: Vec<String>,
    clicked_line_idx: usize,
}

impl ListView for FakeView {
    fn origin(&self) -> (usize, usize) {
        self.origin
    }

    fn set_origin_x(&mut self, x: usize) {
        self.origin.0 = x;
    }

    fn inner_height(&self) -> usize {
        self.inner_height
    }

    fn focus_point(&mut self, x: usize, y: usize) {
        self.focus_point = Some((x, y));
    }

    fn set_footer(&mut self, footer: String) {
        self.footer = Some(footer);
    }

    fn render_lines(&mut self, origin_y: usize, lines: Vec<Line<'static>>) {
        self.rows.truncate(origin_y);
        for line in lines {
            self.rows
                .push(line.spans.iter().map(|s| s.content.as_ref()).collect());
        }
    }

    fn clicked_line_idx(&self) -> usize {
        self.clicked_line_idx
    }

    fn scroll_left(&mut self) {
        self.origin.0 = self.origin.0.saturating_sub(2);
    }

    fn scroll_right(&mut self) {
        self.origin.0 += 2;
    }
}

struct FakeUi {
    view: FakeView,
    focus: FocusRegistry,
    redraws: usize,
}

impl UiCoordinator for FakeUi {
    fn view(&mut self, name: &str) -> Option<&mut dyn ListView> {
        (name == "commits").then_some(&mut self.view as &mut dyn ListView)
    }

    fn focus(&self) -> &FocusRegistry {
        &self.focus
    }

    fn push_context(&mut self, name: &str) -> Result<()> {
        self.focus.set_current_context(name);
        Ok(())
    }

    fn redraw(&mut self) {
        self.redraws += 1;
    }

    fn diffing_active(&self) -> bool {
        false
    }

    fn render_diff(&mut self) -> Result<()> {
        Ok(())
    }
}

fn make_panel() -> (ListController, Rc<RefCell<PanelState>>, FakeUi) {
    let items = commits();
    let state = Rc::new(RefCell::new(PanelState::new()));

    let items_for_len = Rc::clone(&items);
    let items_for_selected = Rc::clone(&items);
    let state_for_selected = Rc::clone(&state);
    let items_for_lines = Rc::clone(&items);

    let mut config = ListPanelConfig::new(
        "commits",
        move || items_for_len.len(),
        move || {
            let idx = state_for_selected.borrow().selected_line_idx();
            items_for_selected
                .get(idx)
                .map(|commit| Rc::new(commit.clone()) as Rc<dyn HistoryItem>)
        },
    );
    config.display_lines = Some(Box::new(move |start, count| {
        let last = items_for_lines.len() - 1;
        items_for_lines
            .iter()
            .enumerate()
            .skip(start)
            .take(count)
            .map(|(idx, commit)| graph_line(commit, idx == 0, idx == last))
            .collect()
    }));

    let shared: Rc<RefCell<dyn SelectionState>> = state.clone();
    let controller = ListController::new(config, shared);
    let ui = FakeUi {
        view: FakeView {
            inner_height: 2,
            ..FakeView::default()
        },
        focus: FocusRegistry::new(),
        redraws: 0,
    };
    (controller, state, ui)
}

#[test]
fn renders_graph_decorated_rows() {
    let (controller, _state, mut ui) = make_panel();

    controller.on_render(&mut ui).unwrap();
    assert_eq!(ui.redraws, 1);
    assert_eq!(
        ui.view.rows,
        vec!["⏣─ merge feature", "⎔  tweak footer", "⎔  initial import"]
    );
}

#[test]
fn navigation_moves_selection_and_footer() {
    let (mut controller, state, mut ui) = make_panel();

    controller.handle_next_line(&mut ui).unwrap();
    controller.handle_next_line(&mut ui).unwrap();
    controller.handle_next_line(&mut ui).unwrap();
    assert_eq!(state.borrow().selected_line_idx(), 2);
    assert_eq!(ui.view.footer.as_deref(), Some("3 of 3"));
    assert_eq!(ui.view.focus_point, Some((0, 2)));

    controller.handle_goto_top(&mut ui).unwrap();
    assert_eq!(ui.view.footer.as_deref(), Some("1 of 3"));
}

#[test]
fn click_focuses_panel_and_reports_identity() {
    let (mut controller, _state, mut ui) = make_panel();
    ui.view.clicked_line_idx = 1;

    controller.handle_click(&mut ui).unwrap();
    assert_eq!(ui.focus.current_context(), Some("commits"));
    assert_eq!(controller.selected_item_id(), "cafe4b1d");
    assert_eq!(
        controller.selected_item().unwrap().description(),
        "cafe4b1d: tweak footer"
    );
}

#[test]
fn search_jump_lands_on_match() {
    let (mut controller, state, mut ui) = make_panel();

    controller.on_search_select(&mut ui, 2).unwrap();
    assert_eq!(state.borrow().selected_line_idx(), 2);
    assert_eq!(ui.view.footer.as_deref(), Some("3 of 3"));
}

#[test]
fn logging_initializes_from_config() {
    let dir = tempfile::tempdir().unwrap();
    let log_path = dir.path().join("revscope.log");

    let mut config = Config::default();
    config.logging.file_path = Some(log_path.to_string_lossy().into_owned());
    revscope::init_logging(&config).unwrap();
    revscope::logger::debug("navigation test run");

    let content = std::fs::read_to_string(&log_path).unwrap();
    assert!(content.contains("INFO: Logging initialized"));
    let entries = revscope::logger::get_entries();
    assert!(!entries.is_empty());
}
