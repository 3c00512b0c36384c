//! Row assembly: cells to styled lines.

use ratatui::text::Line;
use unicode_width::UnicodeWidthStr;

use crate::cell::Cell;

/// Concatenate a row of cells, left to right, into one styled line.
pub fn render_row(cells: &[Cell]) -> Line<'static> {
    let mut spans = Vec::with_capacity(cells.len() * 2);
    for cell in cells {
        spans.extend(cell.render());
    }
    Line::from(spans)
}

/// Display width of a rendered row, for horizontal-scroll clamping.
pub fn row_display_width(line: &Line<'_>) -> usize {
    line.spans
        .iter()
        .map(|span| span.content.as_ref().width())
        .sum()
}

/// Pooled buffer of cells for one graph row.
///
/// A render pass addresses cells by column as it walks the graph; the buffer
/// grows on demand and is reused between passes through [`CellRow::reset`].
/// Cells must never be shared between two in-progress passes.
#[derive(Debug, Default)]
pub struct CellRow {
    cells: Vec<Cell>,
}

impl CellRow {
    /// An empty row.
    pub fn new() -> Self {
        Self::default()
    }

    /// A row pre-sized for the given number of columns.
    pub fn with_columns(columns: usize) -> Self {
        Self {
            cells: vec![Cell::new(); columns],
        }
    }

    /// Mutable cell at `column`, growing the row with blank cells as needed.
    pub fn cell_at(&mut self, column: usize) -> &mut Cell {
        if column >= self.cells.len() {
            self.cells.resize_with(column + 1, Cell::new);
        }
        &mut self.cells[column]
    }

    /// Cells in column order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Number of columns currently in the row.
    pub fn columns(&self) -> usize {
        self.cells.len()
    }

    /// Clear every cell's direction flags before the next pass.
    pub fn reset(&mut self) {
        for cell in &mut self.cells {
            cell.reset();
        }
    }

    /// Render the row into one styled line.
    pub fn render(&self) -> Line<'static> {
        render_row(&self.cells)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::CellKind;
    use ratatui::style::{Color, Style};

    fn style(color: Color) -> Style {
        Style::default().fg(color)
    }

    fn line_text(line: &Line<'_>) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_render_row_concatenates_cells() {
        let mut row = CellRow::new();
        row.cell_at(0)
            .set_up(style(Color::Red))
            .set_down(style(Color::Red))
            .set_kind(CellKind::Commit);
        row.cell_at(1)
            .set_left(style(Color::Red))
            .set_right(style(Color::Red), false);

        assert_eq!(line_text(&row.render()), "⎔ ──");
    }

    #[test]
    fn test_cell_at_grows_with_blanks() {
        let mut row = CellRow::new();
        row.cell_at(2).set_up(style(Color::Blue)).set_down(style(Color::Blue));

        assert_eq!(row.columns(), 3);
        assert_eq!(line_text(&row.render()), "    │ ");
    }

    #[test]
    fn test_reset_reuses_buffer() {
        let mut row = CellRow::with_columns(2);
        row.cell_at(0).set_up(style(Color::Red)).set_down(style(Color::Red));
        row.cell_at(1).set_left(style(Color::Red));
        row.reset();

        assert_eq!(row.columns(), 2);
        assert_eq!(line_text(&row.render()), "    ");
    }

    #[test]
    fn test_row_display_width() {
        let mut row = CellRow::new();
        row.cell_at(0)
            .set_down(style(Color::Red))
            .set_right(style(Color::Red), false);
        row.cell_at(1).set_left(style(Color::Red));

        let line = row.render();
        assert_eq!(row_display_width(&line), 4);
    }
}
