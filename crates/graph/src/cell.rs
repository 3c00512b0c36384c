//! A single character cell of the commit graph.

use ratatui::style::Style;
use ratatui::text::Span;

const COMMIT_SYMBOL: char = '⎔';
const MERGE_SYMBOL: char = '⏣';

/// What a cell depicts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CellKind {
    /// Plain line segment, glyph chosen from the direction flags.
    #[default]
    Connection,
    /// A commit node; overrides the computed glyph.
    Commit,
    /// A merge commit node; overrides the computed glyph.
    Merge,
}

/// One character cell: which directions a line passes through it, what it
/// depicts, and how it is styled.
///
/// Each cell renders as two glyphs. The primary style always owns the
/// left/node glyph; the right connector glyph takes the secondary style when
/// one has been claimed, falling back to the primary style otherwise.
#[derive(Debug, Clone, Copy, Default)]
pub struct Cell {
    up: bool,
    down: bool,
    left: bool,
    right: bool,
    kind: CellKind,
    style: Style,
    right_style: Option<Style>,
}

impl Cell {
    /// A blank connection cell.
    pub fn new() -> Self {
        Self::default()
    }

    /// Render the cell as its two styled glyphs.
    pub fn render(&self) -> [Span<'static>; 2] {
        let (first, second) = box_drawing_chars(self.up, self.down, self.left, self.right);
        let first = match self.kind {
            CellKind::Connection => first,
            CellKind::Commit => COMMIT_SYMBOL,
            CellKind::Merge => MERGE_SYMBOL,
        };
        let right_style = self.right_style.unwrap_or(self.style);

        [
            Span::styled(first.to_string(), self.style),
            Span::styled(second.to_string(), right_style),
        ]
    }

    /// Clear the direction flags for the next render pass.
    ///
    /// Kind and styles are left untouched; callers that pool cells overwrite
    /// them through the mutators as the pass walks the graph.
    pub fn reset(&mut self) {
        self.up = false;
        self.down = false;
        self.left = false;
        self.right = false;
    }

    /// Mark a line entering from above. Vertical connections own the style.
    pub fn set_up(&mut self, style: Style) -> &mut Self {
        self.up = true;
        self.style = style;
        self
    }

    /// Mark a line leaving below. Vertical connections own the style.
    pub fn set_down(&mut self, style: Style) -> &mut Self {
        self.down = true;
        self.style = style;
        self
    }

    /// Mark a line entering from the left.
    ///
    /// A vertical line's style always wins over a horizontal pass-through's,
    /// so the style only lands if neither `up` nor `down` is set yet.
    pub fn set_left(&mut self, style: Style) -> &mut Self {
        self.left = true;
        if !self.up && !self.down {
            self.style = style;
        }
        self
    }

    /// Mark a line leaving to the right.
    ///
    /// The first caller claims the right-glyph style; later callers replace
    /// it only with `override_style`, letting the line a row belongs to win
    /// color contention where several branch lines cross the same cell.
    pub fn set_right(&mut self, style: Style, override_style: bool) -> &mut Self {
        self.right = true;
        if self.right_style.is_none() || override_style {
            self.right_style = Some(style);
        }
        self
    }

    /// Force the primary style.
    pub fn set_style(&mut self, style: Style) -> &mut Self {
        self.style = style;
        self
    }

    /// Force the cell kind.
    pub fn set_kind(&mut self, kind: CellKind) -> &mut Self {
        self.kind = kind;
        self
    }

    /// Primary style (left/node glyph).
    pub fn style(&self) -> Style {
        self.style
    }

    /// Claimed right-glyph style, if any.
    pub fn right_style(&self) -> Option<Style> {
        self.right_style
    }

    /// Cell kind.
    pub fn kind(&self) -> CellKind {
        self.kind
    }
}

/// Map a direction vector to its box-drawing glyph pair.
///
/// Total over all 16 combinations; the match is exhaustive, so a vector
/// outside the domain cannot exist. The right glyph continues the line
/// rightward (`─`) or stays blank, independent of the primary glyph.
pub fn box_drawing_chars(up: bool, down: bool, left: bool, right: bool) -> (char, char) {
    match (up, down, left, right) {
        (true, true, true, true) => ('│', '─'),
        (true, true, true, false) => ('│', ' '),
        (true, true, false, true) => ('│', '─'),
        (true, true, false, false) => ('│', ' '),
        (true, false, true, true) => ('┴', '─'),
        (true, false, true, false) => ('┘', ' '),
        (true, false, false, true) => ('└', '─'),
        (true, false, false, false) => ('╵', ' '),
        (false, true, true, true) => ('┬', '─'),
        (false, true, true, false) => ('┐', ' '),
        (false, true, false, true) => ('┌', '─'),
        (false, true, false, false) => ('╷', ' '),
        (false, false, true, true) => ('─', '─'),
        (false, false, true, false) => ('─', ' '),
        (false, false, false, true) => ('╶', '─'),
        (false, false, false, false) => (' ', ' '),
    }
}
