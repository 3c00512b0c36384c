//! Commit graph rendering for revscope.
//!
//! A graph builder walks the commit connectivity column by column and marks
//! each character cell with the line directions passing through it; this
//! crate turns those cells into styled box-drawing rows.

mod cell;
mod row;

pub use cell::{box_drawing_chars, Cell, CellKind};
pub use row::{render_row, row_display_width, CellRow};
