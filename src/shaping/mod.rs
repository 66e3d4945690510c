//! Text shaping: grid rows become positioned glyph sequences.
//!
//! The grid side produces `ShapingRun`s (contiguous shapeable text with a
//! byte-to-column map); a `Shaper` turns each run into `ShapedGlyph`s. Two
//! implementations ship here: a monospace fallback that needs no font, and
//! a `rustybuzz`-backed shaper over caller-supplied font bytes.

pub mod harfbuzz;
pub mod monospace;
mod runs;

pub use harfbuzz::{HarfBuzzShaper, parse_features};
pub use monospace::MonospaceShaper;
pub use runs::segment_runs;

use crate::grid::Row;

/// A contiguous run of characters to shape together.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShapingRun {
    /// Text to shape (base chars + combining marks).
    pub text: String,
    /// Starting grid column of this run.
    pub col_start: usize,
    /// Mapping from byte offset in `text` to grid column index.
    pub byte_to_col: Vec<usize>,
}

/// One shaped glyph positioned on the grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShapedGlyph {
    /// Glyph index in the font (0 for unshaped fallback output).
    pub glyph_id: u16,
    /// Grid column this glyph starts at.
    pub col_start: usize,
    /// Number of columns the glyph covers (ligatures span several).
    pub col_span: usize,
    /// Horizontal offset within the cell, in pixels.
    pub x_offset: f32,
    /// Vertical offset from the baseline, in pixels.
    pub y_offset: f32,
}

/// The shaping transform.
///
/// Scratch buffers are per-call locals, so implementations carry no
/// per-call state; `unload_fonts` is the only lifecycle operation.
pub trait Shaper {
    /// Shape one run, appending glyphs to `output`.
    fn shape_run(&mut self, run: &ShapingRun, output: &mut Vec<ShapedGlyph>);

    /// Release font resources. Subsequent calls degrade to unshaped
    /// emission rather than failing.
    fn unload_fonts(&mut self) {}
}

/// Segment a row into runs and shape each one.
pub fn shape_line(row: &Row, cols: usize, shaper: &mut dyn Shaper) -> Vec<ShapedGlyph> {
    let mut output = Vec::new();
    for run in segment_runs(row, cols) {
        shaper.shape_run(&run, &mut output);
    }
    output
}
