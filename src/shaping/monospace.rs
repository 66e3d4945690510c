//! Monospace fallback shaper: one glyph slot per character.

use unicode_width::UnicodeWidthChar;

use super::{ShapedGlyph, Shaper, ShapingRun};

/// Shaper that needs no font: emits glyph id 0 per character with
/// unicode-width column spans. Useful for tests and for rendering before
/// any font has loaded.
#[derive(Debug, Clone, Copy, Default)]
pub struct MonospaceShaper;

impl Shaper for MonospaceShaper {
    fn shape_run(&mut self, run: &ShapingRun, output: &mut Vec<ShapedGlyph>) {
        emit_monospace(run, output);
    }
}

/// Emit one glyph per character without shaping.
///
/// Combining marks occupy no column and emit no glyph of their own.
pub(super) fn emit_monospace(run: &ShapingRun, output: &mut Vec<ShapedGlyph>) {
    let mut col = run.col_start;
    for ch in run.text.chars() {
        let width = UnicodeWidthChar::width(ch).unwrap_or(1);
        if width == 0 {
            continue;
        }
        output.push(ShapedGlyph {
            glyph_id: 0,
            col_start: col,
            col_span: width,
            x_offset: 0.0,
            y_offset: 0.0,
        });
        col += width;
    }
}
