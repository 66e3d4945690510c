//! Text extraction from a grid selection.

use crate::cell::CellFlags;
use crate::grid::{Grid, Row};
use crate::index::Line;

use super::Selection;

/// Extract the selected text from the grid.
///
/// Lines are resolved through `Grid::buffer_row`, so a selection that has
/// been scrolled partly into history still extracts in full; lines older
/// than the retained history contribute nothing. Rows are joined with `\n`
/// unless the row soft-wraps onto the next one.
pub fn extract_text(grid: &Grid, selection: &Selection) -> String {
    let (nb, ne) = (selection.nb(), selection.ne());
    let mut result = String::new();

    for line in nb.line.0..=ne.line.0 {
        let Some(row) = grid.buffer_row(Line(line)) else {
            continue;
        };

        let col_start = if line == nb.line.0 {
            nb.effective_start_col()
        } else {
            0
        };
        let col_end = if line == ne.line.0 {
            ne.effective_end_col()
        } else {
            row.cols().saturating_sub(1)
        };

        let text = cells_to_text(row, col_start, col_end);

        // Soft-wrapped rows continue without a newline or trailing trim.
        if row.is_wrapped() && line < ne.line.0 {
            result.push_str(&text);
        } else {
            result.push_str(text.trim_end());
            if line < ne.line.0 {
                result.push('\n');
            }
        }
    }

    result
}

/// Collect visible cell characters from `col_start..=col_end`.
///
/// Skips wide-char spacers and replaces nulls with spaces.
fn cells_to_text(row: &Row, col_start: usize, col_end: usize) -> String {
    let mut text = String::new();
    let last = col_end.min(row.cols().saturating_sub(1));
    for col in col_start..=last {
        let cell = &row[crate::index::Column(col)];
        if cell.flags.contains(CellFlags::WIDE_CHAR_SPACER)
            || cell.flags.contains(CellFlags::LEADING_WIDE_CHAR_SPACER)
        {
            continue;
        }
        text.push(if cell.ch == '\0' { ' ' } else { cell.ch });
        for &zw in cell.zerowidth() {
            text.push(zw);
        }
    }
    text
}
