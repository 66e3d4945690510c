//! The terminal grid: visible rows, scrollback history, and the display
//! offset that scrolls the viewport into that history.
//!
//! The grid stores `lines` visible rows (index 0 = top of screen) plus a
//! bounded ring of history rows. `display_offset` counts how many rows the
//! viewport is scrolled back from the live bottom; 0 means live.

pub mod dirty;
pub mod ring;
pub mod row;
mod scroll;

use unicode_width::UnicodeWidthChar;

use crate::cell::{Cell, CellFlags};
use crate::index::{Column, Line};

pub use dirty::DirtyTracker;
pub use ring::{DEFAULT_MAX_SCROLLBACK, ScrollbackBuffer};
pub use row::Row;

/// The cell grid with scrollback.
///
/// Invariant: `0 <= display_offset <= scrollback.len() <= max_scrollback`.
#[derive(Debug, Clone)]
pub struct Grid {
    /// Visible rows (index 0 = top of screen).
    rows: Vec<Row>,
    /// Number of columns.
    cols: usize,
    /// Number of visible lines.
    lines: usize,
    /// Rows scrolled off the top, newest first.
    pub scrollback: ScrollbackBuffer,
    /// Rows the viewport is scrolled back from the live bottom.
    pub display_offset: usize,
}

impl Grid {
    /// Create a new grid with the default scrollback limit.
    pub fn new(lines: usize, cols: usize) -> Self {
        Self::with_scrollback(lines, cols, DEFAULT_MAX_SCROLLBACK)
    }

    /// Create a new grid with the given scrollback limit.
    pub fn with_scrollback(lines: usize, cols: usize, max_scrollback: usize) -> Self {
        Self {
            rows: (0..lines).map(|_| Row::new(cols)).collect(),
            cols,
            lines,
            scrollback: ScrollbackBuffer::new(max_scrollback),
            display_offset: 0,
        }
    }

    /// Number of visible lines.
    pub fn lines(&self) -> usize {
        self.lines
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Live row by screen index (ignores the display offset).
    pub fn row(&self, line: usize) -> &Row {
        &self.rows[line]
    }

    /// Mutable live row by screen index.
    pub fn row_mut(&mut self, line: usize) -> &mut Row {
        &mut self.rows[line]
    }

    /// Row shown at viewport position `line` under the current offset.
    pub fn visible_row(&self, line: usize) -> &Row {
        self.buffer_row(Line(line as i32)).unwrap_or(&self.rows[line])
    }

    /// Resolve a viewport-relative line to a retained buffer row.
    ///
    /// Negative lines reach into history above the viewport; lines at or
    /// past the viewport height reach toward the live bottom. Returns
    /// `None` when the line is older than the retained history or below
    /// the live screen.
    pub fn buffer_row(&self, line: Line) -> Option<&Row> {
        let history = self.scrollback.len();
        // Absolute index into history + live rows; 0 = oldest retained row.
        let absolute = i64::from(line.0) + history as i64 - self.display_offset as i64;
        if absolute < 0 {
            return None;
        }
        let absolute = absolute as usize;
        if absolute < history {
            // Ring logical index 0 is the newest history row.
            self.scrollback.get(history - 1 - absolute)
        } else {
            self.rows.get(absolute - history)
        }
    }

    /// Write text into a live row starting at `col`.
    ///
    /// Handles wide characters (cell + spacer) and combining marks, which
    /// attach to the preceding base cell. Text past the last column is
    /// dropped.
    pub fn write_text(&mut self, line: usize, col: usize, text: &str) {
        if line >= self.lines {
            return;
        }
        let mut col = col;
        for ch in text.chars() {
            let width = UnicodeWidthChar::width(ch).unwrap_or(1);
            if width == 0 {
                if let Some(base) = self.zerowidth_base(line, col) {
                    self.rows[line][Column(base)].push_zerowidth(ch);
                }
                continue;
            }
            if col + width > self.cols {
                break;
            }
            if width == 2 {
                let mut cell = Cell::new(ch);
                cell.flags.insert(CellFlags::WIDE_CHAR);
                self.rows[line].write(Column(col), cell);

                let mut spacer = Cell::default();
                spacer.flags.insert(CellFlags::WIDE_CHAR_SPACER);
                self.rows[line].write(Column(col + 1), spacer);
                col += 2;
            } else {
                self.rows[line].write(Column(col), Cell::new(ch));
                col += 1;
            }
        }
    }

    /// Snap the viewport back to the live bottom (new input arrived).
    pub fn reset_display_offset(&mut self) {
        self.display_offset = 0;
    }

    /// Base cell column for a combining mark written at `col`.
    ///
    /// Steps over a wide-char spacer so the mark lands on the wide cell.
    fn zerowidth_base(&self, line: usize, col: usize) -> Option<usize> {
        let base = col.checked_sub(1)?;
        if base >= self.cols {
            return None;
        }
        if self.rows[line][Column(base)]
            .flags
            .contains(CellFlags::WIDE_CHAR_SPACER)
        {
            return base.checked_sub(1);
        }
        Some(base)
    }
}
