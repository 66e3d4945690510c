//! Content scrolling into scrollback.
//!
//! New output at the bottom pushes the top visible row into the scrollback
//! ring. This is distinct from viewport scrolling, which only moves
//! `display_offset`.

use super::Grid;
use super::row::Row;

impl Grid {
    /// Scroll the live screen up by `count` rows, moving the topmost rows
    /// into scrollback and appending blank rows at the bottom.
    ///
    /// While the viewport is scrolled back, the offset is re-anchored per
    /// row: +1 when the ring grows (the anchored content moved further from
    /// the live bottom), -1 when the push evicts the oldest row (so the
    /// viewport does not drift past the top of retained history).
    pub fn scroll_up_into_history(&mut self, count: usize) {
        let count = count.min(self.lines);
        for _ in 0..count {
            let scrolled = self.rows.remove(0);

            if self.scrollback.len() >= self.scrollback.max_scrollback() {
                if self.display_offset > 0 {
                    self.display_offset = self.display_offset.saturating_sub(1);
                }
            } else if self.display_offset > 0 {
                self.display_offset += 1;
            }
            self.scrollback.push(scrolled);

            self.rows.push(Row::new(self.cols));
        }
    }
}
