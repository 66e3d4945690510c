//! Viewport scrolling operations.
//!
//! Two families: the plain operations run the strict translate-or-clear
//! routine on the selection, and the `_keep_selection` operations translate
//! it in place, clearing only when both endpoints leave the same side of
//! the screen. The magnitude argument's sign is ignored; direction is
//! encoded in the operation.

use crate::config::Config;
use crate::index::Line;

use super::{ScrollHooks, ScrollView};

impl<H: ScrollHooks> ScrollView<H> {
    /// Scroll the viewport toward the live bottom.
    ///
    /// Clamped to the current offset. A view already at the live bottom
    /// does nothing. The selection is translated up-screen and cleared
    /// unless it stays fully visible.
    pub fn scroll_down(&mut self, lines: i32) {
        let n = (lines.unsigned_abs() as usize).min(self.grid.display_offset);
        if self.grid.display_offset > 0 {
            self.grid.display_offset -= n;
            self.scroll_selection(-(n as i32));
            self.dirty.mark_all();
            if n > 0 {
                self.hooks.overlay_scrolled(-(n as i32));
                self.hooks.restore_mouse_cursor();
            }
        }
    }

    /// Scroll the viewport up into history.
    ///
    /// Clamped to the remaining history above the viewport; a zero-row
    /// scroll returns without any side effects. The selection is translated
    /// down-screen and cleared unless it stays fully visible.
    pub fn scroll_up(&mut self, lines: i32) {
        let remaining = self.grid.scrollback.len() - self.grid.display_offset;
        let n = (lines.unsigned_abs() as usize).min(remaining);
        if n == 0 {
            return;
        }
        self.grid.display_offset += n;
        self.scroll_selection(n as i32);
        self.dirty.mark_all();
        self.hooks.overlay_scrolled(n as i32);
        self.hooks.restore_mouse_cursor();
    }

    /// `scroll_down`, but the selection survives partial visibility: it is
    /// translated and cleared only when both raw endpoints end up past the
    /// same edge of the screen.
    pub fn scroll_down_keep_selection(&mut self, lines: i32) {
        let n = (lines.unsigned_abs() as usize).min(self.grid.display_offset);
        if self.grid.display_offset > 0 {
            self.grid.display_offset -= n;
            self.translate_selection(-(n as i32));
            self.dirty.mark_all();
        }
    }

    /// `scroll_up`, but with the lenient selection-clearing rule.
    pub fn scroll_up_keep_selection(&mut self, lines: i32) {
        let remaining = self.grid.scrollback.len() - self.grid.display_offset;
        let n = (lines.unsigned_abs() as usize).min(remaining);
        if n == 0 {
            return;
        }
        self.grid.display_offset += n;
        self.translate_selection(n as i32);
        self.dirty.mark_all();
    }

    /// Scroll by input ticks, applying the configured step multiplier and
    /// selection policy. Positive ticks scroll into history.
    pub fn scroll_steps(&mut self, ticks: i32, config: &Config) {
        let step = config.scrollback.scroll_lines as i32;
        let lines = ticks.saturating_mul(step);
        match (ticks > 0, config.scrollback.keep_selection) {
            (true, true) => self.scroll_up_keep_selection(lines),
            (true, false) => self.scroll_up(lines),
            (false, true) => self.scroll_down_keep_selection(lines),
            (false, false) => self.scroll_down(lines),
        }
    }

    /// Scroll one screenful into history.
    pub fn scroll_page_up(&mut self) {
        self.scroll_up(self.grid.lines() as i32);
    }

    /// Scroll one screenful toward the live bottom.
    pub fn scroll_page_down(&mut self) {
        self.scroll_down(self.grid.lines() as i32);
    }

    /// Jump to the oldest retained row.
    pub fn scroll_to_top(&mut self) {
        self.scroll_up(i32::MAX);
    }

    /// Jump back to the live screen.
    pub fn scroll_to_bottom(&mut self) {
        self.scroll_down(i32::MAX);
    }

    /// Strict selection routine for the plain scroll operations: translate
    /// by `delta` screen rows, keep only a selection that remains entirely
    /// on screen.
    fn scroll_selection(&mut self, delta: i32) {
        let lines = self.grid.lines();
        if let Some(selection) = &mut self.selection {
            selection.translate(Line(delta));
            if !selection.is_fully_visible(lines) {
                self.selection = None;
            }
        }
    }

    /// Lenient routine for the `_keep_selection` operations: translate in
    /// place, clear only when both raw endpoints are above the screen or
    /// both at/past its bottom.
    fn translate_selection(&mut self, delta: i32) {
        let lines = self.grid.lines();
        let Some(selection) = &mut self.selection else {
            return;
        };
        self.hooks.selection_translating(delta, selection);
        selection.translate(Line(delta));
        self.hooks.selection_translated(delta, selection);
        if selection.is_fully_outside(lines) {
            self.selection = None;
        }
    }
}
