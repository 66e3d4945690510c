//! Line-level dirty tracking.
//!
//! The viewport coordinator cannot call a renderer directly; a "request
//! full redraw" is `mark_all()` here, and the renderer picks the damage up
//! on its own schedule via `drain()`. Fire-and-forget, no ordering
//! guarantees beyond "recorded before the scroll operation returns".

/// Tracks which visible lines have changed since the last drain.
#[derive(Debug, Clone)]
pub struct DirtyTracker {
    /// One flag per visible line.
    lines: Vec<bool>,
    /// Shortcut: everything changed (scroll, resize).
    all: bool,
}

impl DirtyTracker {
    /// Create a new tracker with all lines clean.
    pub fn new(lines: usize) -> Self {
        Self {
            lines: vec![false; lines],
            all: false,
        }
    }

    /// Mark a single line dirty.
    pub fn mark_line(&mut self, line: usize) {
        if let Some(flag) = self.lines.get_mut(line) {
            *flag = true;
        }
    }

    /// Mark everything dirty (a full-redraw request).
    pub fn mark_all(&mut self) {
        self.all = true;
    }

    /// Check whether a specific line is dirty.
    pub fn is_dirty(&self, line: usize) -> bool {
        self.all || self.lines.get(line).copied().unwrap_or(false)
    }

    /// Check whether any line is dirty.
    pub fn is_any_dirty(&self) -> bool {
        self.all || self.lines.iter().any(|&flag| flag)
    }

    /// Return the dirty line indices and reset the tracker to clean.
    pub fn drain(&mut self) -> Vec<usize> {
        let all = std::mem::take(&mut self.all);
        let mut dirty = Vec::new();
        for (line, flag) in self.lines.iter_mut().enumerate() {
            if all || *flag {
                dirty.push(line);
            }
            *flag = false;
        }
        dirty
    }

    /// Resize to a new line count, marking everything dirty.
    pub fn resize(&mut self, lines: usize) {
        self.lines.resize(lines, false);
        self.mark_all();
    }
}

#[cfg(test)]
mod tests {
    use super::DirtyTracker;

    #[test]
    fn new_tracker_is_clean() {
        let tracker = DirtyTracker::new(24);
        assert!(!tracker.is_any_dirty());
        assert!(!tracker.is_dirty(0));
    }

    #[test]
    fn mark_line_sets_only_that_line() {
        let mut tracker = DirtyTracker::new(24);
        tracker.mark_line(5);
        assert!(tracker.is_dirty(5));
        assert!(!tracker.is_dirty(4));
        assert!(tracker.is_any_dirty());
    }

    #[test]
    fn mark_line_out_of_range_is_ignored() {
        let mut tracker = DirtyTracker::new(4);
        tracker.mark_line(100);
        assert!(!tracker.is_any_dirty());
    }

    #[test]
    fn mark_all_covers_every_line() {
        let mut tracker = DirtyTracker::new(3);
        tracker.mark_all();
        for line in 0..3 {
            assert!(tracker.is_dirty(line));
        }
    }

    #[test]
    fn drain_yields_dirty_lines_and_resets() {
        let mut tracker = DirtyTracker::new(6);
        tracker.mark_line(1);
        tracker.mark_line(4);
        assert_eq!(tracker.drain(), vec![1, 4]);
        assert!(!tracker.is_any_dirty());
        assert!(tracker.drain().is_empty());
    }

    #[test]
    fn drain_after_mark_all_yields_every_line() {
        let mut tracker = DirtyTracker::new(3);
        tracker.mark_all();
        assert_eq!(tracker.drain(), vec![0, 1, 2]);
        assert!(!tracker.is_any_dirty());
    }

    #[test]
    fn resize_marks_all() {
        let mut tracker = DirtyTracker::new(2);
        tracker.drain();
        tracker.resize(5);
        assert!(tracker.is_dirty(4));
    }
}
