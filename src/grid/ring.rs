//! Scrollback ring buffer.
//!
//! Rows that scroll off the top of the visible grid are stored here. The
//! buffer grows incrementally up to `max_scrollback` (the history limit),
//! then overwrites the oldest entry on each push. Its current length is the
//! populated history depth the viewport may scroll into.

use super::row::Row;

/// Default maximum scrollback lines.
pub const DEFAULT_MAX_SCROLLBACK: usize = 10_000;

/// Ring buffer for scrollback history.
///
/// Logical index 0 is the most recently pushed row (newest), and `len - 1`
/// is the oldest. The buffer grows on demand up to `max_scrollback`; once
/// full, each `push` evicts the oldest row in O(1).
#[derive(Debug, Clone)]
pub struct ScrollbackBuffer {
    /// Storage, grows up to `max_scrollback`.
    inner: Vec<Row>,
    /// Maximum number of rows to retain (the history limit).
    max_scrollback: usize,
    /// Index of the oldest row once the buffer is full.
    start: usize,
}

impl ScrollbackBuffer {
    /// Create a new scrollback buffer with the given capacity limit.
    pub fn new(max_scrollback: usize) -> Self {
        Self {
            inner: Vec::new(),
            max_scrollback,
            start: 0,
        }
    }

    /// Add a row to scrollback.
    ///
    /// Returns `true` if the push evicted the oldest retained row. With a
    /// zero capacity the row is dropped and nothing is evicted.
    pub(super) fn push(&mut self, row: Row) -> bool {
        if self.max_scrollback == 0 {
            return false;
        }

        if self.inner.len() < self.max_scrollback {
            self.inner.push(row);
            false
        } else {
            self.inner[self.start] = row;
            self.start = (self.start + 1) % self.max_scrollback;
            true
        }
    }

    /// Number of rows currently stored (populated history depth).
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Whether the buffer is empty.
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Maximum number of rows this buffer will retain.
    pub fn max_scrollback(&self) -> usize {
        self.max_scrollback
    }

    /// Retrieve a row by logical index (0 = newest, `len - 1` = oldest).
    ///
    /// Returns `None` if `index >= len`.
    pub fn get(&self, index: usize) -> Option<&Row> {
        if index >= self.inner.len() {
            return None;
        }
        Some(&self.inner[self.physical_index(index)])
    }

    /// Iterate from newest to oldest.
    pub fn iter(&self) -> impl Iterator<Item = &Row> + '_ {
        (0..self.inner.len()).map(move |i| &self.inner[self.physical_index(i)])
    }

    /// Clear all stored rows without deallocating.
    pub fn clear(&mut self) {
        self.inner.clear();
        self.start = 0;
    }

    /// Translate a logical index (0 = newest) to a physical Vec index.
    fn physical_index(&self, logical: usize) -> usize {
        debug_assert!(logical < self.inner.len());
        let cap = self.inner.len();
        // Newest is at (start + len - 1) % cap; step backwards by `logical`.
        (self.start + cap - 1 - logical) % cap
    }
}

#[cfg(test)]
mod tests {
    use super::ScrollbackBuffer;
    use crate::cell::Cell;
    use crate::grid::row::Row;
    use crate::index::Column;

    fn text_row(text: &str) -> Row {
        let mut row = Row::new(10);
        for (i, ch) in text.chars().enumerate() {
            row.write(Column(i), Cell::new(ch));
        }
        row
    }

    fn first_char(row: &Row) -> char {
        row[Column(0)].ch
    }

    #[test]
    fn new_buffer_is_empty() {
        let ring = ScrollbackBuffer::new(100);
        assert!(ring.is_empty());
        assert_eq!(ring.len(), 0);
        assert_eq!(ring.max_scrollback(), 100);
        assert!(ring.get(0).is_none());
    }

    #[test]
    fn push_grows_until_limit() {
        let mut ring = ScrollbackBuffer::new(3);
        assert!(!ring.push(text_row("a")));
        assert!(!ring.push(text_row("b")));
        assert!(!ring.push(text_row("c")));
        assert_eq!(ring.len(), 3);
    }

    #[test]
    fn push_beyond_limit_evicts_oldest() {
        let mut ring = ScrollbackBuffer::new(3);
        ring.push(text_row("a"));
        ring.push(text_row("b"));
        ring.push(text_row("c"));
        assert!(ring.push(text_row("d")));
        assert_eq!(ring.len(), 3);
        // Newest first: d, c, b. "a" was evicted.
        assert_eq!(first_char(ring.get(0).unwrap()), 'd');
        assert_eq!(first_char(ring.get(1).unwrap()), 'c');
        assert_eq!(first_char(ring.get(2).unwrap()), 'b');
    }

    #[test]
    fn get_newest_first() {
        let mut ring = ScrollbackBuffer::new(10);
        ring.push(text_row("old"));
        ring.push(text_row("new"));
        assert_eq!(first_char(ring.get(0).unwrap()), 'n');
        assert_eq!(first_char(ring.get(1).unwrap()), 'o');
        assert!(ring.get(2).is_none());
    }

    #[test]
    fn iter_matches_get_order() {
        let mut ring = ScrollbackBuffer::new(2);
        for text in ["a", "b", "c", "d"] {
            ring.push(text_row(text));
        }
        let chars: Vec<char> = ring.iter().map(first_char).collect();
        assert_eq!(chars, vec!['d', 'c']);
    }

    #[test]
    fn zero_capacity_drops_rows() {
        let mut ring = ScrollbackBuffer::new(0);
        assert!(!ring.push(text_row("a")));
        assert!(ring.is_empty());
    }

    #[test]
    fn clear_resets_state() {
        let mut ring = ScrollbackBuffer::new(2);
        for text in ["a", "b", "c"] {
            ring.push(text_row(text));
        }
        ring.clear();
        assert!(ring.is_empty());
        ring.push(text_row("x"));
        assert_eq!(first_char(ring.get(0).unwrap()), 'x');
    }
}
