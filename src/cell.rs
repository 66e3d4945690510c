//! Terminal cell types.
//!
//! A `Cell` holds one character position of a grid row. Only the character
//! and layout flags matter to scrollback, selection, and shaping; color and
//! attribute state lives with the escape-sequence core that feeds this
//! crate. Cells with combining marks allocate heap storage behind `Arc` so
//! cloning stays O(1).

use std::sync::Arc;

use bitflags::bitflags;
use unicode_width::UnicodeWidthChar;

bitflags! {
    /// Per-cell layout flags.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct CellFlags: u8 {
        /// First cell of a double-width character.
        const WIDE_CHAR                = 1 << 0;
        /// Placeholder cell following a wide character.
        const WIDE_CHAR_SPACER         = 1 << 1;
        /// Spacer at end of row when a wide character wrapped.
        const LEADING_WIDE_CHAR_SPACER = 1 << 2;
        /// Row continues on the next row (soft wrap).
        const WRAP                     = 1 << 3;
    }
}

impl Default for CellFlags {
    fn default() -> Self {
        Self::empty()
    }
}

/// Heap-allocated optional data for cells that need it.
///
/// Only allocated when a cell carries combining marks. Normal cells keep
/// `extra: None`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CellExtra {
    /// Combining marks and zero-width characters appended to this cell.
    pub zerowidth: Vec<char>,
}

/// One character position in a grid row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    /// The character stored in this cell.
    pub ch: char,
    /// Layout flags.
    pub flags: CellFlags,
    /// Optional heap data for combining marks.
    ///
    /// Behind `Arc` so that cloning a cell with extra data is a refcount
    /// bump instead of a heap allocation.
    pub extra: Option<Arc<CellExtra>>,
}

const _: () = assert!(size_of::<Cell>() <= 16);

impl Default for Cell {
    fn default() -> Self {
        Self {
            ch: ' ',
            flags: CellFlags::empty(),
            extra: None,
        }
    }
}

impl Cell {
    /// Create a cell holding the given character with no flags.
    pub fn new(ch: char) -> Self {
        Self {
            ch,
            ..Self::default()
        }
    }

    /// Reset this cell to a blank default.
    pub fn reset(&mut self) {
        self.ch = ' ';
        self.flags = CellFlags::empty();
        self.extra = None;
    }

    /// Returns `true` if this cell is visually empty.
    pub fn is_empty(&self) -> bool {
        self.ch == ' ' && self.flags.is_empty() && self.extra.is_none()
    }

    /// Display width of this cell's character.
    ///
    /// Respects the wide-character flags and falls back to `unicode-width`.
    pub fn width(&self) -> usize {
        if self.flags.contains(CellFlags::WIDE_CHAR) {
            return 2;
        }
        if self.flags.contains(CellFlags::WIDE_CHAR_SPACER) {
            return 0;
        }
        UnicodeWidthChar::width(self.ch).unwrap_or(1)
    }

    /// Returns the zero-width combining characters attached to this cell.
    pub fn zerowidth(&self) -> &[char] {
        match &self.extra {
            Some(extra) => &extra.zerowidth,
            None => &[],
        }
    }

    /// Append a combining mark (zero-width character) to this cell.
    ///
    /// Lazily allocates `CellExtra` on the first mark. Uses `Arc::make_mut`
    /// for copy-on-write when the extra is shared.
    pub fn push_zerowidth(&mut self, ch: char) {
        let extra = self.extra.get_or_insert_with(Default::default);
        Arc::make_mut(extra).zerowidth.push(ch);
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::{Cell, CellFlags};

    #[test]
    fn size_assertion() {
        assert!(
            size_of::<Cell>() <= 16,
            "Cell is {} bytes, expected <= 16",
            size_of::<Cell>()
        );
    }

    #[test]
    fn default_cell_is_blank() {
        let cell = Cell::default();
        assert_eq!(cell.ch, ' ');
        assert!(cell.flags.is_empty());
        assert!(cell.extra.is_none());
        assert!(cell.is_empty());
    }

    #[test]
    fn is_empty_false_after_setting_char() {
        let cell = Cell::new('A');
        assert!(!cell.is_empty());
    }

    #[test]
    fn is_empty_false_for_flags() {
        let mut cell = Cell::default();
        cell.flags = CellFlags::WRAP;
        assert!(!cell.is_empty());
    }

    #[test]
    fn reset_clears_everything() {
        let mut cell = Cell::new('X');
        cell.flags = CellFlags::WIDE_CHAR;
        cell.push_zerowidth('\u{0301}');
        cell.reset();
        assert!(cell.is_empty());
    }

    #[test]
    fn wide_char_width() {
        let mut cell = Cell::new('好');
        cell.flags = CellFlags::WIDE_CHAR;
        assert_eq!(cell.width(), 2);
    }

    #[test]
    fn spacer_width() {
        let mut cell = Cell::default();
        cell.flags = CellFlags::WIDE_CHAR_SPACER;
        assert_eq!(cell.width(), 0);
    }

    #[test]
    fn normal_char_width() {
        assert_eq!(Cell::new('A').width(), 1);
    }

    #[test]
    fn push_zerowidth_creates_extra() {
        let mut cell = Cell::new('e');
        assert!(cell.extra.is_none());

        // U+0301 COMBINING ACUTE ACCENT.
        cell.push_zerowidth('\u{0301}');

        assert_eq!(cell.zerowidth(), &['\u{0301}']);
    }

    #[test]
    fn push_zerowidth_multiple_marks() {
        let mut cell = Cell::new('e');
        cell.push_zerowidth('\u{0301}');
        cell.push_zerowidth('\u{0327}');
        assert_eq!(cell.zerowidth(), &['\u{0301}', '\u{0327}']);
    }

    #[test]
    fn clone_shares_arc_refcount() {
        let mut cell = Cell::new('e');
        cell.push_zerowidth('\u{0301}');
        let cloned = cell.clone();
        assert!(Arc::ptr_eq(
            cell.extra.as_ref().unwrap(),
            cloned.extra.as_ref().unwrap()
        ));
    }

    #[test]
    fn push_zerowidth_cow_on_shared_arc() {
        let mut cell = Cell::new('e');
        cell.push_zerowidth('\u{0301}');
        let original = cell.clone();
        // Mutating cell's extra triggers COW; original stays unchanged.
        cell.push_zerowidth('\u{0327}');
        assert_eq!(original.zerowidth().len(), 1);
        assert_eq!(cell.zerowidth().len(), 2);
    }
}
