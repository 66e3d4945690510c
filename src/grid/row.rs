//! One grid row: a contiguous array of cells with occupancy tracking.

use std::ops::{Index, IndexMut};

use crate::cell::{Cell, CellFlags};
use crate::index::Column;

/// One row of cells in the grid or scrollback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    /// The cells in this row.
    inner: Vec<Cell>,
    /// Index of last non-empty cell + 1 (0 = row entirely empty).
    occ: usize,
}

impl Row {
    /// Create a new row of `cols` blank cells.
    pub fn new(cols: usize) -> Self {
        Self {
            inner: vec![Cell::default(); cols],
            occ: 0,
        }
    }

    /// Number of columns in this row.
    pub fn cols(&self) -> usize {
        self.inner.len()
    }

    /// Occupancy: index of last non-empty cell + 1.
    pub fn occ(&self) -> usize {
        self.occ
    }

    /// Returns an iterator over the cells in this row.
    pub fn iter(&self) -> std::slice::Iter<'_, Cell> {
        self.inner.iter()
    }

    /// Write a cell at the given column, updating occupancy.
    ///
    /// Out-of-range columns are ignored.
    pub fn write(&mut self, col: Column, cell: Cell) {
        let idx = col.0;
        if idx < self.inner.len() {
            let occupied = !cell.is_empty();
            self.inner[idx] = cell;
            if occupied && idx + 1 > self.occ {
                self.occ = idx + 1;
            }
        }
    }

    /// Reset all cells to blank.
    pub fn reset(&mut self) {
        for cell in &mut self.inner {
            cell.reset();
        }
        self.occ = 0;
    }

    /// Whether this row soft-wraps onto the next one.
    pub fn is_wrapped(&self) -> bool {
        self.inner
            .last()
            .is_some_and(|cell| cell.flags.contains(CellFlags::WRAP))
    }
}

impl<'a> IntoIterator for &'a Row {
    type Item = &'a Cell;
    type IntoIter = std::slice::Iter<'a, Cell>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Index<Column> for Row {
    type Output = Cell;

    fn index(&self, col: Column) -> &Cell {
        &self.inner[col.0]
    }
}

impl IndexMut<Column> for Row {
    fn index_mut(&mut self, col: Column) -> &mut Cell {
        &mut self.inner[col.0]
    }
}
