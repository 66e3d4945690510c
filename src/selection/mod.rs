//! Selection endpoints and the rules that keep them valid while the
//! viewport moves.
//!
//! A selection carries two raw endpoints, `ob` (where the drag started) and
//! `oe` (where it currently is), plus the normalized pair `nb`/`ne` that
//! every reader uses. Raw endpoints remember drag direction; normalized
//! endpoints always satisfy `nb <= ne`. Lines are viewport-relative, so
//! scrolling translates endpoints rather than the underlying rows.

mod text;

pub use text::extract_text;

use crate::index::{Column, Line, Side};

/// One endpoint of a selection, with sub-cell precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionPoint {
    pub line: Line,
    pub col: Column,
    pub side: Side,
}

impl SelectionPoint {
    pub fn new(line: Line, col: Column, side: Side) -> Self {
        Self { line, col, side }
    }

    /// First column covered when this point starts a range.
    ///
    /// A start point on the right half of a cell excludes that cell.
    pub fn effective_start_col(&self) -> usize {
        match self.side {
            Side::Right => self.col.0 + 1,
            Side::Left => self.col.0,
        }
    }

    /// Last column covered when this point ends a range.
    ///
    /// An end point on the left half of a cell excludes that cell.
    pub fn effective_end_col(&self) -> usize {
        match self.side {
            Side::Left if self.col.0 > 0 => self.col.0 - 1,
            _ => self.col.0,
        }
    }
}

impl Ord for SelectionPoint {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.line
            .cmp(&other.line)
            .then(self.col.cmp(&other.col))
            .then(match (&self.side, &other.side) {
                (Side::Left, Side::Right) => std::cmp::Ordering::Less,
                (Side::Right, Side::Left) => std::cmp::Ordering::Greater,
                _ => std::cmp::Ordering::Equal,
            })
    }
}

impl PartialOrd for SelectionPoint {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// A selection in viewport coordinates.
///
/// The raw endpoints may be in either order; `nb`/`ne` are recomputed on
/// every mutation so readers never see an inverted range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    /// Raw begin endpoint (where the drag started).
    ob: SelectionPoint,
    /// Raw end endpoint (where the drag currently is).
    oe: SelectionPoint,
    /// Normalized begin (`nb <= ne`).
    nb: SelectionPoint,
    /// Normalized end.
    ne: SelectionPoint,
}

impl Selection {
    /// Create a selection between two raw endpoints, in either order.
    pub fn new(ob: SelectionPoint, oe: SelectionPoint) -> Self {
        let mut selection = Self {
            ob,
            oe,
            nb: ob,
            ne: oe,
        };
        selection.normalize();
        selection
    }

    /// Move the drag endpoint.
    pub fn update_end(&mut self, oe: SelectionPoint) {
        self.oe = oe;
        self.normalize();
    }

    /// Raw begin endpoint.
    pub fn ob(&self) -> SelectionPoint {
        self.ob
    }

    /// Raw end endpoint.
    pub fn oe(&self) -> SelectionPoint {
        self.oe
    }

    /// Normalized begin endpoint (`nb <= ne`).
    pub fn nb(&self) -> SelectionPoint {
        self.nb
    }

    /// Normalized end endpoint.
    pub fn ne(&self) -> SelectionPoint {
        self.ne
    }

    /// Shift both endpoints by `delta` lines and re-normalize.
    pub fn translate(&mut self, delta: Line) {
        self.ob.line += delta;
        self.oe.line += delta;
        self.normalize();
    }

    /// Whether both raw endpoints sit on the same side outside the visible
    /// window: both above it, or both at/below `lines`.
    ///
    /// A selection straddling the window (one endpoint out, or spanning the
    /// whole of it) is not outside.
    pub fn is_fully_outside(&self, lines: usize) -> bool {
        let lines = lines as i32;
        (self.ob.line.0 < 0 && self.oe.line.0 < 0)
            || (self.ob.line.0 >= lines && self.oe.line.0 >= lines)
    }

    /// Whether both endpoints are within the visible window `[0, lines)`.
    pub fn is_fully_visible(&self, lines: usize) -> bool {
        let lines = lines as i32;
        (0..lines).contains(&self.nb.line.0) && (0..lines).contains(&self.ne.line.0)
    }

    /// Side-aware hit test for the cell at (`line`, `col`).
    pub fn contains(&self, line: Line, col: Column) -> bool {
        if line < self.nb.line || line > self.ne.line {
            return false;
        }
        if line == self.nb.line && col.0 < self.nb.effective_start_col() {
            return false;
        }
        if line == self.ne.line && col.0 > self.ne.effective_end_col() {
            return false;
        }
        true
    }

    /// Returns `true` if the selection covers no cells.
    pub fn is_empty(&self) -> bool {
        if self.nb.line == self.ne.line {
            return self.nb.effective_start_col() > self.ne.effective_end_col();
        }
        false
    }

    fn normalize(&mut self) {
        if self.ob <= self.oe {
            self.nb = self.ob;
            self.ne = self.oe;
        } else {
            self.nb = self.oe;
            self.ne = self.ob;
        }
    }
}
