//! Viewport session state: scrollback offset, selection, and the hooks
//! that let a frontend observe scrolling.
//!
//! `ScrollView` ties the grid, the live selection, and the dirty tracker
//! together so that scrolling the viewport and keeping the selection
//! coherent is one atomic step. Frontends plug in via `ScrollHooks`; the
//! core never calls a renderer or window system directly.

mod scroll;

use crate::config::Config;
use crate::grid::{DirtyTracker, Grid};
use crate::selection::{Selection, extract_text};

/// Frontend capabilities invoked while scrolling.
///
/// All methods default to no-ops so headless embedders implement nothing.
pub trait ScrollHooks {
    /// The viewport moved by `delta` rows (positive = into history); any
    /// overlay content pinned to grid rows should follow.
    fn overlay_scrolled(&mut self, _delta: i32) {}

    /// A hidden mouse cursor should be shown again.
    fn restore_mouse_cursor(&mut self) {}

    /// Observer point before a kept selection is translated.
    fn selection_translating(&mut self, _delta: i32, _selection: &Selection) {}

    /// Observer point after a kept selection was translated.
    fn selection_translated(&mut self, _delta: i32, _selection: &Selection) {}
}

/// Hooks implementation that ignores every call.
#[derive(Debug, Clone, Copy, Default)]
pub struct VoidHooks;

impl ScrollHooks for VoidHooks {}

/// Hooks implementation that traces selection translation via `log`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogHooks;

impl ScrollHooks for LogHooks {
    fn selection_translating(&mut self, delta: i32, selection: &Selection) {
        log::trace!(
            "translating selection by {delta}: {:?}..{:?}",
            selection.nb(),
            selection.ne()
        );
    }

    fn selection_translated(&mut self, delta: i32, selection: &Selection) {
        log::trace!(
            "translated selection by {delta}: {:?}..{:?}",
            selection.nb(),
            selection.ne()
        );
    }
}

/// Scrollback viewport with selection coordination.
pub struct ScrollView<H: ScrollHooks = VoidHooks> {
    /// The grid this viewport looks into.
    pub grid: Grid,
    /// The live selection, if any, in viewport coordinates.
    selection: Option<Selection>,
    /// Redraw requests for the renderer to drain.
    pub dirty: DirtyTracker,
    hooks: H,
}

impl ScrollView<VoidHooks> {
    /// Create a view with default scrollback and no hooks.
    pub fn new(lines: usize, cols: usize) -> Self {
        Self::with_hooks(lines, cols, VoidHooks)
    }

    /// Create a view sized by configuration, with no hooks.
    pub fn with_config(lines: usize, cols: usize, config: &Config) -> Self {
        Self {
            grid: Grid::with_scrollback(lines, cols, config.scrollback.max_lines),
            selection: None,
            dirty: DirtyTracker::new(lines),
            hooks: VoidHooks,
        }
    }
}

impl<H: ScrollHooks> ScrollView<H> {
    /// Create a view with default scrollback and the given hooks.
    pub fn with_hooks(lines: usize, cols: usize, hooks: H) -> Self {
        Self {
            grid: Grid::new(lines, cols),
            selection: None,
            dirty: DirtyTracker::new(lines),
            hooks,
        }
    }

    /// The installed hooks.
    pub fn hooks(&self) -> &H {
        &self.hooks
    }

    /// The live selection, if any.
    pub fn selection(&self) -> Option<&Selection> {
        self.selection.as_ref()
    }

    /// Install a selection, replacing any existing one.
    pub fn set_selection(&mut self, selection: Selection) {
        self.selection = Some(selection);
        self.dirty.mark_all();
    }

    /// Drop the selection; dirty only when something was cleared.
    pub fn clear_selection(&mut self) {
        if self.selection.take().is_some() {
            self.dirty.mark_all();
        }
    }

    /// Extract the selected text, resolving lines through scrollback.
    pub fn selection_text(&self) -> Option<String> {
        self.selection
            .as_ref()
            .map(|selection| extract_text(&self.grid, selection))
    }
}
