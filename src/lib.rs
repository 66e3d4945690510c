//! Scrollback viewport and selection coordination for terminal emulators.
//!
//! This crate provides the piece of a terminal emulator that sits between
//! the escape-sequence core and the renderer: a grid with bounded scrollback
//! history, a display offset that scrolls the viewport into that history,
//! and a text selection whose coordinates stay consistent while the
//! viewport moves. It also declares the text-shaping transform contract the
//! rendering path consumes. It contains no PTY, parsing, rendering, or
//! platform code.

#![deny(unsafe_code)]

pub mod cell;
pub mod config;
pub mod grid;
pub mod index;
pub mod selection;
pub mod shaping;
pub mod view;

pub use cell::{Cell, CellExtra, CellFlags};
pub use config::Config;
pub use grid::{DirtyTracker, Grid, Row, ScrollbackBuffer};
pub use index::{Column, Line, Side};
pub use selection::{Selection, SelectionPoint, extract_text};
pub use shaping::{
    HarfBuzzShaper, MonospaceShaper, ShapedGlyph, Shaper, ShapingRun, shape_line,
};
pub use view::{LogHooks, ScrollHooks, ScrollView, VoidHooks};
