//! # sheetcalc-core
//!
//! Core data structures for the sheetcalc spreadsheet engine.
//!
//! This crate provides the fundamental types used throughout sheetcalc:
//! - [`CellRef`] - Single-letter column + 1-based row cell references
//! - [`Snapshot`] - The displayed value of every cell, as formulas see it
//! - [`Grid`] - Cell storage with raw input and display value per cell
//! - [`number`] - Lenient numeric parsing shared by formulas and sorting
//!
//! ## Example
//!
//! ```rust
//! use sheetcalc_core::{Grid, GridCell};
//!
//! let mut grid = Grid::new(10, 5).unwrap();
//! grid.set_cell(0, 0, GridCell::literal("42")).unwrap();
//!
//! let snapshot = grid.snapshot();
//! assert_eq!(snapshot.get("A1"), Some("42"));
//! ```

pub mod cell;
pub mod error;
pub mod grid;
pub mod number;
pub mod snapshot;

// Re-exports for convenience
pub use cell::{CellRef, GridCell};
pub use error::{Error, Result};
pub use grid::{Grid, SortDirection, SortedEntry};
pub use snapshot::Snapshot;

/// Maximum number of columns in a grid (A-Z)
pub const MAX_COLS: u8 = 26;
