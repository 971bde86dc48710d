//! # sheetcalc
//!
//! A small spreadsheet engine: a grid of single-letter columns whose cells
//! hold literals or formulas, and the evaluator that turns formulas into
//! display values.
//!
//! ## Features
//!
//! - Formula evaluation: SUM, AVERAGE, COUNT, MIN, MAX, PRODUCT, ROUND, IF,
//!   VLOOKUP, ABS, SQRT, POWER, MOD, CEILING, FLOOR, arithmetic and cell
//!   references
//! - Grid editing and row-major recalculation
//! - Numeric-aware column sorting
//! - CSV export of display values and import of raw inputs
//!
//! ## Example
//!
//! ```rust
//! use sheetcalc::prelude::*;
//!
//! // Evaluate a formula against a snapshot of cell values
//! let cells: Snapshot = [("A1", "1"), ("A2", "2"), ("A3", "abc")].into_iter().collect();
//! assert_eq!(evaluate("=SUM(A1:A3)", &cells), "3");
//!
//! // Or edit a grid directly
//! let mut grid = Grid::new(10, 26).unwrap();
//! grid.edit_cell_at("B1", "4").unwrap();
//! let cell = grid.edit_cell_at("B2", "=SQRT(B1)").unwrap();
//! assert_eq!(cell.display, "2");
//! ```

pub mod editing;
pub mod prelude;

// Re-export editing types
pub use editing::{GridEditExt, RecalcStats};

// Re-export core types
pub use sheetcalc_core::{
    CellRef, Error, Grid, GridCell, Result, Snapshot, SortDirection, SortedEntry, MAX_COLS,
};

// Re-export formula types
pub use sheetcalc_formula::{
    evaluate, evaluate_formula, format_number, Evaluation, FormulaError, FormulaResult,
    ERROR_SENTINEL, NOT_AVAILABLE_SENTINEL,
};

// Re-export I/O types
pub use sheetcalc_csv::{
    CsvError, CsvReadOptions, CsvReader, CsvResult, CsvWriteOptions, CsvWriter, LineTerminator,
};
