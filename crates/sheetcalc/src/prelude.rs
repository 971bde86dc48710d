//! Prelude module - common imports for sheetcalc users
//!
//! ```rust
//! use sheetcalc::prelude::*;
//! ```

pub use crate::{
    // Formula evaluation
    evaluate,
    // Main types
    CellRef,
    // I/O types
    CsvReader,
    CsvWriter,
    // Error types
    Error,
    Evaluation,
    Grid,
    // Extension traits
    GridEditExt,
    GridCell,
    RecalcStats,
    Result,
    Snapshot,
    SortDirection,
};
