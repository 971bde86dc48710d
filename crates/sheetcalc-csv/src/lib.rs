//! # sheetcalc-csv
//!
//! CSV import and export for sheetcalc grids.
//!
//! Export writes what each cell *displays*; import reads what each cell
//! *contains* (literals and formulas), leaving evaluation to the caller.

mod error;
mod options;
mod reader;
mod writer;

pub use error::{CsvError, CsvResult};
pub use options::{CsvReadOptions, CsvWriteOptions, LineTerminator};
pub use reader::CsvReader;
pub use writer::CsvWriter;
