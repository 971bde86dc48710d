//! CSV reader

use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::CsvResult;
use crate::options::CsvReadOptions;
use sheetcalc_core::{Grid, GridCell};

/// CSV file reader
pub struct CsvReader;

impl CsvReader {
    /// Read a CSV file into a grid
    pub fn read_file<P: AsRef<Path>>(path: P, options: &CsvReadOptions) -> CsvResult<Grid> {
        let file = File::open(path)?;
        Self::read(file, options)
    }

    /// Read CSV from a reader into a grid
    ///
    /// Each field becomes the raw input of one cell, with the display value
    /// equal to the input until the grid is recalculated. Empty fields leave
    /// their cell unpopulated.
    pub fn read<R: Read>(reader: R, options: &CsvReadOptions) -> CsvResult<Grid> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .delimiter(options.delimiter)
            .quote(options.quote)
            .has_headers(options.has_header)
            .flexible(true)
            .from_reader(reader);

        let records = csv_reader
            .records()
            .collect::<Result<Vec<_>, _>>()?;

        let rows = options
            .rows
            .unwrap_or_else(|| records.len().max(1) as u32);
        let cols = options.cols.unwrap_or_else(|| {
            records
                .iter()
                .map(|record| record.len())
                .max()
                .unwrap_or(0)
                .max(1) as u32
        });

        let mut grid = Grid::new(rows, cols)?;

        for (row, record) in records.iter().enumerate() {
            for (col, field) in record.iter().enumerate() {
                if field.is_empty() {
                    continue;
                }
                grid.set_cell(row as u32, col as u8, GridCell::literal(field))?;
            }
        }

        log::debug!(
            "read {} records into a {}x{} grid ({} cells)",
            records.len(),
            grid.rows(),
            grid.cols(),
            grid.len()
        );
        Ok(grid)
    }
}
