//! CSV writer

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use crate::error::CsvResult;
use crate::options::{CsvWriteOptions, LineTerminator};
use sheetcalc_core::Grid;

/// CSV file writer
///
/// Writes the display value of every cell of the grid, empty cells
/// included, with every field quoted.
pub struct CsvWriter;

impl CsvWriter {
    /// Write a grid to a CSV file
    pub fn write_file<P: AsRef<Path>>(
        grid: &Grid,
        path: P,
        options: &CsvWriteOptions,
    ) -> CsvResult<()> {
        let file = File::create(path)?;
        Self::write(grid, file, options)
    }

    /// Write a grid to a writer
    pub fn write<W: Write>(grid: &Grid, mut writer: W, options: &CsvWriteOptions) -> CsvResult<()> {
        let bytes = Self::encode(grid, options)?;
        writer.write_all(&bytes)?;
        writer.flush()?;
        Ok(())
    }

    /// Write a grid to a string
    pub fn write_string(grid: &Grid, options: &CsvWriteOptions) -> CsvResult<String> {
        let bytes = Self::encode(grid, options)?;
        String::from_utf8(bytes)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e).into())
    }

    fn encode(grid: &Grid, options: &CsvWriteOptions) -> CsvResult<Vec<u8>> {
        let terminator = match options.line_terminator {
            LineTerminator::LF => csv::Terminator::Any(b'\n'),
            LineTerminator::CRLF => csv::Terminator::CRLF,
        };

        let mut csv_writer = csv::WriterBuilder::new()
            .delimiter(options.delimiter)
            .quote(options.quote)
            .quote_style(csv::QuoteStyle::Always)
            .terminator(terminator)
            .from_writer(Vec::new());

        for row in 0..grid.rows() {
            let record = (0..grid.cols()).map(|col| grid.display_at(row, col));
            csv_writer.write_record(record)?;
        }

        let mut bytes = csv_writer.into_inner().map_err(|e| e.into_error())?;
        if !options.trailing_terminator {
            let end = options.line_terminator.as_bytes();
            if bytes.ends_with(end) {
                bytes.truncate(bytes.len() - end.len());
            }
        }

        log::debug!("wrote {} rows of {} columns", grid.rows(), grid.cols());
        Ok(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use sheetcalc_core::GridCell;

    fn sample() -> Grid {
        let mut grid = Grid::new(2, 3).unwrap();
        grid.set_cell(0, 0, GridCell::literal("Name")).unwrap();
        grid.set_cell(0, 1, GridCell::literal("say \"hi\"")).unwrap();
        grid.set_cell(1, 2, GridCell::new("=1+1", "2")).unwrap();
        grid
    }

    #[test]
    fn test_write_quotes_every_field() {
        let csv = CsvWriter::write_string(&sample(), &CsvWriteOptions::default()).unwrap();
        assert_eq!(csv, "\"Name\",\"say \"\"hi\"\"\",\"\"\n\"\",\"\",\"2\"");
    }

    #[test]
    fn test_write_trailing_terminator() {
        let options = CsvWriteOptions {
            line_terminator: LineTerminator::CRLF,
            trailing_terminator: true,
            ..Default::default()
        };
        let csv = CsvWriter::write_string(&sample(), &options).unwrap();
        assert!(csv.ends_with("\"2\"\r\n"));
        assert_eq!(csv.matches("\r\n").count(), 2);
    }

    #[test]
    fn test_write_delimiter() {
        let grid = Grid::new(1, 2).unwrap();
        let options = CsvWriteOptions {
            delimiter: b'\t',
            ..Default::default()
        };
        let csv = CsvWriter::write_string(&grid, &options).unwrap();
        assert_eq!(csv, "\"\"\t\"\"");
    }

    #[test]
    fn test_write_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");
        CsvWriter::write_file(&sample(), &path, &CsvWriteOptions::default()).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("\"Name\""));
        assert!(!content.ends_with('\n'));
    }
}
