//! CSV import, recalculation and export through files

use pretty_assertions::assert_eq;
use sheetcalc::prelude::*;
use sheetcalc::{CsvReadOptions, CsvWriteOptions};

#[test]
fn test_import_recalculate_export() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("input.csv");
    let output = dir.path().join("output.csv");

    std::fs::write(
        &input,
        "item,qty\napple,3\npear,4\ntotal,\"=SUM(B2:B3)\"\nsays,\"He said \"\"hi\"\"\"\n",
    )
    .unwrap();

    let mut grid = CsvReader::read_file(&input, &CsvReadOptions::default()).unwrap();
    assert_eq!(grid.rows(), 5);
    assert_eq!(grid.cols(), 2);

    let stats = grid.recalculate();
    assert_eq!(stats.formulas, 1);
    assert_eq!(grid.display_at(3, 1), "7");

    CsvWriter::write_file(&grid, &output, &CsvWriteOptions::default()).unwrap();
    let written = std::fs::read_to_string(&output).unwrap();
    assert_eq!(
        written,
        [
            "\"item\",\"qty\"",
            "\"apple\",\"3\"",
            "\"pear\",\"4\"",
            "\"total\",\"7\"",
            "\"says\",\"He said \"\"hi\"\"\"",
        ]
        .join("\n")
    );
}

#[test]
fn test_export_includes_empty_cells() {
    let mut grid = Grid::new(2, 2).unwrap();
    grid.edit_cell_at("B2", "=2*3").unwrap();

    let csv = CsvWriter::write_string(&grid, &CsvWriteOptions::default()).unwrap();
    assert_eq!(csv, "\"\",\"\"\n\"\",\"6\"");
}

#[test]
fn test_reimport_of_export_keeps_display_values() {
    let mut grid = Grid::new(2, 3).unwrap();
    grid.edit_cell_at("A1", "1,5").unwrap();
    grid.edit_cell_at("B1", "=ROUND(2.345,2)").unwrap();

    let csv = CsvWriter::write_string(&grid, &CsvWriteOptions::default()).unwrap();
    let reread = CsvReader::read(csv.as_bytes(), &CsvReadOptions::default()).unwrap();

    assert_eq!(reread.rows(), 2);
    assert_eq!(reread.cols(), 3);
    assert_eq!(reread.display_at(0, 0), "1,5");
    assert_eq!(reread.input_at(0, 1), grid.display_at(0, 1));
    assert_eq!(reread.len(), 2);
}
