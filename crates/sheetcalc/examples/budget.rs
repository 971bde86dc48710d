//! Example: Build a small budget grid with formulas and export it as CSV

use sheetcalc::prelude::*;
use sheetcalc::CsvWriteOptions;

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    let mut grid = Grid::new(6, 3)?;

    // Add header row
    grid.edit_cell_at("A1", "Item")?;
    grid.edit_cell_at("B1", "Cost")?;
    grid.edit_cell_at("C1", "Rounded")?;

    // Add data rows
    for (row, (item, cost)) in [("Rent", "1200"), ("Food", "312.456"), ("Travel", "87.5")]
        .into_iter()
        .enumerate()
    {
        let row = row as u32 + 2;
        grid.edit_cell_at(&format!("A{}", row), item)?;
        grid.edit_cell_at(&format!("B{}", row), cost)?;
        grid.edit_cell_at(&format!("C{}", row), &format!("=ROUND(B{},1)", row))?;
    }

    // Add summary rows
    grid.edit_cell_at("A5", "Total")?;
    grid.edit_cell_at("B5", "=SUM(B2:B4)")?;
    grid.edit_cell_at("A6", "Largest")?;
    grid.edit_cell_at("B6", "=VLOOKUP(\"Rent\",A2:B4,2)")?;

    let stats = grid.recalculate();
    println!(
        "Recalculated {} formulas ({} errors)",
        stats.formulas, stats.errors
    );

    // Show the column sorted by cost
    for entry in grid.sorted_column(1, SortDirection::Descending)? {
        println!("row {}: {}", entry.row + 1, entry.value);
    }

    println!("\n{}", CsvWriter::write_string(&grid, &CsvWriteOptions::default())?);
    Ok(())
}
