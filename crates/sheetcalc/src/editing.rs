//! Grid edit path
//!
//! Entering text into a cell stores both what was typed and what the cell
//! shows. Formulas are evaluated against the display values of the whole
//! grid at the moment of the edit; they are not re-evaluated when the
//! cells they read change later, unless the grid is recalculated.
//!
//! # Example
//!
//! ```rust
//! use sheetcalc::prelude::*;
//!
//! let mut grid = Grid::new(10, 5).unwrap();
//! grid.edit_cell_at("A1", "10").unwrap();
//! grid.edit_cell_at("A2", "32").unwrap();
//! let cell = grid.edit_cell_at("A3", "=SUM(A1:A2)").unwrap();
//! assert_eq!(cell.display, "42");
//! ```

use crate::{evaluate_formula, Evaluation, Grid, GridCell, Result, Snapshot};
use sheetcalc_core::CellRef;

/// Statistics from a recalculation run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecalcStats {
    /// Number of populated cells re-entered
    pub cells: usize,
    /// Number of cells whose input is a formula
    pub formulas: usize,
    /// Number of formulas that displayed `#ERROR`
    pub errors: usize,
    /// Number of formulas that displayed `#N/A`
    pub not_available: usize,
}

/// Extension trait for Grid to add the edit path
pub trait GridEditExt {
    /// Enter `input` into the cell at 0-based `(row, col)`
    fn edit_cell(&mut self, row: u32, col: u8, input: &str) -> Result<&GridCell>;

    /// Enter `input` into the cell at an A1-style reference
    fn edit_cell_at(&mut self, reference: &str, input: &str) -> Result<&GridCell>;

    /// Re-enter every populated cell's input, in row-major order
    ///
    /// Each formula sees the display values of cells re-entered before it.
    fn recalculate(&mut self) -> RecalcStats;
}

impl GridEditExt for Grid {
    fn edit_cell(&mut self, row: u32, col: u8, input: &str) -> Result<&GridCell> {
        let snapshot = self.snapshot();
        let (cell, evaluation) = enter(input, &snapshot);
        if let Some(Evaluation::Error(e)) = &evaluation {
            log::debug!("{} = {:?}: {}", CellRef::from_grid(row, col), input, e);
        }
        self.set_cell(row, col, cell)
    }

    fn edit_cell_at(&mut self, reference: &str, input: &str) -> Result<&GridCell> {
        let (row, col) = self.locate(reference)?;
        self.edit_cell(row, col, input)
    }

    fn recalculate(&mut self) -> RecalcStats {
        let mut stats = RecalcStats::default();
        let mut snapshot = self.snapshot();

        let positions: Vec<(u32, u8)> = self.cells().map(|(pos, _)| pos).collect();
        for (row, col) in positions {
            let input = self.input_at(row, col).to_string();
            let (cell, evaluation) = enter(&input, &snapshot);

            stats.cells += 1;
            match evaluation {
                Some(Evaluation::Error(e)) => {
                    log::debug!("{} = {:?}: {}", CellRef::from_grid(row, col), input, e);
                    stats.formulas += 1;
                    stats.errors += 1;
                }
                Some(Evaluation::NotAvailable) => {
                    stats.formulas += 1;
                    stats.not_available += 1;
                }
                Some(_) => stats.formulas += 1,
                None => {}
            }

            snapshot.insert(CellRef::from_grid(row, col).to_string(), cell.display.clone());
            // Positions come from the grid itself, so they are always in bounds
            if let Err(e) = self.set_cell(row, col, cell) {
                log::warn!("skipping cell ({}, {}): {}", row, col, e);
            }
        }

        log::debug!(
            "recalculated {} cells ({} formulas, {} errors, {} not available)",
            stats.cells,
            stats.formulas,
            stats.errors,
            stats.not_available
        );
        stats
    }
}

/// Build the stored cell for an input; the evaluation is `None` for literals
fn enter(input: &str, snapshot: &Snapshot) -> (GridCell, Option<Evaluation>) {
    if !input.starts_with('=') {
        return (GridCell::literal(input), None);
    }

    let evaluation = evaluate_formula(input, snapshot);
    let cell = GridCell::new(input, evaluation.clone().into_display());
    (cell, Some(evaluation))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_edit_stores_input_and_display() {
        let mut grid = Grid::new(5, 3).unwrap();
        grid.edit_cell(0, 0, "7").unwrap();
        let cell = grid.edit_cell(0, 1, "=A1*6").unwrap();
        assert_eq!(cell.input, "=A1*6");
        // "A1*6" is neither arithmetic nor a single reference
        assert_eq!(cell.display, "=A1*6");

        let cell = grid.edit_cell(1, 1, "=POWER(A1,2)").unwrap();
        assert_eq!(cell.display, "49");
    }

    #[test]
    fn test_edit_does_not_propagate() {
        let mut grid = Grid::new(5, 3).unwrap();
        grid.edit_cell_at("A1", "1").unwrap();
        grid.edit_cell_at("B1", "=A1").unwrap();
        grid.edit_cell_at("A1", "2").unwrap();
        assert_eq!(grid.display_at(0, 1), "1");

        grid.recalculate();
        assert_eq!(grid.display_at(0, 1), "2");
    }

    #[test]
    fn test_edit_out_of_bounds() {
        let mut grid = Grid::new(2, 2).unwrap();
        assert!(grid.edit_cell(2, 0, "x").is_err());
        assert!(grid.edit_cell_at("C1", "x").is_err());
        assert!(grid.edit_cell_at("AA1", "x").is_err());
    }

    #[test]
    fn test_recalculate_stats() {
        let mut grid = Grid::new(3, 3).unwrap();
        grid.set_cell(0, 0, GridCell::literal("Apple")).unwrap();
        grid.set_cell(0, 1, GridCell::literal("5")).unwrap();
        grid.set_cell(1, 0, GridCell::literal("=VLOOKUP(\"Kiwi\",A1:B1,2)")).unwrap();
        grid.set_cell(1, 1, GridCell::literal("=1/0")).unwrap();
        grid.set_cell(2, 0, GridCell::literal("=B1*2")).unwrap();

        let stats = grid.recalculate();
        assert_eq!(
            stats,
            RecalcStats {
                cells: 5,
                formulas: 3,
                errors: 1,
                not_available: 1,
            }
        );
        assert_eq!(grid.display_at(1, 0), "#N/A");
        assert_eq!(grid.display_at(1, 1), "#ERROR");
        assert_eq!(grid.display_at(2, 0), "=B1*2");
    }

    #[test]
    fn test_recalculate_row_major_order() {
        let mut grid = Grid::new(3, 2).unwrap();
        grid.set_cell(0, 0, GridCell::literal("=B2")).unwrap();
        grid.set_cell(1, 0, GridCell::literal("=5+5")).unwrap();
        grid.set_cell(1, 1, GridCell::literal("=A2")).unwrap();

        grid.recalculate();
        // A1 saw B2 before it was recalculated; B2 saw A2 after
        assert_eq!(grid.display_at(0, 0), "=A2");
        assert_eq!(grid.display_at(1, 0), "10");
        assert_eq!(grid.display_at(1, 1), "10");
    }
}
