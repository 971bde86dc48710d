//! Grid type

use std::cmp::Ordering;
use std::collections::BTreeMap;

use crate::cell::{CellRef, GridCell};
use crate::error::{Error, Result};
use crate::number::parse_float;
use crate::snapshot::Snapshot;
use crate::MAX_COLS;

/// A fixed-size grid of cells
///
/// Coordinates are 0-based `(row, col)`; the cell at `(r, c)` is addressed in
/// formulas as column letter `'A' + c` followed by row number `r + 1`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Grid {
    rows: u32,
    cols: u8,
    /// Populated cells keyed by (row, col); iteration order is row-major
    cells: BTreeMap<(u32, u8), GridCell>,
}

/// Sort direction for [`Grid::sorted_column`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    /// The opposite direction
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }
}

/// One row of a sorted column
#[derive(Debug, Clone, PartialEq)]
pub struct SortedEntry {
    /// Original 0-based row
    pub row: u32,
    /// Display value of the cell ("" when empty)
    pub value: String,
}

impl Grid {
    /// Create an empty grid
    ///
    /// `cols` must be between 1 and 26 (single-letter columns), `rows` at least 1.
    pub fn new(rows: u32, cols: u32) -> Result<Self> {
        if rows == 0 {
            return Err(Error::InvalidDimensions {
                rows,
                cols,
                reason: "a grid needs at least one row",
            });
        }
        if cols == 0 || cols > MAX_COLS as u32 {
            return Err(Error::InvalidDimensions {
                rows,
                cols,
                reason: "columns must be between 1 and 26",
            });
        }

        Ok(Self {
            rows,
            cols: cols as u8,
            cells: BTreeMap::new(),
        })
    }

    /// Number of rows
    pub fn rows(&self) -> u32 {
        self.rows
    }

    /// Number of columns
    pub fn cols(&self) -> u8 {
        self.cols
    }

    /// Number of populated cells
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether no cell is populated
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    fn check_bounds(&self, row: u32, col: u8) -> Result<()> {
        if row >= self.rows {
            return Err(Error::RowOutOfBounds(row, self.rows - 1));
        }
        if col >= self.cols {
            return Err(Error::ColumnOutOfBounds(col as u32, self.cols as u32 - 1));
        }
        Ok(())
    }

    /// Resolve an A1-style reference to grid coordinates
    pub fn locate(&self, reference: &str) -> Result<(u32, u8)> {
        let cell = CellRef::parse(reference)?;
        let row = cell.grid_row();
        self.check_bounds(row, cell.col)?;
        Ok((row, cell.col))
    }

    // === Cell Access ===

    /// Get a cell by row and column indices
    pub fn cell(&self, row: u32, col: u8) -> Option<&GridCell> {
        self.cells.get(&(row, col))
    }

    /// Get a cell by reference string (e.g., "A1")
    pub fn cell_by_ref(&self, reference: &str) -> Result<Option<&GridCell>> {
        let (row, col) = self.locate(reference)?;
        Ok(self.cell(row, col))
    }

    /// Display value at indices ("" when the cell is empty)
    pub fn display_at(&self, row: u32, col: u8) -> &str {
        self.cell(row, col).map_or("", |c| c.display.as_str())
    }

    /// Raw input at indices ("" when the cell is empty)
    pub fn input_at(&self, row: u32, col: u8) -> &str {
        self.cell(row, col).map_or("", |c| c.input.as_str())
    }

    /// Store a cell
    pub fn set_cell(&mut self, row: u32, col: u8, cell: GridCell) -> Result<&GridCell> {
        self.check_bounds(row, col)?;
        let slot = self.cells.entry((row, col)).or_default();
        *slot = cell;
        Ok(slot)
    }

    /// Remove a cell, returning its previous contents
    pub fn clear_cell(&mut self, row: u32, col: u8) -> Option<GridCell> {
        self.cells.remove(&(row, col))
    }

    /// Iterate over populated cells in row-major order
    pub fn cells(&self) -> impl Iterator<Item = ((u32, u8), &GridCell)> {
        self.cells.iter().map(|(&pos, cell)| (pos, cell))
    }

    /// Display values of every populated cell, keyed by reference
    pub fn snapshot(&self) -> Snapshot {
        let mut snapshot = Snapshot::with_capacity(self.cells.len());
        for (&(row, col), cell) in &self.cells {
            snapshot.insert(CellRef::from_grid(row, col).to_string(), cell.display.clone());
        }
        snapshot
    }

    // === Sorting ===

    /// Rows of a column ordered by display value
    ///
    /// Values that start with a number sort numerically ahead of all other
    /// values, which sort lexically. Empty cells take part as `""`. The grid
    /// itself is left untouched.
    pub fn sorted_column(&self, col: u8, direction: SortDirection) -> Result<Vec<SortedEntry>> {
        self.check_bounds(0, col)?;

        let mut entries: Vec<SortedEntry> = (0..self.rows)
            .map(|row| SortedEntry {
                row,
                value: self.display_at(row, col).to_string(),
            })
            .collect();

        entries.sort_by(|a, b| {
            let ord = compare_display(&a.value, &b.value);
            match direction {
                SortDirection::Ascending => ord,
                SortDirection::Descending => ord.reverse(),
            }
        });

        Ok(entries)
    }
}

fn compare_display(a: &str, b: &str) -> Ordering {
    match (parse_float(a), parse_float(b)) {
        (Some(x), Some(y)) => x.total_cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a.cmp(b),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample() -> Grid {
        let mut grid = Grid::new(4, 3).unwrap();
        grid.set_cell(0, 0, GridCell::literal("10")).unwrap();
        grid.set_cell(1, 0, GridCell::literal("pear")).unwrap();
        grid.set_cell(2, 0, GridCell::literal("2")).unwrap();
        grid.set_cell(3, 0, GridCell::literal("apple")).unwrap();
        grid.set_cell(0, 1, GridCell::new("=A1*2", "20")).unwrap();
        grid
    }

    #[test]
    fn test_dimensions() {
        assert!(Grid::new(0, 5).is_err());
        assert!(Grid::new(5, 0).is_err());
        assert!(Grid::new(5, 27).is_err());

        let grid = Grid::new(100, 26).unwrap();
        assert_eq!(grid.rows(), 100);
        assert_eq!(grid.cols(), 26);
        assert!(grid.is_empty());
    }

    #[test]
    fn test_cell_access() {
        let mut grid = sample();
        assert_eq!(grid.display_at(0, 1), "20");
        assert_eq!(grid.input_at(0, 1), "=A1*2");
        assert!(grid.cell(0, 1).unwrap().is_formula());
        assert_eq!(grid.display_at(3, 2), "");

        let cell = grid.cell_by_ref("A2").unwrap().unwrap();
        assert_eq!(cell.display, "pear");

        assert!(grid.set_cell(4, 0, GridCell::literal("x")).is_err());
        assert!(grid.set_cell(0, 3, GridCell::literal("x")).is_err());
        assert!(grid.cell_by_ref("D1").is_err());

        assert_eq!(grid.clear_cell(1, 0), Some(GridCell::literal("pear")));
        assert_eq!(grid.len(), 4);
    }

    #[test]
    fn test_row_major_iteration() {
        let grid = sample();
        let order: Vec<_> = grid.cells().map(|(pos, _)| pos).collect();
        assert_eq!(order, vec![(0, 0), (0, 1), (1, 0), (2, 0), (3, 0)]);
    }

    #[test]
    fn test_snapshot() {
        let snapshot = sample().snapshot();
        assert_eq!(snapshot.len(), 5);
        assert_eq!(snapshot.get("A1"), Some("10"));
        assert_eq!(snapshot.get("B1"), Some("20"));
        assert_eq!(snapshot.get("A4"), Some("apple"));
    }

    #[test]
    fn test_sorted_column() {
        let grid = sample();

        let asc = grid.sorted_column(0, SortDirection::Ascending).unwrap();
        let values: Vec<_> = asc.iter().map(|e| e.value.as_str()).collect();
        assert_eq!(values, vec!["2", "10", "apple", "pear"]);
        assert_eq!(asc[0].row, 2);

        let desc = grid.sorted_column(0, SortDirection::Descending).unwrap();
        let values: Vec<_> = desc.iter().map(|e| e.value.as_str()).collect();
        assert_eq!(values, vec!["pear", "apple", "10", "2"]);

        // Empty cells sort as ""
        let col_c = grid.sorted_column(2, SortDirection::Ascending).unwrap();
        assert_eq!(col_c.len(), 4);
        assert!(col_c.iter().all(|e| e.value.is_empty()));
        let rows: Vec<_> = col_c.iter().map(|e| e.row).collect();
        assert_eq!(rows, vec![0, 1, 2, 3]);

        assert!(grid.sorted_column(3, SortDirection::Ascending).is_err());
        assert_eq!(SortDirection::Ascending.toggled(), SortDirection::Descending);
    }
}
