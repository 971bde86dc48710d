//! Operand resolution for aggregate functions
//!
//! An operand is either a comma-separated list of references (`A1,B2,C3`)
//! or a rectangular range (`A1:B10`). Both resolve to the display values of
//! the referenced cells, in order, skipping cells that are absent or empty.

use sheetcalc_core::number::parse_int;
use sheetcalc_core::Snapshot;

/// Resolve an operand to the ordered values it refers to
///
/// Anything that is neither a list nor a range resolves to no values.
pub fn resolve_operands<'s>(operand: &str, snapshot: &'s Snapshot) -> Vec<&'s str> {
    if operand.contains(',') {
        return operand
            .split(',')
            .filter_map(|reference| snapshot.get(reference.trim()))
            .filter(|value| !value.is_empty())
            .collect();
    }

    match RangeBounds::parse(operand) {
        Some(bounds) => bounds
            .present_cells(snapshot)
            .into_iter()
            .map(|(_, value)| value)
            .filter(|value| !value.is_empty())
            .collect(),
        None => Vec::new(),
    }
}

/// Bounds of a `start:end` range
///
/// Columns are character codes and rows are whatever integer follows the
/// column character, so malformed bounds simply describe an empty or
/// unpopulated rectangle. Bounds are not normalized: a start past the end
/// covers nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RangeBounds {
    pub start_col: u32,
    pub start_row: i64,
    pub end_col: u32,
    pub end_row: i64,
}

/// Position of a cell inside a range, as `(column code, row)`
pub type CellPos = (u32, i64);

impl RangeBounds {
    /// Parse `start:end`; `None` when the text has no `:` or a bound has no row
    pub fn parse(text: &str) -> Option<Self> {
        let (start, end) = text.split_once(':')?;
        let (start_col, start_row) = parse_bound(start)?;
        let (end_col, end_row) = parse_bound(end)?;
        Some(Self {
            start_col,
            start_row,
            end_col,
            end_row,
        })
    }

    /// Whether a position lies inside the rectangle
    pub fn contains(&self, (col, row): CellPos) -> bool {
        (self.start_col..=self.end_col).contains(&col)
            && (self.start_row..=self.end_row).contains(&row)
    }

    /// Number of positions covered by the rectangle
    pub fn area(&self) -> u128 {
        if self.start_col > self.end_col || self.start_row > self.end_row {
            return 0;
        }
        let cols = (self.end_col - self.start_col) as u128 + 1;
        let rows = (self.end_row as i128 - self.start_row as i128) as u128 + 1;
        cols * rows
    }

    /// Cells of the rectangle present in the snapshot, column-major
    ///
    /// Small rectangles are walked cell by cell; rectangles larger than the
    /// snapshot are answered by scanning the snapshot instead. Both give the
    /// same sequence.
    pub fn present_cells<'s>(&self, snapshot: &'s Snapshot) -> Vec<(CellPos, &'s str)> {
        if self.area() <= snapshot.len() as u128 {
            self.walk(snapshot)
        } else {
            self.scan(snapshot)
        }
    }

    fn walk<'s>(&self, snapshot: &'s Snapshot) -> Vec<(CellPos, &'s str)> {
        let mut cells = Vec::new();
        for col in self.start_col..=self.end_col {
            let Some(letter) = char::from_u32(col) else {
                continue;
            };
            for row in self.start_row..=self.end_row {
                let key = format!("{}{}", letter, row);
                if let Some(value) = snapshot.get(&key) {
                    cells.push(((col, row), value));
                }
            }
        }
        cells
    }

    fn scan<'s>(&self, snapshot: &'s Snapshot) -> Vec<(CellPos, &'s str)> {
        let mut cells: Vec<(CellPos, &'s str)> = snapshot
            .iter()
            .filter_map(|(key, value)| {
                let pos = canonical_position(key)?;
                self.contains(pos).then_some((pos, value))
            })
            .collect();
        cells.sort_unstable_by_key(|&(pos, _)| pos);
        cells
    }
}

fn parse_bound(bound: &str) -> Option<(u32, i64)> {
    let bound = bound.trim();
    let mut chars = bound.chars();
    let col = chars.next()? as u32;
    let row = parse_int(chars.as_str())?;
    Some((col, row))
}

/// Position of a snapshot key, only if the key is exactly how a range walk spells it
fn canonical_position(key: &str) -> Option<CellPos> {
    let mut chars = key.chars();
    let col = chars.next()?;
    let digits = chars.as_str();
    let row: i64 = digits.parse().ok()?;
    (row.to_string() == digits).then_some((col as u32, row))
}
